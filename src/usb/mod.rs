//! USB Host subsystem - connects to and polls one wired HID keypad.
//!
//! The session logic is platform-independent: everything hardware-facing
//! goes through the [`HostBus`](transport::HostBus) trait, so the same
//! [`DeviceSession`](session::DeviceSession) runs against the desktop
//! hidapi stack or an embedded host-chip driver.

pub mod session;
pub mod transport;

#[cfg(feature = "desktop")]
pub mod hidapi_bus;

pub use session::{DeviceSession, PollEvent, RawReport};
pub use transport::{DeviceIdentity, HostBus, ReadOutcome};
