//! usb2tft - bridges a wired USB HID numeric keypad to a tile display.
//!
//! The core is platform-independent and `no_std`: a device session
//! drives any [`HostBus`](usb::transport::HostBus) implementation, the
//! decoder turns raw reports into held-scancode sets, and the renderer
//! projects those onto any [`TileSurface`](ui::TileSurface). The
//! supervisor ties them into a forever-running reconnect loop.
//!
//! Host tests run with no features (`cargo test`); the desktop binary
//! needs `--features desktop`.

#![cfg_attr(not(any(test, feature = "desktop")), no_std)]

pub mod config;
pub mod error;
pub mod hid;
pub mod supervisor;
pub mod ui;
pub mod usb;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - session / renderer / supervisor logic with scripted mocks
// ═══════════════════════════════════════════════════════════════════════════
