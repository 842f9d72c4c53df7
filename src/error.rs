//! Unified error type for usb2tft.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Two expected conditions are deliberately *not* errors:
//! - "device not found" at discovery time is a `bool` from
//!   [`find_and_configure`](crate::usb::session::DeviceSession::find_and_configure);
//! - a poll timeout is [`PollEvent::Timeout`](crate::usb::session::PollEvent).

/// Failures surfaced by the USB host transport.
///
/// Any of these forces the owning session back to the disconnected
/// state before the error reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Driver detach or set-configuration failed during connection setup.
    Configuration,

    /// The device vanished mid-session (cable unplug, bus reset).
    Disconnected,

    /// The host OS refused access to the device node.
    Access,

    /// Any other low-level transport failure.
    Io,
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            TransportError::Configuration => "configuration failed",
            TransportError::Disconnected => "device disconnected",
            TransportError::Access => "access denied",
            TransportError::Io => "transport I/O error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "desktop")]
impl std::error::Error for TransportError {}
