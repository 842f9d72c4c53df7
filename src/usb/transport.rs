//! Host transport seam - the interface the session needs from a USB
//! host stack, and the identity of the device it targets.

use crate::config;
use crate::error::TransportError;

/// Immutable description of one target HID device.
///
/// Set once at construction, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface: u8,
    pub endpoint: u8,
    /// Length of one interrupt report in bytes (at most [`config::REPORT_SIZE`]).
    pub report_len: usize,
    pub timeout_ms: u32,
}

impl DeviceIdentity {
    /// Identity with the standard boot-keypad interface/endpoint/timing.
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            interface: config::KEYPAD_INTERFACE,
            endpoint: config::KEYPAD_ENDPOINT,
            report_len: config::REPORT_SIZE,
            timeout_ms: config::READ_TIMEOUT_MS,
        }
    }

    /// The configured target keypad (Perixx PPD-202).
    pub const fn keypad() -> Self {
        Self::new(config::KEYPAD_VID, config::KEYPAD_PID)
    }
}

/// Outcome of one blocking interrupt read.
///
/// A timeout is an expected, zero-cost result - not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadOutcome {
    /// `n` bytes of report data were written to the buffer.
    Data(usize),
    /// No report arrived within the timeout window.
    Timeout,
}

/// The operations a USB host stack must provide.
///
/// Protocol-level enumeration, descriptor parsing and bus management
/// stay behind this trait; the session only ever finds, configures and
/// reads. Implementations: [`HidapiBus`](crate::usb::hidapi_bus::HidapiBus)
/// on the desktop, host-chip drivers on embedded targets.
pub trait HostBus {
    /// Opaque handle to one connected device.
    type Handle;

    /// Enumerate by vendor/product id. `Ok(None)` means the device is
    /// absent, which is expected and recoverable.
    fn find_device(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Option<Self::Handle>, TransportError>;

    /// Whether a host-OS or firmware-default driver currently claims
    /// the interface.
    fn kernel_driver_active(
        &mut self,
        device: &mut Self::Handle,
        interface: u8,
    ) -> Result<bool, TransportError>;

    /// Release a pre-existing driver claim on the interface.
    fn detach_kernel_driver(
        &mut self,
        device: &mut Self::Handle,
        interface: u8,
    ) -> Result<(), TransportError>;

    /// Select the device's active configuration.
    fn set_configuration(&mut self, device: &mut Self::Handle) -> Result<(), TransportError>;

    /// One blocking interrupt-endpoint read into `buf`, bounded by
    /// `timeout_ms`.
    fn read_interrupt(
        &mut self,
        device: &mut Self::Handle,
        endpoint: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<ReadOutcome, TransportError>;

    /// Vendor/product id as the transport currently reports them.
    ///
    /// Some stacks occasionally report 0000:0000 for a connected
    /// device; callers surface that instead of hiding it.
    fn identifiers(&mut self, device: &Self::Handle) -> (u16, u16);
}
