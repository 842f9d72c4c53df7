//! [`HostBus`] over the host-OS HID stack (hidapi).
//!
//! hidapi detaches kernel drivers and selects the configuration itself
//! when opening a device, so those two trait operations are no-ops
//! here; they stay meaningful for host-chip implementations.

use hidapi::{HidApi, HidDevice, HidError};

use crate::error::TransportError;
use crate::usb::transport::{HostBus, ReadOutcome};

impl From<HidError> for TransportError {
    fn from(e: HidError) -> Self {
        let msg = e.to_string();
        if msg.contains("Permission denied") || msg.contains("EPERM") {
            TransportError::Access
        } else {
            TransportError::Io
        }
    }
}

/// Desktop host transport.
pub struct HidapiBus {
    api: HidApi,
}

impl HidapiBus {
    pub fn new() -> Result<Self, TransportError> {
        let api = HidApi::new()?;
        Ok(Self { api })
    }
}

impl HostBus for HidapiBus {
    type Handle = HidDevice;

    fn find_device(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Option<Self::Handle>, TransportError> {
        self.api.refresh_devices()?;
        let present = self
            .api
            .device_list()
            .any(|d| d.vendor_id() == vendor_id && d.product_id() == product_id);
        if !present {
            return Ok(None);
        }
        let device = self.api.open(vendor_id, product_id)?;
        Ok(Some(device))
    }

    fn kernel_driver_active(
        &mut self,
        _device: &mut Self::Handle,
        _interface: u8,
    ) -> Result<bool, TransportError> {
        // hidapi already took the interface away from the kernel.
        Ok(false)
    }

    fn detach_kernel_driver(
        &mut self,
        _device: &mut Self::Handle,
        _interface: u8,
    ) -> Result<(), TransportError> {
        Ok(())
    }

    fn set_configuration(&mut self, _device: &mut Self::Handle) -> Result<(), TransportError> {
        Ok(())
    }

    fn read_interrupt(
        &mut self,
        device: &mut Self::Handle,
        _endpoint: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<ReadOutcome, TransportError> {
        // hidapi routes the interrupt IN endpoint through read();
        // a zero-byte result means the timeout elapsed.
        let n = device.read_timeout(buf, timeout_ms as i32)?;
        if n == 0 {
            Ok(ReadOutcome::Timeout)
        } else {
            Ok(ReadOutcome::Data(n))
        }
    }

    fn identifiers(&mut self, device: &Self::Handle) -> (u16, u16) {
        match device.get_device_info() {
            Ok(info) => (info.vendor_id(), info.product_id()),
            // Fall through to the degenerate-identity sentinel.
            Err(_) => (0, 0),
        }
    }
}
