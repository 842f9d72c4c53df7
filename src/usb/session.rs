//! Device session - the connect/poll/disconnect lifecycle for exactly
//! one target HID device.
//!
//! The session owns an optional device handle. It is `Some` only after
//! discovery *and* configuration both succeeded, and goes back to `None`
//! on any transport error before that error reaches the caller - a
//! caller never observes a "connected" session after a failure.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::config;
use crate::error::TransportError;
use crate::usb::transport::{DeviceIdentity, HostBus, ReadOutcome};

/// One raw interrupt report as read from the endpoint.
pub type RawReport = Vec<u8, { config::REPORT_SIZE }>;

/// One step of the poll sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    /// A report arrived.
    Report(RawReport),
    /// The read window elapsed with no data. Happens a lot; it's fine.
    Timeout,
}

/// Connection lifecycle for one `DeviceIdentity` over a [`HostBus`].
pub struct DeviceSession<B: HostBus, D: DelayNs> {
    identity: DeviceIdentity,
    bus: B,
    delay: D,
    buf: [u8; config::REPORT_SIZE],
    device: Option<B::Handle>,
}

impl<B: HostBus, D: DelayNs> DeviceSession<B, D> {
    pub fn new(identity: DeviceIdentity, bus: B, delay: D) -> Self {
        Self {
            identity,
            bus,
            delay,
            buf: [0; config::REPORT_SIZE],
            device: None,
        }
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn is_connected(&self) -> bool {
        self.device.is_some()
    }

    /// Attempt to connect to the target device.
    ///
    /// Returns `Ok(false)` when the device is absent - the caller is
    /// expected to wait briefly and retry. A positive find is followed
    /// by a short settle delay before configuration, then driver detach
    /// (if a claim is active) and set-configuration. Either sub-step
    /// failing resets the session and propagates the error.
    pub fn find_and_configure(&mut self) -> Result<bool, TransportError> {
        let found = match self
            .bus
            .find_device(self.identity.vendor_id, self.identity.product_id)
        {
            Ok(found) => found,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };
        let Some(device) = found else {
            self.reset();
            return Ok(false);
        };
        // Let the bus settle before touching the configuration.
        self.delay.delay_ms(config::FIND_SETTLE_MS);
        self.configure(device)?;
        Ok(true)
    }

    fn configure(&mut self, mut device: B::Handle) -> Result<(), TransportError> {
        if let Err(e) = self.apply_configuration(&mut device) {
            self.reset();
            return Err(e);
        }
        // All good, so keep the handle.
        self.device = Some(device);
        Ok(())
    }

    fn apply_configuration(&mut self, device: &mut B::Handle) -> Result<(), TransportError> {
        let interface = self.identity.interface;
        if self.bus.kernel_driver_active(device, interface)? {
            self.bus.detach_kernel_driver(device, interface)?;
        }
        self.bus.set_configuration(device)
    }

    /// One step of the poll sequence.
    ///
    /// - `None`: not connected - the sequence is empty. This is how a
    ///   caller tells "never connected" from "was connected, now lost".
    /// - `Some(Ok(PollEvent::Timeout))`: no data this tick, keep going.
    /// - `Some(Ok(PollEvent::Report(_)))`: one raw report.
    /// - `Some(Err(_))`: transport failure; the session has already
    ///   reset itself, so the next call returns `None`.
    pub fn poll_next(&mut self) -> Option<Result<PollEvent, TransportError>> {
        let device = self.device.as_mut()?;
        let len = self.identity.report_len.min(config::REPORT_SIZE);
        let outcome = self.bus.read_interrupt(
            device,
            self.identity.endpoint,
            &mut self.buf[..len],
            self.identity.timeout_ms,
        );
        match outcome {
            Ok(ReadOutcome::Data(n)) => {
                let n = n.min(len);
                let raw = RawReport::from_slice(&self.buf[..n]).unwrap_or_default();
                Some(Ok(PollEvent::Report(raw)))
            }
            Ok(ReadOutcome::Timeout) => Some(Ok(PollEvent::Timeout)),
            Err(e) => {
                self.reset();
                Some(Err(e))
            }
        }
    }

    /// Iterator over the poll sequence (see [`poll_next`](Self::poll_next)).
    ///
    /// Yields until disconnect; an `Err` item is always the last one.
    pub fn poll(&mut self) -> Poller<'_, B, D> {
        Poller { session: self }
    }

    /// Human-readable connection summary.
    ///
    /// `"[Not connected]"` without a handle, `"[bad vid:pid]"` when the
    /// transport reports 0000:0000 for a connected device (a known host
    /// stack quirk worth surfacing), `"Connected: vvvv:pppp"` otherwise.
    pub fn device_info_str(&mut self) -> String<32> {
        let mut s = String::new();
        match &self.device {
            None => {
                let _ = s.push_str("[Not connected]");
            }
            Some(device) => {
                let (vid, pid) = self.bus.identifiers(device);
                if vid == 0 && pid == 0 {
                    let _ = s.push_str("[bad vid:pid]");
                } else {
                    let _ = write!(s, "Connected: {vid:04x}:{pid:04x}");
                }
            }
        }
        s
    }

    /// Drop the device handle. Idempotent.
    pub fn reset(&mut self) {
        self.device = None;
    }
}

/// Pull-based view of the poll sequence.
pub struct Poller<'a, B: HostBus, D: DelayNs> {
    session: &'a mut DeviceSession<B, D>,
}

impl<B: HostBus, D: DelayNs> Iterator for Poller<'_, B, D> {
    type Item = Result<PollEvent, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.session.poll_next()
    }
}
