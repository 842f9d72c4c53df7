//! Outer supervisory loop - the top-level recovery boundary.
//!
//! Three states: `Disconnected` (keep trying to find the keypad),
//! `ConnectedIdle` (just connected, let the device settle), `Polling`
//! (drain reports). Transport errors are absorbed here: they drop the
//! link back to `Disconnected` and the loop re-discovers; nothing
//! propagates further. The system runs unattended indefinitely.
//!
//! `step()` performs exactly one transition and reports what happened,
//! so the caller owns pacing and logging and tests can walk the machine
//! transition by transition.

use embedded_hal::delay::DelayNs;

use crate::config;
use crate::error::TransportError;
use crate::hid::{self, ScancodeSet};
use crate::ui::{self, TileSurface};
use crate::usb::session::{DeviceSession, PollEvent, RawReport};
use crate::usb::transport::HostBus;

/// Connection state of the supervised link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Disconnected,
    ConnectedIdle,
    Polling,
}

/// What one `step()` did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepEvent {
    /// Discovery found nothing; one backoff delay was taken.
    NotFound,
    /// Connection setup failed; the session already reset itself.
    SetupFailed(TransportError),
    /// Found and configured.
    Connected,
    /// Post-connect settle done; report draining begins.
    PollingStarted,
    /// Poll timed out - nothing held this tick. Entirely normal.
    Idle,
    /// One report decoded, rendered, and the display refreshed.
    Keys { raw: RawReport, held: ScancodeSet },
    /// A report of unexpected length was skipped.
    Malformed(RawReport),
    /// Poll sequence ended without an error (link cleanly gone).
    LinkDown,
    /// Poll sequence ended on a transport error (already recovered).
    LinkFailed(TransportError),
}

/// Drives one session and one surface forever.
pub struct Supervisor<B: HostBus, D: DelayNs, S: TileSurface> {
    session: DeviceSession<B, D>,
    surface: S,
    delay: D,
    state: LinkState,
}

impl<B: HostBus, D: DelayNs, S: TileSurface> Supervisor<B, D, S> {
    pub fn new(session: DeviceSession<B, D>, surface: S, delay: D) -> Self {
        Self {
            session,
            surface,
            delay,
            state: LinkState::Disconnected,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Connection summary for diagnostics (see
    /// [`DeviceSession::device_info_str`]).
    pub fn device_info(&mut self) -> heapless::String<32> {
        self.session.device_info_str()
    }

    /// Run one state-machine transition.
    pub fn step(&mut self) -> StepEvent {
        match self.state {
            LinkState::Disconnected => match self.session.find_and_configure() {
                Ok(true) => {
                    self.state = LinkState::ConnectedIdle;
                    StepEvent::Connected
                }
                Ok(false) => {
                    // No connection yet; wait briefly before retrying.
                    self.delay.delay_ms(config::RETRY_BACKOFF_MS);
                    StepEvent::NotFound
                }
                Err(e) => StepEvent::SetupFailed(e),
            },
            LinkState::ConnectedIdle => {
                self.delay.delay_ms(config::CONNECT_SETTLE_MS);
                self.state = LinkState::Polling;
                StepEvent::PollingStarted
            }
            LinkState::Polling => match self.session.poll_next() {
                None => {
                    self.state = LinkState::Disconnected;
                    StepEvent::LinkDown
                }
                Some(Ok(PollEvent::Timeout)) => StepEvent::Idle,
                Some(Ok(PollEvent::Report(raw))) => match hid::decode(&raw) {
                    Some(held) => {
                        ui::render(&held, &mut self.surface);
                        // One refresh per report, after all cell writes.
                        self.surface.refresh();
                        StepEvent::Keys { raw, held }
                    }
                    None => StepEvent::Malformed(raw),
                },
                Some(Err(e)) => {
                    self.state = LinkState::Disconnected;
                    StepEvent::LinkFailed(e)
                }
            },
        }
    }
}
