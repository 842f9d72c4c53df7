//! Desktop bridge binary - maintains a keypad connection over the
//! host-OS HID stack and logs decoded key events.
//!
//! The tile grid lives in memory here (there is no panel attached to a
//! desktop); cell writes and refreshes go to the debug log, so the full
//! render path is exercised end to end.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use tracing::{debug, info, warn};

use usb2tft::config;
use usb2tft::hid::{key_name, ScancodeSet};
use usb2tft::supervisor::{StepEvent, Supervisor};
use usb2tft::ui::TileSurface;
use usb2tft::usb::hidapi_bus::HidapiBus;
use usb2tft::usb::{DeviceIdentity, DeviceSession};

/// Blocking delays via the OS scheduler.
#[derive(Clone, Copy)]
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// In-memory tile surface; writes and refreshes go to the debug log.
#[derive(Default)]
struct LogSurface {
    tiles: [[u8; config::GRID_COLS]; config::GRID_ROWS],
}

impl TileSurface for LogSurface {
    fn tile(&self, col: usize, row: usize) -> u8 {
        self.tiles[row][col]
    }

    fn set_tile(&mut self, col: usize, row: usize, sprite: u8) {
        self.tiles[row][col] = sprite;
        debug!("tile ({col},{row}) <- sprite {sprite}");
    }

    fn refresh(&mut self) {
        debug!("display refresh");
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn hex_codes(raw: &[u8]) -> String {
    raw.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn key_names(held: &ScancodeSet) -> String {
    held.iter()
        .filter_map(key_name)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    setup_logging();

    let identity = DeviceIdentity::keypad();
    let finding = format!(
        "Finding USB device {:04x}:{:04x}...",
        identity.vendor_id, identity.product_id
    );

    let bus = HidapiBus::new()?;
    let session = DeviceSession::new(identity, bus, StdDelay);
    let mut sup = Supervisor::new(session, LogSurface::default(), StdDelay);

    info!("{finding}");

    // MAIN EVENT LOOP - runs until the process is killed. Device errors
    // are recovered by returning to discovery, never by exiting.
    loop {
        match sup.step() {
            StepEvent::NotFound | StepEvent::Idle => {}
            StepEvent::SetupFailed(e) => {
                warn!("USB error during setup: {e}");
                info!("{finding}");
            }
            StepEvent::Connected => info!("{}", sup.device_info()),
            StepEvent::PollingStarted => info!("Polling for USB reports..."),
            StepEvent::Keys { raw, held } => {
                // Raw hex always shows; unknown codes simply have no name.
                info!("{} -- {}", hex_codes(&raw), key_names(&held));
            }
            StepEvent::Malformed(raw) => {
                warn!("skipping short report: {}", hex_codes(&raw));
            }
            StepEvent::LinkDown => {
                info!("USB device disconnected");
                info!("{finding}");
            }
            StepEvent::LinkFailed(e) => {
                warn!("USB error: {e}");
                info!("{finding}");
            }
        }
    }
}
