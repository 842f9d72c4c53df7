//! Application-wide constants and compile-time configuration.
//!
//! Device identity, timing parameters, and display geometry live here
//! so they can be tuned in one place.

// Target device

/// USB vendor id of the Perixx PPD-202 numeric keypad.
pub const KEYPAD_VID: u16 = 0x04d9;

/// USB product id of the Perixx PPD-202 numeric keypad.
pub const KEYPAD_PID: u16 = 0xa02a;

/// HID interface number carrying the keypad's boot-protocol reports.
pub const KEYPAD_INTERFACE: u8 = 0;

/// Interrupt IN endpoint address for key reports.
pub const KEYPAD_ENDPOINT: u8 = 0x81;

/// Size of one boot-protocol keypad report in bytes.
pub const REPORT_SIZE: usize = 8;

// Timing
//
// The settle delays keep the host bus happy; they were validated against
// real hardware and are not general-purpose knobs.

/// Blocking read timeout per poll (ms).
/// CAUTION: setting this too low can *severely* reduce overall system
/// responsiveness.
pub const READ_TIMEOUT_MS: u32 = 300;

/// Delay after a positive find, before configuration (ms).
pub const FIND_SETTLE_MS: u32 = 100;

/// Delay between failed discovery attempts (ms).
pub const RETRY_BACKOFF_MS: u32 = 200;

/// Delay after a successful connect, before polling starts (ms).
pub const CONNECT_SETTLE_MS: u32 = 1000;

// Display

/// Tile grid width in cells (keypad block plus status banner).
pub const GRID_COLS: usize = 6;

/// Tile grid height in cells.
pub const GRID_ROWS: usize = 5;

/// Edge length of one square sprite tile (px).
pub const TILE_PX: u32 = 16;
