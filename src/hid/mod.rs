//! HID report decoding for the numeric keypad.
//!
//! One boot-protocol report is 8 bytes: a modifier bitfield, a reserved
//! byte, then up to six scancode slots. The decoder turns one report
//! into the set of currently-held scancodes; the scancode table maps
//! those bytes to logical key names.

pub mod keypad;
pub mod scancodes;

#[cfg(test)]
mod tests;

pub use keypad::{decode, ScancodeSet};
pub use scancodes::key_name;
