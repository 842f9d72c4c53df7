//! USB HID scancodes for a numeric keypad.
//!
//! Byte values follow chapter 10, "Keyboard/Keypad Page (0x07)", of the
//! USB HID Usages and Descriptions pdf
//! (<https://usb.org/sites/default/files/hut1_5.pdf>). This table is a
//! compatibility contract: the byte-to-name mapping must not change.

pub const ERR_ROLLOVER: u8 = 0x01;
pub const BKSP: u8 = 0x2a;
pub const TAB: u8 = 0x2b;
pub const KP_SLASH: u8 = 0x54;
pub const KP_STAR: u8 = 0x55;
pub const KP_MINUS: u8 = 0x56;
pub const KP_PLUS: u8 = 0x57;
pub const KP_ENTER: u8 = 0x58;
pub const KP_1: u8 = 0x59;
pub const KP_2: u8 = 0x5a;
pub const KP_3: u8 = 0x5b;
pub const KP_4: u8 = 0x5c;
pub const KP_5: u8 = 0x5d;
pub const KP_6: u8 = 0x5e;
pub const KP_7: u8 = 0x5f;
pub const KP_8: u8 = 0x60;
pub const KP_9: u8 = 0x61;
pub const KP_0: u8 = 0x62;
pub const KP_DOT: u8 = 0x63;

/// Logical name for a scancode, or `None` for codes this keypad never
/// sends. The 0x49..=0x52 block covers the numlock-off meanings of the
/// digit keys, so key events stay readable either way.
pub fn key_name(code: u8) -> Option<&'static str> {
    let name = match code {
        ERR_ROLLOVER => "ErrRollOver",
        BKSP => "Bksp",
        TAB => "Tab",
        0x49 => "Ins",
        0x4a => "Home",
        0x4b => "PgUp",
        0x4c => "Del",
        0x4d => "End",
        0x4e => "PgDn",
        0x4f => "Right",
        0x50 => "Left",
        0x51 => "Down",
        0x52 => "Up",
        KP_SLASH => "/",
        KP_STAR => "*",
        KP_MINUS => "-",
        KP_PLUS => "+",
        KP_ENTER => "Enter",
        KP_1 => "1",
        KP_2 => "2",
        KP_3 => "3",
        KP_4 => "4",
        KP_5 => "5",
        KP_6 => "6",
        KP_7 => "7",
        KP_8 => "8",
        KP_9 => "9",
        KP_0 => "0",
        KP_DOT => ".",
        _ => return None,
    };
    Some(name)
}
