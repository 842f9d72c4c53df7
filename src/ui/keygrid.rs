//! Static keypad layout and the key-state renderer.
//!
//! Grid layout (cols 0-3 keypad block, cols 4-5 status banner):
//!
//! ```text
//! row 0:  Tab   /     *     Bksp   Err  Err
//! row 1:  7     8     9     -
//! row 2:  4     5     6     +
//! row 3:  1     2     3     Enter (top)
//! row 4:  0     0     .     Enter (bottom)
//! ```
//!
//! `0` spans two columns, `Enter` two rows, and the rollover-error
//! banner two cells; each entry lists every cell its glyph occupies.

use crate::hid::scancodes;
use crate::hid::ScancodeSet;
use crate::ui::{sprites, TileSurface};

/// One tile cell of a key's glyph.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCell {
    pub col: u8,
    pub row: u8,
    pub unlit: u8,
    pub lit: u8,
}

/// A logical key and the cell(s) its glyph occupies. Never more than
/// two cells; cells of distinct keys never overlap.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyVisual {
    pub scancode: u8,
    pub cells: &'static [KeyCell],
}

const fn cell(col: u8, row: u8, sprite: u8) -> KeyCell {
    KeyCell {
        col,
        row,
        unlit: sprite,
        lit: sprite + sprites::LIT_OFFSET,
    }
}

/// The fixed key-to-cell table. Loaded once, never mutated.
pub static KEYPAD_LAYOUT: &[KeyVisual] = &[
    KeyVisual {
        scancode: scancodes::TAB,
        cells: &[cell(0, 0, sprites::TAB)],
    },
    KeyVisual {
        scancode: scancodes::KP_SLASH,
        cells: &[cell(1, 0, sprites::SLASH)],
    },
    KeyVisual {
        scancode: scancodes::KP_STAR,
        cells: &[cell(2, 0, sprites::STAR)],
    },
    KeyVisual {
        scancode: scancodes::BKSP,
        cells: &[cell(3, 0, sprites::BKSP)],
    },
    KeyVisual {
        scancode: scancodes::ERR_ROLLOVER,
        cells: &[cell(4, 0, sprites::ERR_LEFT), cell(5, 0, sprites::ERR_RIGHT)],
    },
    KeyVisual {
        scancode: scancodes::KP_7,
        cells: &[cell(0, 1, sprites::SEVEN)],
    },
    KeyVisual {
        scancode: scancodes::KP_8,
        cells: &[cell(1, 1, sprites::EIGHT)],
    },
    KeyVisual {
        scancode: scancodes::KP_9,
        cells: &[cell(2, 1, sprites::NINE)],
    },
    KeyVisual {
        scancode: scancodes::KP_MINUS,
        cells: &[cell(3, 1, sprites::MINUS)],
    },
    KeyVisual {
        scancode: scancodes::KP_4,
        cells: &[cell(0, 2, sprites::FOUR)],
    },
    KeyVisual {
        scancode: scancodes::KP_5,
        cells: &[cell(1, 2, sprites::FIVE)],
    },
    KeyVisual {
        scancode: scancodes::KP_6,
        cells: &[cell(2, 2, sprites::SIX)],
    },
    KeyVisual {
        scancode: scancodes::KP_PLUS,
        cells: &[cell(3, 2, sprites::PLUS)],
    },
    KeyVisual {
        scancode: scancodes::KP_1,
        cells: &[cell(0, 3, sprites::ONE)],
    },
    KeyVisual {
        scancode: scancodes::KP_2,
        cells: &[cell(1, 3, sprites::TWO)],
    },
    KeyVisual {
        scancode: scancodes::KP_3,
        cells: &[cell(2, 3, sprites::THREE)],
    },
    KeyVisual {
        scancode: scancodes::KP_ENTER,
        cells: &[
            cell(3, 3, sprites::ENTER_TOP),
            cell(3, 4, sprites::ENTER_BOTTOM),
        ],
    },
    KeyVisual {
        scancode: scancodes::KP_0,
        cells: &[
            cell(0, 4, sprites::ZERO_LEFT),
            cell(1, 4, sprites::ZERO_RIGHT),
        ],
    },
    KeyVisual {
        scancode: scancodes::KP_DOT,
        cells: &[cell(2, 4, sprites::DOT)],
    },
];

/// Project the held-key set onto the surface.
///
/// Every layout entry gets its lit or unlit sprite depending on set
/// membership; cells already holding the wanted index are skipped
/// entirely, so rendering the same set twice writes nothing. No refresh
/// happens here - the caller issues exactly one per rendered report.
pub fn render<S: TileSurface>(held: &ScancodeSet, surface: &mut S) {
    for key in KEYPAD_LAYOUT {
        let pressed = held.contains(key.scancode);
        for c in key.cells {
            let want = if pressed { c.lit } else { c.unlit };
            if surface.tile(c.col as usize, c.row as usize) != want {
                surface.set_tile(c.col as usize, c.row as usize, want);
            }
        }
    }
}
