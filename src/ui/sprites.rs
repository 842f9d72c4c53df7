//! Sprite-sheet index constants.
//!
//! The sheet is two rows of 32 tiles: row 0 holds the unlit (dark)
//! glyphs, row 1 the lit variants, so a glyph's lit index is its unlit
//! index plus [`LIT_OFFSET`]. Index 0 is the blank tile; glyph indices
//! start at 1 so a freshly cleared grid repaints fully on first render.

/// Tiles per sheet row.
pub const SHEET_STRIDE: u8 = 32;

/// Added to an unlit index to get the lit variant.
pub const LIT_OFFSET: u8 = SHEET_STRIDE;

pub const BLANK: u8 = 0;

pub const TAB: u8 = 1;
pub const SLASH: u8 = 2;
pub const STAR: u8 = 3;
pub const BKSP: u8 = 4;
pub const MINUS: u8 = 5;
pub const PLUS: u8 = 6;
/// Tall Enter glyph, upper half.
pub const ENTER_TOP: u8 = 7;
/// Tall Enter glyph, lower half.
pub const ENTER_BOTTOM: u8 = 8;
pub const DOT: u8 = 9;
/// Wide zero glyph, left half.
pub const ZERO_LEFT: u8 = 10;
/// Wide zero glyph, right half.
pub const ZERO_RIGHT: u8 = 11;
pub const ONE: u8 = 12;
pub const TWO: u8 = 13;
pub const THREE: u8 = 14;
pub const FOUR: u8 = 15;
pub const FIVE: u8 = 16;
pub const SIX: u8 = 17;
pub const SEVEN: u8 = 18;
pub const EIGHT: u8 = 19;
pub const NINE: u8 = 20;
/// Rollover-error banner, left half.
pub const ERR_LEFT: u8 = 21;
/// Rollover-error banner, right half.
pub const ERR_RIGHT: u8 = 22;
