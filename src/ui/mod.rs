//! Display subsystem - projects held keys onto a grid of sprite tiles.
//!
//! ## Components
//!
//! - **TileSurface**: the interface the renderer needs from a display -
//!   read/write tile indices, request a refresh. Nothing else.
//! - **keygrid**: the static key-to-cell layout and the renderer.
//! - **display**: a concrete `TileSurface` over any embedded-graphics
//!   draw target (ST7789-class RGB565 panels).

pub mod display;
pub mod keygrid;
pub mod sprites;

pub use keygrid::render;

/// A grid of sprite tiles the renderer can write to.
///
/// The surface owns the live tile state; the renderer reads it back to
/// avoid redundant writes. `refresh` makes pending writes visible -
/// the renderer never calls it, so that one caller-issued refresh
/// coalesces all cell updates for a report.
pub trait TileSurface {
    /// Sprite index currently held at (col, row).
    fn tile(&self, col: usize, row: usize) -> u8;

    /// Put a sprite index at (col, row).
    fn set_tile(&mut self, col: usize, row: usize, sprite: u8);

    /// Push pending tile writes to the screen.
    fn refresh(&mut self);
}
