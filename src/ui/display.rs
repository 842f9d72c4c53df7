//! Concrete tile surface over an embedded-graphics draw target.
//!
//! Blits 16x16 sprite tiles out of a sheet (`ImageRaw`, two rows of 32
//! tiles, see [`sprites`](crate::ui::sprites)) onto any RGB565 panel.
//! Works with immediate-mode drivers (ST7789-class); a buffered driver
//! wraps this and flushes when `refresh` is called.

use embedded_graphics::image::{Image, ImageDrawable, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config;
use crate::ui::{sprites, TileSurface};

/// A [`TileSurface`] drawing into `D`, with the live tile state cached
/// so the renderer's read-back write-avoidance works.
pub struct TileGrid<'a, D> {
    target: D,
    sheet: ImageRaw<'a, Rgb565>,
    origin: Point,
    tiles: [[u8; config::GRID_COLS]; config::GRID_ROWS],
    dirty: bool,
}

impl<'a, D> TileGrid<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Create a grid at `origin` (top-left, px). All cells start blank;
    /// nothing is drawn until the first `set_tile`.
    pub fn new(target: D, sheet: ImageRaw<'a, Rgb565>, origin: Point) -> Self {
        Self {
            target,
            sheet,
            origin,
            tiles: [[sprites::BLANK; config::GRID_COLS]; config::GRID_ROWS],
            dirty: false,
        }
    }

    /// Whether tiles were written since the last refresh.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Access the underlying draw target (for driver-level flushing).
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Source rectangle of a sprite index within the sheet.
    fn sheet_area(sprite: u8) -> Rectangle {
        let tile = config::TILE_PX as i32;
        let col = i32::from(sprite % sprites::SHEET_STRIDE);
        let row = i32::from(sprite / sprites::SHEET_STRIDE);
        Rectangle::new(
            Point::new(col * tile, row * tile),
            Size::new(config::TILE_PX, config::TILE_PX),
        )
    }
}

impl<D> TileSurface for TileGrid<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn tile(&self, col: usize, row: usize) -> u8 {
        self.tiles[row][col]
    }

    fn set_tile(&mut self, col: usize, row: usize, sprite: u8) {
        self.tiles[row][col] = sprite;
        let tile = config::TILE_PX as i32;
        let pos = Point::new(
            self.origin.x + col as i32 * tile,
            self.origin.y + row as i32 * tile,
        );
        let sub = self.sheet.sub_image(&Self::sheet_area(sprite));
        // A failed blit leaves a stale cell on screen; the cache still
        // advances and the next differing write repaints it.
        let _ = Image::new(&sub, pos).draw(&mut self.target);
        self.dirty = true;
    }

    fn refresh(&mut self) {
        // Immediate-mode targets have nothing to flush; wrappers for
        // buffered drivers hook their flush here via `target_mut`.
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    // Zeroed two-row sheet, 512x32 px of RGB565.
    static SHEET_DATA: [u8; 512 * 32 * 2] = [0; 512 * 32 * 2];

    fn grid(display: MockDisplay<Rgb565>) -> TileGrid<'static, MockDisplay<Rgb565>> {
        let sheet = ImageRaw::new(&SHEET_DATA, 512);
        TileGrid::new(display, sheet, Point::zero())
    }

    #[test]
    fn starts_blank_and_clean() {
        let grid = grid(MockDisplay::new());
        for row in 0..config::GRID_ROWS {
            for col in 0..config::GRID_COLS {
                assert_eq!(grid.tile(col, row), sprites::BLANK);
            }
        }
        assert!(!grid.is_dirty());
    }

    #[test]
    fn set_tile_updates_cache_and_draws() {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut grid = grid(display);

        // Cell (1, 2) covers px (16, 32) .. (32, 48).
        assert_eq!(
            grid.target_mut().get_pixel(Point::new(16, 32)),
            None,
            "nothing drawn yet"
        );
        grid.set_tile(1, 2, sprites::FIVE);
        assert_eq!(grid.tile(1, 2), sprites::FIVE);
        assert!(grid.is_dirty());
        assert!(grid.target_mut().get_pixel(Point::new(16, 32)).is_some());
        // Neighboring cell untouched.
        assert_eq!(grid.target_mut().get_pixel(Point::new(32, 32)), None);
    }

    #[test]
    fn refresh_clears_dirty_flag() {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut grid = grid(display);

        grid.set_tile(0, 0, sprites::TAB);
        assert!(grid.is_dirty());
        grid.refresh();
        assert!(!grid.is_dirty());
        grid.refresh();
        assert!(!grid.is_dirty());
    }
}
