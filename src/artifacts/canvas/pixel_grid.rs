use crate::artifacts::canvas::{GRID_HEIGHT, GRID_WIDTH};
use anyhow::Context;
use derive_new::new;
use image::GenericImageView;
use std::path::Path;

/// The 52×7 boolean matrix behind the commit-activity calendar.
///
/// Row 0 is Sunday, column 0 is the anchor week. Cells are indexed as
/// `cells[row][column]` and the grid is immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PixelGrid {
    cells: [[bool; GRID_WIDTH]; GRID_HEIGHT],
}

impl PixelGrid {
    /// Decodes a bitmap file into a grid by sampling the top-left 52×7
    /// region. Images smaller than the grid in either axis are rejected.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to decode bitmap '{}'", path.display()))?;

        let (width, height) = image.dimensions();
        if (width as usize) < GRID_WIDTH || (height as usize) < GRID_HEIGHT {
            anyhow::bail!(
                "bitmap is {width}x{height}, expected at least {GRID_WIDTH}x{GRID_HEIGHT}"
            );
        }

        let samples = image.to_rgba8();
        let mut cells = [[false; GRID_WIDTH]; GRID_HEIGHT];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                // Anything but fully opaque pure white counts as lit,
                // near-white and transparent pixels included.
                *cell = samples.get_pixel(x as u32, y as u32).0 != [255, 255, 255, 255];
            }
        }

        Ok(Self::new(cells))
    }

    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        self.cells[row][column]
    }

    /// Lit cells in column-major order: week by week, Sunday row first
    /// within each week. Commit ordinals follow this enumeration.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_WIDTH)
            .flat_map(|column| (0..GRID_HEIGHT).map(move |row| (column, row)))
            .filter(|&(column, row)| self.cells[row][column])
    }
}
