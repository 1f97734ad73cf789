use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Writes a 52×7 bitmap that is white everywhere except the given
/// (column, row) cells, which are painted black.
pub fn write_bitmap(dir: &Path, name: &str, lit: &[(u32, u32)]) -> PathBuf {
    let mut image = RgbImage::from_pixel(52, 7, Rgb([255, 255, 255]));
    for &(column, row) in lit {
        image.put_pixel(column, row, Rgb([0, 0, 0]));
    }

    let path = dir.join(name);
    image.save(&path).expect("Failed to write bitmap");
    path
}
