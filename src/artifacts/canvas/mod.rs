//! The drawable canvas
//!
//! A contribution calendar is a grid of 52 week columns by 7 weekday rows.
//! `pixel_grid` holds the boolean matrix decoded from a bitmap of exactly
//! that shape.

pub mod pixel_grid;

/// Grid columns: one per week, the rightmost being the current week.
pub const GRID_WIDTH: usize = 52;

/// Grid rows: one per weekday, Sunday first.
pub const GRID_HEIGHT: usize = 7;
