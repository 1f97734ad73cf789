//! Drawing data structures and algorithms
//!
//! This module contains the domain types the draw command is built from:
//!
//! - `calendar`: anchor-Sunday alignment and cell-to-date mapping
//! - `canvas`: the fixed 52×7 pixel grid and its bitmap decoder
//! - `git`: subprocess driver for the external `git` binary
//! - `graph_log`: the `graph.md` day-section log

pub mod calendar;
pub mod canvas;
pub mod git;
pub mod graph_log;
