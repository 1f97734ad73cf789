//! Command implementations
//!
//! The tool exposes a single user-facing operation:
//!
//! - `draw`: replay a decoded pixel grid as backdated commits on a fresh
//!   branch of the target repository

pub mod draw;
