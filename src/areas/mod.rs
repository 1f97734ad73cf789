//! Core repository components
//!
//! This module contains the coordination layer of the tool:
//!
//! - `repository`: the target Git repository, its `graph.md` log and the
//!   output writer every drawing operation reports through

pub mod repository;
