//! Type-safe tool argument modules.
//!
//! This module contains structs that implement `ToolArgs` for each external
//! command a scaffold run issues.

pub mod npm;
pub mod tailwind;
