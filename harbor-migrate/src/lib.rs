//! Harbor Migration Library
//!
//! Command implementations behind the `harbor-migrate` CLI (main.rs).

pub mod commands;
pub mod logging;
