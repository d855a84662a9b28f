//! Swell CLI library.
//!
//! Command implementations and params loading for the `swell` binary.

pub mod commands;
pub mod input;
