//! Command implementations for the swell CLI.

pub mod json_output;
pub mod render;
pub mod template;
pub mod validate;
