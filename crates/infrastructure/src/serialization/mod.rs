//! JSON input for configuration records and options.

mod json;

pub use json::*;
