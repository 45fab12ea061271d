//! Utils Module - Helper Functions & Shared Utilities

pub mod constants;
pub mod time;

pub use constants::*;
pub use time::*;
