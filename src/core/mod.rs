//! Core Module - Lookup, Detection & Export Logic

pub mod detect;
pub mod export;
pub mod lookup;

pub use detect::*;
pub use export::*;
pub use lookup::*;
