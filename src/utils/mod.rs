// src/utils/mod.rs
mod clock;
mod format;

pub use clock::*;
pub use format::*;
