//! colorpack library crate.
//!
//! Normalized RGBA colors, their packed 32-bit pixel encodings, and the
//! configuration that names which colors to pack.

pub mod color;
pub mod config;
pub mod pixel;

pub use color::{Color, ColorParseError};
pub use pixel::{Argb8, PixelFormat, Rgba8};
