// src/pixel.rs
//! Packed pixel formats.
//!
//! `Argb8` and `Rgba8` wrap a packed `u32` with a known byte order, so a value
//! can't be read back in the wrong layout. `PixelFormat` picks one of them at
//! runtime (from configuration or the command line).

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Argb8 pixel: `0xAARRGGBB`, alpha in the most significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Argb8(pub u32);

/// Rgba8 pixel: `0xRRGGBBAA`, alpha in the least significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba8(pub u32);

impl Argb8 {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    #[inline]
    pub fn a(self) -> u8 {
        self.0.to_be_bytes()[0]
    }
    #[inline]
    pub fn r(self) -> u8 {
        self.0.to_be_bytes()[1]
    }
    #[inline]
    pub fn g(self) -> u8 {
        self.0.to_be_bytes()[2]
    }
    #[inline]
    pub fn b(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl Rgba8 {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0.to_be_bytes()[0]
    }
    #[inline]
    pub fn g(self) -> u8 {
        self.0.to_be_bytes()[1]
    }
    #[inline]
    pub fn b(self) -> u8 {
        self.0.to_be_bytes()[2]
    }
    #[inline]
    pub fn a(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

// Rotate alpha between the two ends of the word.
impl From<Argb8> for Rgba8 {
    #[inline]
    fn from(argb: Argb8) -> Rgba8 {
        Rgba8(argb.0.rotate_left(8))
    }
}

impl From<Rgba8> for Argb8 {
    #[inline]
    fn from(rgba: Rgba8) -> Argb8 {
        Argb8(rgba.0.rotate_right(8))
    }
}

impl From<Color> for Argb8 {
    #[inline]
    fn from(color: Color) -> Argb8 {
        Argb8(color.to_argb())
    }
}

impl From<Color> for Rgba8 {
    #[inline]
    fn from(color: Color) -> Rgba8 {
        Rgba8(color.to_rgba())
    }
}

impl From<Argb8> for Color {
    #[inline]
    fn from(argb: Argb8) -> Color {
        Color::from_argb(argb.0)
    }
}

impl From<Rgba8> for Color {
    #[inline]
    fn from(rgba: Rgba8) -> Color {
        Color::from_rgba(rgba.0)
    }
}

/// Byte order used when packing a color into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// `0xAARRGGBB`, the layout of most shared-memory surfaces.
    #[default]
    Argb,
    /// `0xRRGGBBAA`.
    Rgba,
}

impl PixelFormat {
    /// Packs `color` in this format.
    pub fn pack(self, color: Color) -> u32 {
        match self {
            PixelFormat::Argb => color.to_argb(),
            PixelFormat::Rgba => color.to_rgba(),
        }
    }

    /// Unpacks a value previously produced by [`PixelFormat::pack`].
    pub fn unpack(self, packed: u32) -> Color {
        match self {
            PixelFormat::Argb => Color::from_argb(packed),
            PixelFormat::Rgba => Color::from_rgba(packed),
        }
    }
}

#[cfg(test)]
mod tests;
