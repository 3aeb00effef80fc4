// src/color.rs

//! Defines the normalized `Color` type and its conversions.
//!
//! A `Color` holds four `f32` channels, each nominally in `[0.0, 1.0]`.
//! It can be packed into a 32-bit ARGB or RGBA integer, premultiplied by its
//! alpha, and parsed from an `RRGGBB` / `RRGGBBAA` hex string.

use log::trace;
use std::fmt;
use std::str::FromStr;

/// Largest value of an 8-bit channel, as a float scale factor.
const CHANNEL_MAX: f32 = u8::MAX as f32;

/// A color with normalized floating-point channels.
///
/// No range invariant is enforced. Channels outside `[0.0, 1.0]` are kept
/// as-is and only affect the result once the color is packed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Alpha (0.0 = fully transparent, 1.0 = fully opaque).
    pub a: f32,
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

/// Error returned when a hex color string cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string was neither 6 nor 8 bytes long.
    InvalidLength(usize),
    /// The byte at `position` was not in `[0-9a-fA-F]`; `found` is the
    /// character that byte belongs to.
    InvalidHexDigit { position: usize, found: char },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::InvalidLength(len) => write!(
                f,
                "invalid color length {} (expected RRGGBB or RRGGBBAA)",
                len
            ),
            ColorParseError::InvalidHexDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Scales a normalized channel to a byte: multiply by 255, truncate toward zero.
///
/// `as` saturates at the `u8` bounds, so out-of-range inputs land on 0 or 255
/// and NaN becomes 0.
#[inline]
fn channel_to_byte(channel: f32) -> u8 {
    (channel * CHANNEL_MAX) as u8
}

#[inline]
fn byte_to_channel(byte: u8) -> f32 {
    byte as f32 / CHANNEL_MAX
}

/// Returns the value of a single hex digit, or `None` if `c` is not one.
pub fn hex_digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Returns the character of `s` that covers byte offset `pos`.
fn char_at(s: &str, pos: usize) -> char {
    s.char_indices()
        .take_while(|&(start, _)| start <= pos)
        .last()
        .map_or(char::REPLACEMENT_CHARACTER, |(_, c)| c)
}

/// Decodes the two hex digits starting at byte `pos` into one byte.
fn decode_pair(s: &str, pos: usize) -> Result<u8, ColorParseError> {
    let bytes = s.as_bytes();
    let digit = |i: usize| {
        hex_digit_value(bytes[i]).ok_or_else(|| ColorParseError::InvalidHexDigit {
            position: i,
            found: char_at(s, i),
        })
    };
    let hi = digit(pos)?;
    let lo = digit(pos + 1)?;
    Ok(hi << 4 | lo)
}

/// Decodes the leading `RRGGBB` part shared by both accepted lengths.
fn decode_rgb(s: &str) -> Result<[u8; 3], ColorParseError> {
    Ok([
        decode_pair(s, 0)?,
        decode_pair(s, 2)?,
        decode_pair(s, 4)?,
    ])
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from its channels, in `r, g, b, a` order.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { a, r, g, b }
    }

    /// Creates a color from four bytes, each divided by 255.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::new(
            byte_to_channel(r),
            byte_to_channel(g),
            byte_to_channel(b),
            byte_to_channel(a),
        )
    }

    /// Returns the truncated 8-bit channels in `[r, g, b, a]` order.
    pub fn to_bytes(self) -> [u8; 4] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
            channel_to_byte(self.a),
        ]
    }

    /// Packs the color as `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Packs the color as `0xRRGGBBAA`.
    pub fn to_rgba(self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub fn from_argb(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes();
        Color::from_bytes(r, g, b, a)
    }

    /// Unpacks a `0xRRGGBBAA` value.
    pub fn from_rgba(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Color::from_bytes(r, g, b, a)
    }

    /// Returns the color with red, green and blue scaled by alpha.
    /// Alpha itself is unchanged; nothing is clamped.
    pub fn premultiply_alpha(self) -> Self {
        Color {
            a: self.a,
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
        }
    }

    /// Parses an `RRGGBB` or `RRGGBBAA` hex string.
    ///
    /// Digits are case-insensitive. No prefix (such as `#`) or whitespace is
    /// accepted; callers strip those first. A 6-digit string is fully opaque.
    /// On error nothing is returned but the reason.
    pub fn from_rgba_str(s: &str) -> Result<Self, ColorParseError> {
        let (rgb, alpha) = match s.len() {
            8 => {
                // Alpha pair first, then the shared RGB decode.
                let alpha = decode_pair(s, 6)?;
                (decode_rgb(s)?, alpha)
            }
            6 => (decode_rgb(s)?, u8::MAX),
            len => return Err(ColorParseError::InvalidLength(len)),
        };
        let [r, g, b] = rgb;
        Ok(Color::from_bytes(r, g, b, alpha))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_rgba_str(s).inspect_err(|e| trace!("rejected color {:?}: {}", s, e))
    }
}

/// Formats as uppercase `RRGGBBAA`, the inverse of `from_rgba_str` for
/// colors built from bytes.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.to_rgba())
    }
}
