use std::fmt;

use crate::errors::MarshalError;

/// Length of `#RRGGBBAA`
pub const HEX_LEN: usize = 9;

/// Native 4-channel color, laid out like raylib's `Color`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack `0xRRGGBBAA`
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Parse a 9-byte hex code
    ///
    /// The leading byte is skipped without being inspected; only the eight
    /// after it are read, and every one of them must be a hex digit.
    pub fn from_hex(text: &[u8]) -> Result<Self, MarshalError> {
        if text.len() != HEX_LEN {
            return Err(MarshalError::BadLength);
        }

        let mut packed = 0u32;
        for &byte in &text[1..] {
            let digit = (byte as char).to_digit(16).ok_or(MarshalError::BadHex)?;
            packed = packed << 4 | digit;
        }
        Ok(Self::from_u32(packed))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_u32())
    }
}
