//! Integer arguments
//!
//! Lenient mode is the long-standing behaviour: it reads a base-10 prefix the
//! way C `strtol` does and yields 0 when there is none. Strict mode is opt-in.

use crate::errors::MarshalError;
use crate::host::HostArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegerMode {
    /// Parse a leading integer; no digits means 0, never an error
    #[default]
    Lenient,
    /// The whole argument must be an integer
    Strict,
}

/// Convert an integer argument to a native `long`
pub fn to_long(arg: HostArg<'_>, mode: IntegerMode) -> Result<i64, MarshalError> {
    let bytes = arg.valid_bytes().ok_or(MarshalError::BadString)?;
    match mode {
        IntegerMode::Lenient => Ok(parse_prefix(bytes)),
        IntegerMode::Strict => parse_exact(bytes),
    }
}

/// Narrow a `long` to the `int` the native primitives take
#[inline]
pub fn saturate_int(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// C `isspace` in the "C" locale
#[inline]
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn parse_prefix(bytes: &[u8]) -> i64 {
    let mut rest = bytes;
    while let [first, tail @ ..] = rest {
        if !is_c_space(*first) {
            break;
        }
        rest = tail;
    }

    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    // Accumulate toward the sign so i64::MIN is reachable; clamp like strtol
    let mut value: i64 = 0;
    for &byte in rest.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = (byte - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

fn parse_exact(bytes: &[u8]) -> Result<i64, MarshalError> {
    let text = std::str::from_utf8(bytes).map_err(|_| MarshalError::BadNumber)?;
    text.trim_matches(|c: char| c.is_ascii() && is_c_space(c as u8))
        .parse::<i64>()
        .map_err(|_| MarshalError::BadNumber)
}
