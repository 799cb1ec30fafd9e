//! Type marshaling - host strings → native values
//!
//! Three conversions shared by every entry point:
//! - `integer.rs` - lenient (`strtol`-like) and strict base-10 parsing
//! - `text.rs` - owned, null-terminated copies for native text parameters
//! - `color.rs` - `#RRGGBBAA` hex codes → 4-channel `Color`

mod color;
mod integer;
mod text;

pub use color::Color;
pub use integer::{saturate_int, to_long, IntegerMode};
pub use text::{to_text, NativeText};

use crate::errors::MarshalError;
use crate::host::HostArg;

/// Convert a color hex argument
pub fn to_color(arg: HostArg<'_>) -> Result<Color, MarshalError> {
    let bytes = arg.valid_bytes().ok_or(MarshalError::BadString)?;
    Color::from_hex(bytes)
}
