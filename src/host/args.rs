//! Borrowed views over host arguments

use std::slice;

use super::{RxString, Ulong};

/// One host argument, valid for the duration of a single call
///
/// `None` is the host's null string. `Some(&[])` is an empty string, which
/// the host itself does not count as a valid argument either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostArg<'a> {
    bytes: Option<&'a [u8]>,
}

impl<'a> HostArg<'a> {
    pub const fn null() -> Self {
        Self { bytes: None }
    }

    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// View a raw host string
    ///
    /// # Safety
    /// If `strptr` is non-null it must point at `strlength` readable bytes
    /// that stay alive and unmodified for `'a`.
    pub unsafe fn from_raw(raw: &RxString) -> Self {
        if raw.strptr.is_null() {
            return Self::null();
        }
        let bytes = slice::from_raw_parts(raw.strptr as *const u8, raw.strlength as usize);
        Self::new(bytes)
    }

    /// Mirrors `RXVALIDSTRING`: a non-null pointer and a non-zero length
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self.bytes, Some(bytes) if !bytes.is_empty())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.bytes.is_none()
    }

    /// Bytes of a valid argument
    #[inline]
    pub fn valid_bytes(&self) -> Option<&'a [u8]> {
        self.bytes.filter(|bytes| !bytes.is_empty())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.map_or(0, <[u8]>::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for HostArg<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for HostArg<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

/// Collect the host's argument array into borrowed views
///
/// # Safety
/// Unless `argc` is zero or `argv` is null, `argv` must point at `argc`
/// `RxString`s, each satisfying [`HostArg::from_raw`].
pub unsafe fn args_from_raw<'a>(argc: Ulong, argv: *const RxString) -> Vec<HostArg<'a>> {
    if argc == 0 || argv.is_null() {
        return Vec::new();
    }
    slice::from_raw_parts(argv, argc as usize)
        .iter()
        .map(|raw| HostArg::from_raw(raw))
        .collect()
}
