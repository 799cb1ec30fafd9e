//! Text arguments → owned null-terminated buffers
//!
//! The buffer lives for the rest of the entry point and is released when it
//! goes out of scope, on success and failure paths alike.

use std::ffi::{CStr, CString};

use crate::errors::MarshalError;
use crate::host::HostArg;

/// An owned copy of a text argument, ready for a `const char *` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeText {
    inner: CString,
}

impl NativeText {
    /// Copy `bytes` verbatim, stopping at an embedded NUL
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let mut owned = Vec::with_capacity(end + 1);
        owned.extend_from_slice(&bytes[..end]);
        // SAFETY: `owned` holds no NUL bytes, checked above
        let inner = unsafe { CString::from_vec_unchecked(owned) };
        Self { inner }
    }

    #[inline]
    pub fn as_c_str(&self) -> &CStr {
        &self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Convert a text argument
pub fn to_text(arg: HostArg<'_>) -> Result<NativeText, MarshalError> {
    let bytes = arg.valid_bytes().ok_or(MarshalError::BadString)?;
    Ok(NativeText::from_bytes(bytes))
}
