//! Host calling convention - the REXX SAA external function ABI
//!
//! Design: raw host structures stay at the edge. Everything past this module
//! sees borrowed byte slices (`HostArg`) and a fixed-capacity reply buffer.
//!
//! Layout follows `rexxsaa.h` on Unix: `ULONG` is `unsigned long`, `APIRET`
//! is `ULONG`, and handlers use the C calling convention.

mod args;
mod reply;

pub use args::{args_from_raw, HostArg};
pub use reply::{Reply, ReplyBuffer};

use std::os::raw::{c_char, c_ulong};

/// Host `ULONG`
pub type Ulong = c_ulong;

/// Host `APIRET`
pub type ApiRet = Ulong;

/// Host `PCSZ`
pub type Pcsz = *const c_char;

/// Host `RXSTRING`: an explicit-length string, not necessarily null-terminated
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RxString {
    pub strlength: Ulong,
    pub strptr: *mut c_char,
}

impl RxString {
    /// The host's "no value" string
    pub const fn null() -> Self {
        Self {
            strlength: 0,
            strptr: std::ptr::null_mut(),
        }
    }

    /// Borrow a byte buffer as a host string
    ///
    /// The returned value aliases `bytes`; it must not outlive it.
    pub fn borrowed(bytes: &[u8]) -> Self {
        Self {
            strlength: bytes.len() as Ulong,
            strptr: bytes.as_ptr() as *mut c_char,
        }
    }

    /// Point at a writable buffer the way the host hands out its result slot
    pub fn buffer(buffer: &mut [u8]) -> Self {
        Self {
            strlength: buffer.len() as Ulong,
            strptr: buffer.as_mut_ptr() as *mut c_char,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.strptr.is_null()
    }
}

impl Default for RxString {
    fn default() -> Self {
        Self::null()
    }
}

/// Two-valued status returned to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    Error = 1,
}

impl Status {
    #[inline]
    pub const fn code(self) -> ApiRet {
        self as ApiRet
    }

    #[inline]
    pub const fn from_code(code: ApiRet) -> Self {
        if code == 0 {
            Self::Ok
        } else {
            Self::Error
        }
    }
}

/// Size of the result buffer REXX interpreters pre-allocate (`RXAUTOBUFLEN`)
pub const AUTO_BUFFER_LEN: usize = 256;
