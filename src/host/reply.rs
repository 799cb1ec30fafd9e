//! Result values and the host's fixed-capacity reply slot

use std::ptr;

use super::{RxString, Ulong};
use crate::errors::BridgeError;

/// What an entry point hands back to the host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Reply {
    /// Null result string
    #[default]
    None,
    Text(String),
}

impl Reply {
    pub fn flag(value: bool) -> Self {
        Self::Text(if value { "1" } else { "0" }.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }
}

/// The caller-provided result slot
///
/// Capacity is whatever length the host put in the slot before the call.
/// Writing never relies on a terminator; the length is always set explicitly.
pub struct ReplyBuffer<'a> {
    slot: &'a mut RxString,
}

impl<'a> ReplyBuffer<'a> {
    pub fn new(slot: &'a mut RxString) -> Self {
        Self { slot }
    }

    pub fn capacity(&self) -> usize {
        if self.slot.is_null() {
            0
        } else {
            self.slot.strlength as usize
        }
    }

    /// Mark the result as "no value"
    pub fn clear(&mut self) {
        *self.slot = RxString::null();
    }

    /// Copy `text` into the host buffer and record its length
    #[track_caller]
    pub fn write(&mut self, text: &str) -> Result<(), BridgeError> {
        let capacity = self.capacity();
        if self.slot.is_null() || text.len() > capacity {
            return Err(BridgeError::reply_overflow(text.len(), capacity));
        }

        // SAFETY: the host guarantees `capacity` writable bytes at `strptr`
        unsafe {
            ptr::copy_nonoverlapping(text.as_ptr(), self.slot.strptr as *mut u8, text.len());
        }
        self.slot.strlength = text.len() as Ulong;
        Ok(())
    }

    #[track_caller]
    pub fn store(&mut self, reply: &Reply) -> Result<(), BridgeError> {
        match reply {
            Reply::None => {
                self.clear();
                Ok(())
            }
            Reply::Text(text) => self.write(text),
        }
    }
}
