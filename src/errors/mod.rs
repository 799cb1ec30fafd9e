//! Error taxonomy for entry point calls
//!
//! Every failure is local to one host call. The host only ever sees the generic
//! ERROR status, so the kind and location exist for the diagnostic log.

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Failure converting a single host argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("is not a valid string (must contain non-empty characters)")]
    BadString,
    #[error("has the wrong length, expected format: #RRGGBBAA")]
    BadLength,
    #[error("could not be read as a color hex, expected format: #RRGGBBAA")]
    BadHex,
    #[error("is not a base-10 integer")]
    BadNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("expected {expected} arguments, got {got}")]
    ArgCountTooLow { expected: usize, got: usize },

    #[error("{param} {source}")]
    Argument {
        param: &'static str,
        source: MarshalError,
    },

    #[error("reply needs {needed} bytes but the host buffer holds {capacity}")]
    ReplyOverflow { needed: usize, capacity: usize },
}

/// Where in the bridge an error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct BridgeError {
    pub kind: ErrorKind,
    pub location: SourceLocation,
}

impl BridgeError {
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: SourceLocation::caller(),
        }
    }

    #[track_caller]
    pub fn arg_count(expected: usize, got: usize) -> Self {
        Self::new(ErrorKind::ArgCountTooLow { expected, got })
    }

    #[track_caller]
    pub fn argument(param: &'static str, source: MarshalError) -> Self {
        Self::new(ErrorKind::Argument { param, source })
    }

    #[track_caller]
    pub fn reply_overflow(needed: usize, capacity: usize) -> Self {
        Self::new(ErrorKind::ReplyOverflow { needed, capacity })
    }

    /// The conversion failure behind this error, if any
    pub fn marshal_error(&self) -> Option<MarshalError> {
        match self.kind {
            ErrorKind::Argument { source, .. } => Some(source),
            _ => None,
        }
    }
}
