//! rexx-raylib - raylib for REXX scripts
//!
//! A REXX external function package. Each exported handler takes the host's
//! string arguments, converts them to native values, calls one raylib
//! primitive, and hands any result back as a REXX string.
//!
//! The native library is linked only with the `raylib` feature. Without it the
//! crate still provides the whole marshalling layer, driven in tests and by
//! the CLI through the in-memory [`graphics::Recorder`].

// Core modules
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod ffi;
pub mod graphics;
pub mod host;
pub mod logging;
pub mod marshal;

// Re-export commonly used items
pub use config::{Config, ConfigError, MarshalConfig};
pub use dispatch::{Bridge, Function};
pub use errors::{BridgeError, ErrorKind, MarshalError, SourceLocation};
pub use graphics::{Call, Graphics, Recorder};
pub use host::{HostArg, Reply, ReplyBuffer, RxString, Status};
pub use marshal::{to_color, to_long, to_text, Color, IntegerMode, NativeText};

#[cfg(feature = "raylib")]
pub use graphics::Raylib;
