//! Native graphics primitives
//!
//! The window, frame timer and input state belong to the native library. The
//! bridge reaches them only through this trait and never caches what they
//! report.
//!
//! Backends:
//! - `raylib.rs` - the real library (feature `raylib`)
//! - `recorder.rs` - in-memory stand-in that records every primitive call

#[cfg(feature = "raylib")]
mod raylib;
mod recorder;

#[cfg(feature = "raylib")]
pub use raylib::Raylib;
pub use recorder::{Call, Recorder};

use std::ffi::CStr;

use crate::marshal::Color;

/// The primitive calls the bridge forwards to
pub trait Graphics {
    fn init_window(&mut self, width: i32, height: i32, title: &CStr);
    fn close_window(&mut self);
    fn window_should_close(&mut self) -> bool;

    fn begin_drawing(&mut self);
    fn end_drawing(&mut self);
    fn clear_background(&mut self, color: Color);
    fn draw_text(&mut self, text: &CStr, x: i32, y: i32, font_size: i32, color: Color);
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Seconds elapsed since the previous frame
    fn frame_time(&mut self) -> f32;
    fn is_key_down(&mut self, key: i32) -> bool;
}
