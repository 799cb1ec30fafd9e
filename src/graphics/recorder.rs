//! Recording backend
//!
//! Stands in for the native library in tests and CLI dry runs. It keeps only
//! as much state as the queries need and logs every primitive call in order.

use std::collections::HashSet;
use std::ffi::CStr;

use super::Graphics;
use crate::marshal::Color;

/// One primitive call, with its arguments as the native side saw them
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    InitWindow { width: i32, height: i32, title: String },
    CloseWindow,
    WindowShouldClose,
    BeginDrawing,
    EndDrawing,
    ClearBackground { color: Color },
    DrawText { text: String, x: i32, y: i32, font_size: i32, color: Color },
    DrawRectangle { x: i32, y: i32, width: i32, height: i32, color: Color },
    GetFrameTime,
    IsKeyDown { key: i32 },
}

impl Call {
    /// Whether this call puts pixels in the frame
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            Self::ClearBackground { .. } | Self::DrawText { .. } | Self::DrawRectangle { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Recorder {
    calls: Vec<Call>,
    window_open: bool,
    close_requested: bool,
    frame_time: f32,
    keys_down: HashSet<i32>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            window_open: false,
            close_requested: false,
            frame_time: 1.0 / 60.0,
            keys_down: HashSet::new(),
        }
    }

    pub fn with_frame_time(mut self, seconds: f32) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn with_key_down(mut self, key: i32) -> Self {
        self.keys_down.insert(key);
        self
    }

    /// Simulate the user clicking the window's close button
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn draw_count(&self) -> usize {
        self.calls.iter().filter(|call| call.is_draw()).count()
    }

    pub fn window_open(&self) -> bool {
        self.window_open
    }
}

impl Graphics for Recorder {
    fn init_window(&mut self, width: i32, height: i32, title: &CStr) {
        self.window_open = true;
        self.close_requested = false;
        self.calls.push(Call::InitWindow {
            width,
            height,
            title: title.to_string_lossy().into_owned(),
        });
    }

    fn close_window(&mut self) {
        self.window_open = false;
        self.calls.push(Call::CloseWindow);
    }

    // raylib answers true while no window is ready
    fn window_should_close(&mut self) -> bool {
        self.calls.push(Call::WindowShouldClose);
        !self.window_open || self.close_requested
    }

    fn begin_drawing(&mut self) {
        self.calls.push(Call::BeginDrawing);
    }

    fn end_drawing(&mut self) {
        self.calls.push(Call::EndDrawing);
    }

    fn clear_background(&mut self, color: Color) {
        self.calls.push(Call::ClearBackground { color });
    }

    fn draw_text(&mut self, text: &CStr, x: i32, y: i32, font_size: i32, color: Color) {
        self.calls.push(Call::DrawText {
            text: text.to_string_lossy().into_owned(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.calls.push(Call::DrawRectangle { x, y, width, height, color });
    }

    fn frame_time(&mut self) -> f32 {
        self.calls.push(Call::GetFrameTime);
        self.frame_time
    }

    fn is_key_down(&mut self, key: i32) -> bool {
        self.calls.push(Call::IsKeyDown { key });
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_close_without_window() {
        let mut gfx = Recorder::new();
        assert!(gfx.window_should_close());
    }

    #[test]
    fn test_window_lifecycle() {
        let mut gfx = Recorder::new();
        let title = std::ffi::CString::new("demo").unwrap();
        gfx.init_window(800, 450, &title);
        assert!(gfx.window_open());
        assert!(!gfx.window_should_close());

        gfx.request_close();
        assert!(gfx.window_should_close());

        gfx.close_window();
        assert!(!gfx.window_open());
        assert_eq!(gfx.calls().len(), 4);
    }

    #[test]
    fn test_draw_count() {
        let mut gfx = Recorder::new();
        gfx.begin_drawing();
        gfx.clear_background(Color::rgba(0, 0, 0, 255));
        gfx.draw_rectangle(1, 2, 3, 4, Color::default());
        gfx.end_drawing();
        assert_eq!(gfx.draw_count(), 2);
    }
}
