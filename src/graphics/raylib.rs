//! raylib backend
//!
//! Link directives come from `build.rs`.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use super::Graphics;
use crate::marshal::Color;

extern "C" {
    fn InitWindow(width: c_int, height: c_int, title: *const c_char);
    fn CloseWindow();
    fn WindowShouldClose() -> bool;

    fn BeginDrawing();
    fn EndDrawing();
    fn ClearBackground(color: Color);
    fn DrawText(text: *const c_char, pos_x: c_int, pos_y: c_int, font_size: c_int, color: Color);
    fn DrawRectangle(pos_x: c_int, pos_y: c_int, width: c_int, height: c_int, color: Color);

    fn GetFrameTime() -> f32;
    fn IsKeyDown(key: c_int) -> bool;
}

/// The process-wide raylib instance
///
/// Zero-sized: raylib keeps its window and timer in its own globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raylib;

impl Graphics for Raylib {
    fn init_window(&mut self, width: i32, height: i32, title: &CStr) {
        unsafe { InitWindow(width, height, title.as_ptr()) }
    }

    fn close_window(&mut self) {
        unsafe { CloseWindow() }
    }

    fn window_should_close(&mut self) -> bool {
        unsafe { WindowShouldClose() }
    }

    fn begin_drawing(&mut self) {
        unsafe { BeginDrawing() }
    }

    fn end_drawing(&mut self) {
        unsafe { EndDrawing() }
    }

    fn clear_background(&mut self, color: Color) {
        unsafe { ClearBackground(color) }
    }

    fn draw_text(&mut self, text: &CStr, x: i32, y: i32, font_size: i32, color: Color) {
        unsafe { DrawText(text.as_ptr(), x, y, font_size, color) }
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        unsafe { DrawRectangle(x, y, width, height, color) }
    }

    fn frame_time(&mut self) -> f32 {
        unsafe { GetFrameTime() }
    }

    fn is_key_down(&mut self, key: i32) -> bool {
        unsafe { IsKeyDown(key) }
    }
}
