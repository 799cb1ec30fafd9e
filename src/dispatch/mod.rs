//! Entry point table and dispatch
//!
//! Architecture:
//! - `mod.rs` - the fixed `Function` table: host names, exported symbols, parameters
//! - `bridge.rs` - `Bridge`, which validates, converts, and calls one primitive per entry point

mod bridge;

pub use bridge::Bridge;

/// One named entry point exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    InitWindow,
    CloseWindow,
    WindowShouldClose,
    BeginDrawing,
    EndDrawing,
    ClearBackground,
    DrawText,
    DrawRectangle,
    GetFrameTime,
    IsKeyDown,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Self::InitWindow,
        Self::CloseWindow,
        Self::WindowShouldClose,
        Self::BeginDrawing,
        Self::EndDrawing,
        Self::ClearBackground,
        Self::DrawText,
        Self::DrawRectangle,
        Self::GetFrameTime,
        Self::IsKeyDown,
    ];

    /// Name a script calls the function by
    pub const fn name(self) -> &'static str {
        match self {
            Self::InitWindow => "InitWindow",
            Self::CloseWindow => "CloseWindow",
            Self::WindowShouldClose => "WindowShouldClose",
            Self::BeginDrawing => "BeginDrawing",
            Self::EndDrawing => "EndDrawing",
            Self::ClearBackground => "ClearBackground",
            Self::DrawText => "DrawText",
            Self::DrawRectangle => "DrawRectangle",
            Self::GetFrameTime => "GetFrameTime",
            Self::IsKeyDown => "IsKeyDown",
        }
    }

    /// Symbol exported from the shared library
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::InitWindow => "rexxInitWindow",
            Self::CloseWindow => "rexxCloseWindow",
            Self::WindowShouldClose => "rexxWindowShouldClose",
            Self::BeginDrawing => "rexxBeginDrawing",
            Self::EndDrawing => "rexxEndDrawing",
            Self::ClearBackground => "rexxClearBackground",
            Self::DrawText => "rexxDrawText",
            Self::DrawRectangle => "rexxDrawRectangle",
            Self::GetFrameTime => "rexxGetFrameTime",
            Self::IsKeyDown => "rexxIsKeyDown",
        }
    }

    /// Required arguments, in order
    pub const fn params(self) -> &'static [&'static str] {
        match self {
            Self::InitWindow => &["width", "height", "title"],
            Self::ClearBackground => &["color"],
            Self::DrawText => &["text", "x", "y", "font size", "color"],
            Self::DrawRectangle => &["x", "y", "width", "height", "color"],
            Self::IsKeyDown => &["keycode"],
            Self::CloseWindow
            | Self::WindowShouldClose
            | Self::BeginDrawing
            | Self::EndDrawing
            | Self::GetFrameTime => &[],
        }
    }

    #[inline]
    pub const fn arity(self) -> usize {
        self.params().len()
    }

    /// Whether a successful call hands text back to the host
    pub const fn returns_value(self) -> bool {
        matches!(self, Self::WindowShouldClose | Self::GetFrameTime | Self::IsKeyDown)
    }

    /// Find an entry point by host name or exported symbol, ignoring case
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| {
            function.name().eq_ignore_ascii_case(name) || function.symbol().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
