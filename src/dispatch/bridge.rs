use crate::config::MarshalConfig;
use crate::errors::BridgeError;
use crate::graphics::Graphics;
use crate::host::{HostArg, Reply};
use crate::logging;
use crate::marshal::{self, saturate_int, Color, NativeText};

use super::Function;

/// Runs entry points against a graphics backend
///
/// Each call validates the argument count, converts every argument, and only
/// then makes exactly one primitive call. A failure anywhere before that point
/// leaves the backend untouched. Converted text is owned by the call and
/// dropped on every return path.
pub struct Bridge<G> {
    gfx: G,
    config: MarshalConfig,
}

impl<G: Graphics> Bridge<G> {
    pub fn new(gfx: G, config: MarshalConfig) -> Self {
        Self { gfx, config }
    }

    pub fn graphics(&self) -> &G {
        &self.gfx
    }

    pub fn graphics_mut(&mut self) -> &mut G {
        &mut self.gfx
    }

    pub fn into_graphics(self) -> G {
        self.gfx
    }

    /// Run one entry point and log the outcome
    pub fn invoke(&mut self, function: Function, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        logging::log_call(function.name(), args.len());
        let result = self.call(function, args);
        if let Err(err) = &result {
            logging::log_call_error(function.name(), err);
        }
        result
    }

    /// Run one entry point without logging
    pub fn call(&mut self, function: Function, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        match function {
            Function::InitWindow => self.init_window(args),
            Function::CloseWindow => self.close_window(),
            Function::WindowShouldClose => self.window_should_close(),
            Function::BeginDrawing => self.begin_drawing(),
            Function::EndDrawing => self.end_drawing(),
            Function::ClearBackground => self.clear_background(args),
            Function::DrawText => self.draw_text(args),
            Function::DrawRectangle => self.draw_rectangle(args),
            Function::GetFrameTime => self.get_frame_time(),
            Function::IsKeyDown => self.is_key_down(args),
        }
    }

    fn init_window(&mut self, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        require(Function::InitWindow, args)?;
        let width = self.integer(args, 0, "width")?;
        let height = self.integer(args, 1, "height")?;
        let title = text(args, 2, "window title")?;

        self.gfx.init_window(width, height, title.as_c_str());
        Ok(Reply::None)
    }

    fn close_window(&mut self) -> Result<Reply, BridgeError> {
        self.gfx.close_window();
        Ok(Reply::None)
    }

    fn window_should_close(&mut self) -> Result<Reply, BridgeError> {
        Ok(Reply::flag(self.gfx.window_should_close()))
    }

    fn begin_drawing(&mut self) -> Result<Reply, BridgeError> {
        self.gfx.begin_drawing();
        Ok(Reply::None)
    }

    fn end_drawing(&mut self) -> Result<Reply, BridgeError> {
        self.gfx.end_drawing();
        Ok(Reply::None)
    }

    fn clear_background(&mut self, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        require(Function::ClearBackground, args)?;
        let color = color(args, 0, "color hex string")?;

        self.gfx.clear_background(color);
        Ok(Reply::None)
    }

    fn draw_text(&mut self, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        require(Function::DrawText, args)?;
        let text = text(args, 0, "text to draw")?;
        let x = self.integer(args, 1, "x position")?;
        let y = self.integer(args, 2, "y position")?;
        let font_size = self.integer(args, 3, "font size")?;
        let color = color(args, 4, "color hex string")?;

        self.gfx.draw_text(text.as_c_str(), x, y, font_size, color);
        Ok(Reply::None)
    }

    fn draw_rectangle(&mut self, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        require(Function::DrawRectangle, args)?;
        let x = self.integer(args, 0, "x position")?;
        let y = self.integer(args, 1, "y position")?;
        let width = self.integer(args, 2, "width")?;
        let height = self.integer(args, 3, "height")?;
        let color = color(args, 4, "color hex string")?;

        self.gfx.draw_rectangle(x, y, width, height, color);
        Ok(Reply::None)
    }

    fn get_frame_time(&mut self) -> Result<Reply, BridgeError> {
        let seconds = f64::from(self.gfx.frame_time());
        // printf("%f"): six fractional digits
        Ok(Reply::Text(format!("{:.6}", seconds)))
    }

    fn is_key_down(&mut self, args: &[HostArg<'_>]) -> Result<Reply, BridgeError> {
        require(Function::IsKeyDown, args)?;
        let key = match self.integer(args, 0, "keycode") {
            Ok(key) => key,
            Err(err) if !self.config.strict_keycode => {
                logging::log_lenient_keycode(Function::IsKeyDown.name(), &err);
                0
            }
            Err(err) => return Err(err),
        };

        Ok(Reply::flag(self.gfx.is_key_down(key)))
    }

    #[track_caller]
    fn integer(&self, args: &[HostArg<'_>], index: usize, param: &'static str) -> Result<i32, BridgeError> {
        match marshal::to_long(arg(args, index), self.config.integer_mode()) {
            Ok(value) => {
                logging::log_conversion(param, "int");
                Ok(saturate_int(value))
            }
            Err(source) => Err(BridgeError::argument(param, source)),
        }
    }
}

#[track_caller]
fn require(function: Function, args: &[HostArg<'_>]) -> Result<(), BridgeError> {
    if args.len() < function.arity() {
        return Err(BridgeError::arg_count(function.arity(), args.len()));
    }
    Ok(())
}

#[track_caller]
fn text(args: &[HostArg<'_>], index: usize, param: &'static str) -> Result<NativeText, BridgeError> {
    match marshal::to_text(arg(args, index)) {
        Ok(text) => {
            logging::log_conversion(param, "text");
            Ok(text)
        }
        Err(source) => Err(BridgeError::argument(param, source)),
    }
}

#[track_caller]
fn color(args: &[HostArg<'_>], index: usize, param: &'static str) -> Result<Color, BridgeError> {
    match marshal::to_color(arg(args, index)) {
        Ok(color) => {
            logging::log_conversion(param, "color");
            Ok(color)
        }
        Err(source) => Err(BridgeError::argument(param, source)),
    }
}

/// Missing arguments read as the host's null string
#[inline]
fn arg<'a>(args: &[HostArg<'a>], index: usize) -> HostArg<'a> {
    args.get(index).copied().unwrap_or_default()
}
