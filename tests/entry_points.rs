//! Entry points driven through the raw host ABI

use rexx_raylib::host::{RxString, Ulong, AUTO_BUFFER_LEN};
use rexx_raylib::{ffi, Bridge, Call, Color, Function, MarshalConfig, Recorder, Status};

/// One host call: owned argument bytes plus a pre-allocated result slot
struct HostCall {
    args: Vec<Vec<u8>>,
    nulls: Vec<usize>,
    buffer: Vec<u8>,
}

impl HostCall {
    fn new(args: &[&str]) -> Self {
        Self {
            args: args.iter().map(|a| a.as_bytes().to_vec()).collect(),
            nulls: Vec::new(),
            buffer: vec![0u8; AUTO_BUFFER_LEN],
        }
    }

    fn with_null(mut self, index: usize) -> Self {
        self.nulls.push(index);
        self
    }

    fn with_buffer_len(mut self, len: usize) -> Self {
        self.buffer = vec![0u8; len];
        self
    }

    /// Returns the status and the reply text (`None` for a null result)
    fn run(&mut self, bridge: &mut Bridge<Recorder>, function: Function) -> (Status, Option<String>) {
        let raw: Vec<RxString> = self
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                if self.nulls.contains(&i) {
                    RxString::null()
                } else {
                    RxString::borrowed(arg)
                }
            })
            .collect();
        let mut result = RxString::buffer(&mut self.buffer);

        let code = unsafe {
            ffi::handle(bridge, function, raw.len() as Ulong, raw.as_ptr(), &mut result)
        };

        let reply = if result.is_null() {
            None
        } else {
            let len = result.strlength as usize;
            Some(String::from_utf8_lossy(&self.buffer[..len]).into_owned())
        };
        (Status::from_code(code), reply)
    }
}

fn bridge() -> Bridge<Recorder> {
    Bridge::new(Recorder::new(), MarshalConfig::default())
}

#[test]
fn test_frame_loop() {
    let mut bridge = bridge();

    let (status, reply) = HostCall::new(&["800", "450", "demo"]).run(&mut bridge, Function::InitWindow);
    assert_eq!(status, Status::Ok);
    assert_eq!(reply, None);

    let (status, reply) = HostCall::new(&[]).run(&mut bridge, Function::WindowShouldClose);
    assert_eq!(status, Status::Ok);
    assert_eq!(reply.as_deref(), Some("0"));

    HostCall::new(&[]).run(&mut bridge, Function::BeginDrawing);
    HostCall::new(&["#181818FF"]).run(&mut bridge, Function::ClearBackground);
    HostCall::new(&["Hello", "190", "200", "20", "#C8C8C8FF"]).run(&mut bridge, Function::DrawText);
    HostCall::new(&["10", "20", "30", "40", "#E62937FF"]).run(&mut bridge, Function::DrawRectangle);
    HostCall::new(&[]).run(&mut bridge, Function::EndDrawing);
    HostCall::new(&[]).run(&mut bridge, Function::CloseWindow);

    assert_eq!(
        bridge.graphics().calls(),
        &[
            Call::InitWindow { width: 800, height: 450, title: "demo".to_string() },
            Call::WindowShouldClose,
            Call::BeginDrawing,
            Call::ClearBackground { color: Color::rgba(0x18, 0x18, 0x18, 0xFF) },
            Call::DrawText {
                text: "Hello".to_string(),
                x: 190,
                y: 200,
                font_size: 20,
                color: Color::rgba(0xC8, 0xC8, 0xC8, 0xFF),
            },
            Call::DrawRectangle {
                x: 10,
                y: 20,
                width: 30,
                height: 40,
                color: Color::rgba(0xE6, 0x29, 0x37, 0xFF),
            },
            Call::EndDrawing,
            Call::CloseWindow,
        ]
    );
}

#[test]
fn test_draw_text_with_four_args_is_error() {
    let mut bridge = bridge();
    let (status, _) = HostCall::new(&["Hello", "1", "2", "20"]).run(&mut bridge, Function::DrawText);
    assert_eq!(status, Status::Error);
    assert_eq!(bridge.graphics().draw_count(), 0);
}

#[test]
fn test_window_should_close_without_window() {
    let mut bridge = bridge();
    let (status, reply) = HostCall::new(&[]).run(&mut bridge, Function::WindowShouldClose);
    assert_eq!(status, Status::Ok);
    assert_eq!(reply.as_deref(), Some("1"));
}

#[test]
fn test_frame_time_length_matches_text() {
    let mut bridge = Bridge::new(Recorder::new().with_frame_time(1.0 / 60.0), MarshalConfig::default());
    let (status, reply) = HostCall::new(&[]).run(&mut bridge, Function::GetFrameTime);
    assert_eq!(status, Status::Ok);
    assert_eq!(reply.as_deref(), Some("0.016667"));

    let mut bridge = Bridge::new(Recorder::new().with_frame_time(123.5), MarshalConfig::default());
    let (_, reply) = HostCall::new(&[]).run(&mut bridge, Function::GetFrameTime);
    assert_eq!(reply.as_deref(), Some("123.500000"));
}

#[test]
fn test_reply_that_does_not_fit_is_error() {
    let mut bridge = bridge();
    let (status, _) = HostCall::new(&[]).with_buffer_len(4).run(&mut bridge, Function::GetFrameTime);
    assert_eq!(status, Status::Error);
}

#[test]
fn test_null_and_empty_arguments() {
    let mut bridge = bridge();
    let (status, _) = HostCall::new(&["1", "1", "title"])
        .with_null(0)
        .run(&mut bridge, Function::InitWindow);
    assert_eq!(status, Status::Error);

    let (status, _) = HostCall::new(&["", "1", "2", "20", "#FFFFFFFF"]).run(&mut bridge, Function::DrawText);
    assert_eq!(status, Status::Error);
    assert!(bridge.graphics().calls().is_empty());
}

#[test]
fn test_failure_after_text_conversion_makes_no_call() {
    // The text converts, then the color fails
    let mut bridge = bridge();
    let mut call = HostCall::new(&["converted", "1", "2", "20", "#ZZZZZZZZ"]);
    let (status, reply) = call.run(&mut bridge, Function::DrawText);
    assert_eq!(status, Status::Error);
    // result slot left as the host allocated it
    assert_eq!(reply.map(|r| r.len()), Some(AUTO_BUFFER_LEN));
    assert!(bridge.graphics().calls().is_empty());
}

#[test]
fn test_is_key_down_lenient_and_strict() {
    let mut bridge = Bridge::new(Recorder::new().with_key_down(0), MarshalConfig::default());
    let (status, reply) = HostCall::new(&["x"]).with_null(0).run(&mut bridge, Function::IsKeyDown);
    assert_eq!(status, Status::Ok);
    assert_eq!(reply.as_deref(), Some("1"));

    let strict = MarshalConfig {
        strict_keycode: true,
        ..MarshalConfig::default()
    };
    let mut bridge = Bridge::new(Recorder::new(), strict);
    let (status, _) = HostCall::new(&["x"]).with_null(0).run(&mut bridge, Function::IsKeyDown);
    assert_eq!(status, Status::Error);

    let (status, _) = HostCall::new(&[]).run(&mut bridge, Function::IsKeyDown);
    assert_eq!(status, Status::Error);
}

#[test]
fn test_null_argv_with_zero_argc() {
    let mut bridge = bridge();
    let mut buffer = [0u8; AUTO_BUFFER_LEN];
    let mut result = RxString::buffer(&mut buffer);
    let code = unsafe {
        ffi::handle(&mut bridge, Function::BeginDrawing, 0, std::ptr::null(), &mut result)
    };
    assert_eq!(Status::from_code(code), Status::Ok);
    assert!(result.is_null());
}

#[test]
fn test_every_function_rejects_missing_arguments() {
    for function in Function::ALL.into_iter().filter(|f| f.arity() > 0) {
        let mut bridge = bridge();
        let (status, _) = HostCall::new(&[]).run(&mut bridge, function);
        assert_eq!(status, Status::Error, "{} accepted no arguments", function);
        assert!(bridge.graphics().calls().is_empty());
    }
}
