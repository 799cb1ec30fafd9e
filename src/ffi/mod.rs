//! Foreign Function Interface
//!
//! The REXX-facing edge. `handle` turns one raw host call into a `Bridge`
//! call and back; the exported `rexx*` handlers (feature `raylib`) wire it to
//! the native library.
//!
//! Scripts register the handlers with, for example:
//!
//! ```rexx
//! call RxFuncAdd 'InitWindow', 'rexx_raylib', 'rexxInitWindow'
//! ```

use crate::dispatch::{Bridge, Function};
use crate::errors::BridgeError;
use crate::graphics::Graphics;
use crate::host::{args_from_raw, ApiRet, Reply, ReplyBuffer, RxString, Status, Ulong};
use crate::logging;

/// Run `function` for one raw host call
///
/// The result slot is only written on success. On failure the host gets
/// `ERROR` and the slot is left as the host provided it.
///
/// # Safety
/// `argv` must satisfy [`args_from_raw`] for `argc`, and `result`, if
/// non-null, must point at the host's result `RXSTRING` whose buffer holds
/// `strlength` writable bytes.
pub unsafe fn handle<G: Graphics>(
    bridge: &mut Bridge<G>,
    function: Function,
    argc: Ulong,
    argv: *const RxString,
    result: *mut RxString,
) -> ApiRet {
    let args = args_from_raw(argc, argv);

    let status = match bridge.invoke(function, &args) {
        Ok(reply) => match store_reply(result, &reply) {
            Ok(()) => Status::Ok,
            Err(err) => {
                logging::log_call_error(function.name(), &err);
                Status::Error
            }
        },
        Err(_) => Status::Error,
    };

    logging::log_return(function.name(), status);
    status.code()
}

unsafe fn store_reply(result: *mut RxString, reply: &Reply) -> Result<(), BridgeError> {
    match (result.as_mut(), reply.as_text()) {
        (Some(slot), _) => ReplyBuffer::new(slot).store(reply),
        (None, None) => Ok(()),
        // nowhere to put the value
        (None, Some(text)) => Err(BridgeError::reply_overflow(text.len(), 0)),
    }
}

#[cfg(feature = "raylib")]
mod exports {
    use super::handle;
    use crate::config;
    use crate::dispatch::{Bridge, Function};
    use crate::graphics::Raylib;
    use crate::host::{ApiRet, Pcsz, RxString, Ulong};
    use crate::logging;

    /// Shared body of every exported handler
    unsafe fn entry(function: Function, argc: Ulong, argv: *const RxString, result: *mut RxString) -> ApiRet {
        logging::init();
        let mut bridge = Bridge::new(Raylib, config::global().marshal);
        handle(&mut bridge, function, argc, argv, result)
    }

    macro_rules! rexx_handlers {
        ($($symbol:ident => $function:ident),* $(,)?) => {
            $(
                /// REXX external function handler
                ///
                /// # Safety
                /// Called by the interpreter with the SAA argument contract; see [`handle`].
                #[no_mangle]
                #[allow(non_snake_case)]
                pub unsafe extern "C" fn $symbol(
                    _name: Pcsz,
                    argc: Ulong,
                    argv: *const RxString,
                    _queue_name: Pcsz,
                    result: *mut RxString,
                ) -> ApiRet {
                    entry(Function::$function, argc, argv, result)
                }
            )*
        };
    }

    rexx_handlers! {
        rexxInitWindow => InitWindow,
        rexxCloseWindow => CloseWindow,
        rexxWindowShouldClose => WindowShouldClose,
        rexxBeginDrawing => BeginDrawing,
        rexxEndDrawing => EndDrawing,
        rexxClearBackground => ClearBackground,
        rexxDrawText => DrawText,
        rexxDrawRectangle => DrawRectangle,
        rexxGetFrameTime => GetFrameTime,
        rexxIsKeyDown => IsKeyDown,
    }
}

#[cfg(feature = "raylib")]
pub use exports::*;
