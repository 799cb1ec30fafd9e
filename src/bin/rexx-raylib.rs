use rexx_raylib::host::{RxString, Ulong, AUTO_BUFFER_LEN};
use rexx_raylib::{config, ffi, logging, Bridge, Function, MarshalConfig, Recorder, Status};
use tracing::{debug, info};

const DEFAULT_LIBRARY: &str = "rexx_raylib";

#[derive(Debug)]
enum Command {
    Functions,
    Register { library: String },
    Call {
        function: Function,
        args: Vec<String>,
        marshal: MarshalConfig,
    },
}

impl Command {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let prog = args.first().map(String::as_str).unwrap_or("rexx-raylib");

        let Some(command) = args.get(1) else {
            return Err(Self::usage(prog));
        };

        match command.as_str() {
            "--help" | "-h" | "help" => Err(Self::usage(prog)),
            "functions" => Ok(Self::Functions),
            "register" => Ok(Self::Register {
                library: args.get(2).cloned().unwrap_or_else(|| DEFAULT_LIBRARY.to_string()),
            }),
            "call" => Self::parse_call(prog, &args[2..]),
            other => Err(format!("Unknown command: {}\n\n{}", other, Self::usage(prog))),
        }
    }

    fn parse_call(prog: &str, rest: &[String]) -> Result<Self, String> {
        let mut marshal = config::global().marshal;
        let mut positional = Vec::new();

        for arg in rest {
            match arg.as_str() {
                "--strict-keycode" => marshal.strict_keycode = true,
                "--strict-integers" => marshal.strict_integers = true,
                _ => positional.push(arg.clone()),
            }
        }

        if positional.is_empty() {
            return Err(format!("No function named\n\n{}", Self::usage(prog)));
        }

        let name = positional.remove(0);
        let function = Function::lookup(&name)
            .ok_or_else(|| format!("Unknown function: {} (see `{} functions`)", name, prog))?;

        Ok(Self::Call {
            function,
            args: positional,
            marshal,
        })
    }

    fn usage(prog: &str) -> String {
        format!(
            "rexx-raylib - raylib for REXX scripts\n\n\
            USAGE:\n    \
            {} functions\n    \
            {} register [LIBRARY]\n    \
            {} call [OPTIONS] <function> [args...]\n\n\
            COMMANDS:\n    \
            functions           List the entry points and their arguments\n    \
            register            Print a REXX script that registers every entry point\n    \
            call                Dry-run one entry point without opening a window\n\n\
            OPTIONS:\n    \
            --strict-keycode    Fail IsKeyDown on an unusable keycode\n    \
            --strict-integers   Reject integer arguments with trailing text\n\n\
            EXAMPLES:\n    \
            {} call DrawText 'Hello' 10 10 20 '#FF0000FF'\n    \
            {} register > load_raylib.rexx",
            prog, prog, prog, prog, prog
        )
    }
}

fn print_functions() {
    for function in Function::ALL {
        let params = function.params().join(", ");
        let returns = if function.returns_value() { "value" } else { "-" };
        println!(
            "{:<20} {:<24} ({}) -> {}",
            function.name(),
            function.symbol(),
            params,
            returns
        );
    }
}

fn print_registration(library: &str) {
    println!("/* register raylib functions */");
    for function in Function::ALL {
        println!(
            "call RxFuncAdd '{}', '{}', '{}'",
            function.name(),
            library,
            function.symbol()
        );
    }
}

/// Push the call through the raw host ABI, the way an interpreter would
fn dry_run(function: Function, args: &[String], marshal: MarshalConfig) -> Status {
    let raw_args: Vec<RxString> = args.iter().map(|arg| RxString::borrowed(arg.as_bytes())).collect();
    let mut buffer = [0u8; AUTO_BUFFER_LEN];
    let mut result = RxString::buffer(&mut buffer);

    let mut bridge = Bridge::new(Recorder::new(), marshal);
    let code = unsafe {
        ffi::handle(
            &mut bridge,
            function,
            raw_args.len() as Ulong,
            raw_args.as_ptr(),
            &mut result,
        )
    };
    let status = Status::from_code(code);

    for call in bridge.graphics().calls() {
        println!("native: {:?}", call);
    }

    match status {
        Status::Ok if result.is_null() => println!("status: OK (no value)"),
        Status::Ok => {
            let len = result.strlength as usize;
            println!("status: OK \"{}\"", String::from_utf8_lossy(&buffer[..len]));
        }
        Status::Error => println!("status: ERROR"),
    }
    status
}

fn main() {
    logging::init();

    let command = match Command::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    debug!(command = ?command, "CLI command parsed");

    match command {
        Command::Functions => print_functions(),
        Command::Register { library } => print_registration(&library),
        Command::Call { function, args, marshal } => {
            info!(function = function.name(), args = args.len(), "dry run");
            if dry_run(function, &args, marshal) == Status::Error {
                std::process::exit(1);
            }
        }
    }
}
