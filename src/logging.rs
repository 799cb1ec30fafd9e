//! Logging infrastructure - structured tracing for every host call
//!
//! Design: `tracing` events with stable `event` fields, so a log consumer can
//! follow calls without parsing messages. The subscriber is installed once,
//! lazily, from the first exported handler (or explicitly by the CLI).
//! `RUST_LOG` takes precedence over the configured level.

use std::io;

use once_cell::sync::OnceCell;
use tracing::{debug, error, trace, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::{self, LogFormat, LogOutput, LoggingConfig};
use crate::errors::BridgeError;
use crate::host::Status;

/// Global logging state
static LOGGER: Logger = Logger::new();

/// Installs the subscriber at most once and reports startup problems once
struct Logger {
    installed: OnceCell<()>,
}

impl Logger {
    const fn new() -> Self {
        Self {
            installed: OnceCell::new(),
        }
    }

    fn install(&self, config: &LoggingConfig, config_problem: Option<&str>) {
        self.installed.get_or_init(|| {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!(
                    "rexx_raylib={}",
                    config.level().as_str().to_lowercase()
                ))
            });

            let sink = Sink::open(&config.output);

            let layer = fmt::layer()
                .with_writer(sink.writer)
                .with_ansi(sink.ansi)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            let layer = match config.format {
                LogFormat::Pretty => layer.pretty().boxed(),
                LogFormat::Compact => layer.compact().boxed(),
                LogFormat::Json => layer.json().boxed(),
            };

            tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .try_init()
                .ok(); // Ignore error if a subscriber already exists

            if let Some(reason) = &sink.fallback {
                warn!(event = "log_output_fallback", error = %reason, "logging to stderr instead");
            }
            if let Some(problem) = config_problem {
                warn!(event = "config_fallback", error = problem, "using default configuration");
            }
        });
    }

    fn is_installed(&self) -> bool {
        self.installed.get().is_some()
    }
}

/// Where formatted events go
struct Sink {
    writer: BoxMakeWriter,
    ansi: bool,
    /// Why the configured output could not be used
    fallback: Option<String>,
}

impl Sink {
    /// Open `output`; an unusable log directory degrades to stderr
    fn open(output: &LogOutput) -> Self {
        match output {
            LogOutput::Stdout => Self::console(BoxMakeWriter::new(io::stdout)),
            LogOutput::Stderr => Self::console(BoxMakeWriter::new(io::stderr)),
            LogOutput::File { directory, prefix } => {
                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(prefix)
                    .build(directory);
                match appender {
                    Ok(appender) => Self {
                        writer: BoxMakeWriter::new(appender),
                        ansi: false,
                        fallback: None,
                    },
                    Err(err) => Self {
                        fallback: Some(format!("cannot log to {}: {}", directory, err)),
                        ..Self::console(BoxMakeWriter::new(io::stderr))
                    },
                }
            }
        }
    }

    fn console(writer: BoxMakeWriter) -> Self {
        Self {
            writer,
            ansi: true,
            fallback: None,
        }
    }
}

/// Initialize logging from the process configuration
pub fn init() {
    LOGGER.install(&config::global().logging, config::load_error());
}

/// Initialize logging with an explicit configuration
///
/// Only the first call in a process has an effect. If another subscriber is
/// already installed (a host embedding its own), it is left alone.
pub fn init_with_config(config: &LoggingConfig) {
    LOGGER.install(config, None);
}

/// Check if logging is initialized
pub fn is_initialized() -> bool {
    LOGGER.is_installed()
}

// ============================================================================
// Bridge-specific logging functions
// ============================================================================

/// Log an entry point being invoked
#[inline]
pub fn log_call(function: &str, arg_count: usize) {
    debug!(
        event = "call",
        function,
        args = arg_count,
        "entry point called"
    );
}

/// Log the status handed back to the host
#[inline]
pub fn log_return(function: &str, status: Status) {
    trace!(
        event = "return",
        function,
        status = status.code(),
        "entry point returned"
    );
}

/// Log a failed call with the line that rejected it
pub fn log_call_error(function: &str, err: &BridgeError) {
    error!(
        event = "call_error",
        function,
        location = %err.location,
        "{}",
        err
    );
}

/// Log a conversion failure that the entry point chose to tolerate
pub fn log_lenient_keycode(function: &str, err: &BridgeError) {
    warn!(
        event = "lenient_keycode",
        function,
        location = %err.location,
        "{}; polling keycode 0",
        err
    );
}

/// Log a converted argument
#[inline]
pub fn log_conversion(param: &str, to_type: &str) {
    trace!(
        event = "conversion",
        param,
        to = to_type,
        "argument converted"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory writer for inspecting emitted events
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_init_idempotent() {
        let config = LoggingConfig::default();
        init_with_config(&config);
        init_with_config(&config); // Should not panic
        init();
        assert!(is_initialized());
    }

    #[test]
    fn test_config_problem_reported_once() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        let logger = Logger::new();
        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..3 {
                logger.install(&LoggingConfig::default(), Some("broken.toml"));
            }
        });

        assert!(logger.is_installed());
        assert_eq!(captured.text().matches("config_fallback").count(), 1);
    }

    #[test]
    fn test_unusable_log_directory_falls_back_to_stderr() {
        // A regular file where the directory should be cannot be created over
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let output = LogOutput::File {
            directory: blocker.path().join("logs").to_string_lossy().into_owned(),
            prefix: "rx".to_string(),
        };

        let sink = Sink::open(&output);
        assert!(sink.ansi);
        let reason = sink.fallback.expect("fallback reason");
        assert!(reason.starts_with("cannot log to "));
    }

    #[test]
    fn test_log_files_are_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = LogOutput::File {
            directory: dir.path().to_string_lossy().into_owned(),
            prefix: "rx".to_string(),
        };

        let sink = Sink::open(&output);
        assert!(sink.fallback.is_none());
        assert!(!sink.ansi);
    }

    #[test]
    fn test_console_output_keeps_colour() {
        assert!(Sink::open(&LogOutput::Stderr).ansi);
        assert!(Sink::open(&LogOutput::Stdout).fallback.is_none());
    }
}
