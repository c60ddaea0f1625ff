//! Log sink module
//!
//! Process-wide sink for log lines. Each channel (info/access and error)
//! writes to its console stream unless the configuration points it at a
//! file. Targets are fixed for the lifetime of the process.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static SINK: OnceLock<LogSink> = OnceLock::new();

/// One log channel: a file when configured, otherwise a console stream
enum Channel {
    Console { use_stderr: bool },
    File(Mutex<File>),
}

impl Channel {
    fn open(path: Option<&str>, use_stderr: bool) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(Mutex::new(append_file(p)?))),
            None => Ok(Self::Console { use_stderr }),
        }
    }

    fn write_line(&self, line: &str) {
        match self {
            Self::Console { use_stderr: false } => println!("{line}"),
            Self::Console { use_stderr: true } => eprintln!("{line}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{line}");
                }
            }
        }
    }
}

/// Process-wide pair of log channels
pub struct LogSink {
    info: Channel,
    error: Channel,
}

impl LogSink {
    pub fn write_info(&self, line: &str) {
        self.info.write_line(line);
    }

    pub fn write_error(&self, line: &str) {
        self.error.write_line(line);
    }
}

/// Open a log file for appending, creating parent directories as needed
fn append_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the process-wide sink; call once at startup
///
/// Returns an error if a configured log file cannot be opened.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let sink = LogSink {
        info: Channel::open(access_log_file, false)?,
        error: Channel::open(error_log_file, true)?,
    };

    SINK.set(sink).map_err(|_| {
        io::Error::new(io::ErrorKind::AlreadyExists, "log sink already initialized")
    })
}

/// Get the process-wide sink
///
/// Panics if `init()` has not been called.
pub fn get() -> &'static LogSink {
    SINK.get()
        .expect("log sink not initialized; call logger::init() first")
}

/// Check whether `init()` has run yet
pub fn is_initialized() -> bool {
    SINK.get().is_some()
}
