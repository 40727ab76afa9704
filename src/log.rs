//! Debug log for mldr runs
//!
//! Widgets and the demo shell log through [`log!`](crate::log!) and
//! [`log_fn!`](crate::log_fn!) unconditionally. Lines only reach disk once a
//! sink has been opened with [`init`] or [`init_at`]; before that every call
//! is dropped, which keeps library use and tests free of side effects.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

/// Name of the log written by [`init`]
pub const LOG_FILE_NAME: &str = "mldr.log";

static SINK: Mutex<Option<File>> = Mutex::new(None);

/// Default log location: beside the binary, or the working directory when
/// the binary's path can't be resolved
fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Open the default log; failures leave logging disabled
pub fn init() {
    let _ = init_at(&default_log_path());
}

/// Truncate `path` and send all further log lines there
pub fn init_at(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    if let Ok(mut sink) = SINK.lock() {
        *sink = Some(file);
    }
    log(&format!("mldr {} log opened", env!("CARGO_PKG_VERSION")));
    Ok(())
}

/// Append one timestamped line, if a sink is open
pub fn log(msg: &str) {
    let Ok(mut sink) = SINK.lock() else {
        return;
    };
    if let Some(file) = sink.as_mut() {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", stamp, msg).and_then(|_| file.flush());
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log prefixed with the calling operation's name
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}
