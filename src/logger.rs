use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::LOG_BUFFER_CAPACITY;

pub type SharedWriter = Arc<Mutex<BufWriter<File>>>;

static GLOBAL_DISPATCH: OnceCell<()> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Keeps recent lines in memory for the logs dialog and, when enabled,
/// appends them to a log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    enabled: bool,
    file_writer: Option<SharedWriter>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            enabled: false,
            file_writer: None,
        }
    }

    /// Create a logger from the `logging.enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }
        Self::with_file(Self::get_log_file_path()?)
    }

    /// Create a logger that appends to the given file
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            enabled: true,
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<&SharedWriter> {
        self.file_writer.as_ref()
    }

    /// Flush buffered file output
    pub fn flush(&self) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }

    /// Get the log file path
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("todoterm").join("todoterm.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// `Write` adapter so fern can share the logger's file handle
struct WriterHandle(SharedWriter);

impl Write for WriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.0.lock() {
            Ok(mut writer) => writer.write(buf),
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.0.lock() {
            Ok(mut writer) => writer.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Route `log` macro records into the logger's file.
///
/// Does nothing when the logger has no file. Only the first successful call
/// installs a dispatch; later calls return `Ok(false)`.
pub fn install(logger: &Logger, level: log::LevelFilter) -> Result<bool> {
    let Some(writer) = logger.file_writer().cloned() else {
        return Ok(false);
    };

    let mut installed = false;
    GLOBAL_DISPATCH.get_or_try_init(|| -> Result<()> {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {} {}: {}",
                    Utc::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(fern::Output::writer(Box::new(WriterHandle(writer)), "\n"))
            .apply()
            .context("Failed to install log dispatch")?;
        installed = true;
        Ok(())
    })?;

    Ok(installed)
}
