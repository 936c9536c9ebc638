//! Log configuration for one invocation.
//!
//! The CLI builds a [`LogConfig`] from `--log-level` / `--log-file` and turns it
//! into a [`Dispatch`] that is installed only for the duration of the run.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{DrillError, Result};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Stdout,
    File(PathBuf),
}

impl LogTarget {
    /// `"stderr"` and `"stdout"` name the standard streams; anything else is
    /// a file path.
    pub fn parse(value: &str) -> Self {
        match value {
            "stderr" => LogTarget::Stderr,
            "stdout" => LogTarget::Stdout,
            path => LogTarget::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// 0 = DEBUG, 1 = INFO, 2 = WARNING, 3 = ERROR, 4 = CRITICAL
    pub level: u8,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: 1, target: LogTarget::Stderr }
    }
}

impl LogConfig {
    /// Filter directive for the numeric level. tracing has no CRITICAL, so 4
    /// shares ERROR with 3.
    pub fn directive(&self) -> Result<&'static str> {
        match self.level {
            0 => Ok("debug"),
            1 => Ok("info"),
            2 => Ok("warn"),
            3 | 4 => Ok("error"),
            other => Err(DrillError::LogLevel(other)),
        }
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        Ok(match &self.target {
            LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogTarget::File(path) => {
                let log_err = |source: std::io::Error| DrillError::LogFile { path: path.clone(), source };
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(log_err)?;
                }
                let file = File::create(path).map_err(log_err)?;
                BoxMakeWriter::new(Mutex::new(file))
            }
        })
    }

    /// Build the subscriber for this configuration.
    pub fn dispatch(&self) -> Result<Dispatch> {
        let filter = EnvFilter::new(self.directive()?);
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(self.writer()?)
            .with_ansi(!matches!(self.target, LogTarget::File(_)))
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .finish();
        Ok(Dispatch::new(subscriber))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn target_parses_stream_names() {
        assert_eq!(LogTarget::parse("stderr"), LogTarget::Stderr);
        assert_eq!(LogTarget::parse("stdout"), LogTarget::Stdout);
        assert_eq!(LogTarget::parse("run.log"), LogTarget::File(PathBuf::from("run.log")));
    }

    #[test]
    fn levels_map_to_directives() {
        let at = |level| LogConfig { level, target: LogTarget::Stderr }.directive().unwrap();
        assert_eq!(at(0), "debug");
        assert_eq!(at(1), "info");
        assert_eq!(at(2), "warn");
        assert_eq!(at(3), "error");
        assert_eq!(at(4), "error");
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let cfg = LogConfig { level: 5, target: LogTarget::Stderr };
        assert!(matches!(cfg.directive(), Err(DrillError::LogLevel(5))));
    }

    #[test]
    fn file_target_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/run.log");
        let cfg = LogConfig { level: 0, target: LogTarget::File(path.clone()) };

        let dispatch = cfg.dispatch().unwrap();
        tracing::dispatcher::with_default(&dispatch, || tracing::info!("hello log"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("hello log"));
    }
}
