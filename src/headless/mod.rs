//! Headless mode - scriptable subcommands, no TUI
//!
//! Each subcommand performs one request against the ZTP service. Payloads
//! (profile JSON, file listings, the provisioning log) go to stdout; progress
//! and completion events go to stderr as NDJSON so scripts can follow long
//! uploads without parsing the payload stream.
//!
//! # Example Output
//!
//! ```json
//! {"event":"upload_progress","file":"cat9k.bin","percent":42,"timestamp":1704700001000}
//! {"event":"upload_finished","file":"cat9k.bin","timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use serde::Serialize;
use tracing::error;

/// Headless subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the profile list as JSON
    Pull {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Validate and save a JSON profile list
    Push {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List files served by the backend
    Files,

    /// Upload local files
    Upload {
        /// Folder on the server (defaults to the configured upload folder)
        #[arg(short, long)]
        folder: Option<String>,

        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },

    /// Delete a served file
    Rm { name: String },

    /// Download a served file
    Get {
        name: String,

        /// Target directory (defaults to the configured download directory)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Import profiles from a CSV file
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Export profiles as CSV
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the provisioning log
    Log {
        /// Clear the log instead of printing it
        #[arg(long)]
        clear: bool,
    },
}

/// Events emitted on stderr in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    UploadProgress {
        file: String,
        percent: u16,
        timestamp: i64,
    },

    UploadFinished { file: String, timestamp: i64 },

    FileDeleted { file: String, timestamp: i64 },

    FileDownloaded {
        file: String,
        path: String,
        timestamp: i64,
    },

    /// Profile list saved
    DataPushed { records: usize, timestamp: i64 },

    CsvImported { path: String, timestamp: i64 },

    CsvExported { path: String, timestamp: i64 },

    LogCleared { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stderr as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stderr = io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", json) {
            error!("Failed to write headless event: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn upload_progress(file: &str, percent: u16) -> Self {
        Self::UploadProgress {
            file: file.to_string(),
            percent,
            timestamp: Self::now(),
        }
    }

    pub fn upload_finished(file: &str) -> Self {
        Self::UploadFinished {
            file: file.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn file_deleted(file: &str) -> Self {
        Self::FileDeleted {
            file: file.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn file_downloaded(file: &str, path: &std::path::Path) -> Self {
        Self::FileDownloaded {
            file: file.to_string(),
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn data_pushed(records: usize) -> Self {
        Self::DataPushed {
            records,
            timestamp: Self::now(),
        }
    }

    pub fn csv_imported(path: &std::path::Path) -> Self {
        Self::CsvImported {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn csv_exported(path: &std::path::Path) -> Self {
        Self::CsvExported {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn log_cleared() -> Self {
        Self::LogCleared {
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        let argv = std::iter::once("ztpc").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("parse failed").command
    }

    #[test]
    fn test_upload_progress_serialization() {
        let event = HeadlessEvent::upload_progress("cat9k.bin", 42);
        let json = serde_json::to_string(&event).expect("serialization failed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "upload_progress");
        assert_eq!(value["file"], "cat9k.bin");
        assert_eq!(value["percent"], 42);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_log_cleared_has_only_timestamp() {
        let value = serde_json::to_value(HeadlessEvent::log_cleared()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(value["event"], "log_cleared");
    }

    #[test]
    fn test_parse_upload() {
        let command = parse(&["upload", "--folder", "images", "a.bin", "b.cfg"]);
        assert_eq!(
            command,
            Command::Upload {
                folder: Some("images".to_string()),
                files: vec![PathBuf::from("a.bin"), PathBuf::from("b.cfg")],
            }
        );
    }

    #[test]
    fn test_upload_requires_files() {
        let argv = ["ztpc", "upload"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_parse_log_clear() {
        assert_eq!(parse(&["log"]), Command::Log { clear: false });
        assert_eq!(parse(&["log", "--clear"]), Command::Log { clear: true });
    }

    #[test]
    fn test_parse_get_with_dir() {
        assert_eq!(
            parse(&["get", "images/a.bin", "-d", "/tmp"]),
            Command::Get {
                name: "images/a.bin".to_string(),
                dir: Some(PathBuf::from("/tmp")),
            }
        );
    }
}
