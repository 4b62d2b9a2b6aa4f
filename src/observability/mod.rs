//! Structured logging to a rotating file.
//!
//! The terminal belongs to the UI, so log output never goes to stdout or
//! stderr. Events are formatted as plain text by `tracing-subscriber` and
//! appended to `reelfind.log` inside the data directory.
//!
//! # Configuration
//!
//! The filter is resolved in this order:
//! 1. `RUST_LOG` environment variable, if set and valid
//! 2. `log_level` from [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use reelfind::observability::init_tracing;
//! use reelfind::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("reelfind started");
//! ```
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - [`file_writer`]: size-based rotating log file

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
