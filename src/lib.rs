//! Reelfind: a terminal client for a natural-language movie search service.
//!
//! Reelfind provides:
//! - Free-text movie search against an HTTP service, run on a worker thread
//! - Year, genre, and sort filters that persist across restarts
//! - A five-entry recent search list with one-key recall
//! - Offline detection with a transient "back online" notice
//! - Client-side paging of results, five per page
//! - Light and dark palettes, remembered between sessions
//! - A render boundary that swaps in a reload screen if drawing fails

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! │  - crossterm raw mode, key reader, select! loop     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key mapping and event handling                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Search/Worker │
//! │ (ui/)         │   │ (storage/)    │   │ (search/,     │
//! │ - Rendering   │   │ - JSON files  │   │  worker/)     │
//! │ - Theming     │   │ - Filters     │   │ - HTTP client │
//! │ - Boundary    │   │ - History     │   │ - Seq. guard  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Network & Infrastructure                   │
//! │  - Movie, filter and history models (domain/)       │
//! │  - Connectivity monitor and probe (network/)        │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Movies, filters, history, errors
//! - [`infrastructure`]: Platform-specific paths
//! - [`network`]: Connectivity probing and the reconnected notice
//! - [`observability`]: Log file setup
//! - [`search`]: HTTP transport, session controller, paging
//! - [`storage`]: Durable key-value stores
//! - [`ui`]: Terminal rendering with theme support
//! - [`worker`]: Background search thread
//!
//! # Configuration
//!
//! Defaults, then an optional TOML file, then command-line flags:
//!
//! ```toml
//! # ~/.config/reelfind/config.toml
//! api_url = "https://movies.example.com"
//! log_level = "debug"
//! request_timeout_secs = 10
//! probe_interval_ms = 5000
//! ```
//!
//! # Example
//!
//! ```
//! use reelfind::{handle_event, Action, AppState, Event};
//! use reelfind::storage::MemoryStore;
//!
//! let mut state = AppState::new(MemoryStore::new(), true);
//! for event in [Event::Char('u'), Event::Char('p'), Event::Submit] {
//!     let (_redraw, actions) = handle_event(&mut state, &event)?;
//!     for action in actions {
//!         if let Action::PostToWorker(job) = action {
//!             assert_eq!(job.request.query, "up");
//!         }
//!     }
//! }
//! # Ok::<(), reelfind::ReelfindError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod network;
pub mod observability;
pub mod search;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, map_key, Action, AppState, Event, InputMode};
pub use domain::{FilterConfig, Movie, ReelfindError, Result, SearchResult};
pub use ui::Theme;

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storage::JsonFileStore;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(2);

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "reelfind", version, about = "Search for movies from the terminal")]
pub struct Cli {
    /// Base URL of the search service
    #[arg(long)]
    pub api_url: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for saved filters, history and logs
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `reelfind=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Search request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Resolved runtime configuration.
///
/// # Example
///
/// ```
/// use reelfind::Config;
///
/// let config = Config::from_toml_str("api_url = \"http://movies:9000\"")?;
/// assert_eq!(config.api_url, "http://movies:9000");
/// assert_eq!(config.log_level, "info");
/// # Ok::<(), reelfind::ReelfindError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search service base URL, without the `/search` path.
    pub api_url: String,

    /// Where the JSON stores and the log file live.
    pub data_dir: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,

    pub request_timeout: Duration,

    /// How often the connectivity watcher probes the service host.
    pub probe_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: infrastructure::default_data_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            probe_interval: DEFAULT_PROBE_INTERVAL,
        }
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    data_dir: Option<PathBuf>,
    log_level: Option<String>,
    request_timeout_secs: Option<u64>,
    probe_interval_ms: Option<u64>,
}

impl Config {
    /// Parses a TOML config document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReelfindError::Config`] if the document is not valid TOML or
    /// contains an unknown key.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ReelfindError::Config(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            data_dir: file.data_dir.unwrap_or(defaults.data_dir),
            log_level: file.log_level.unwrap_or(defaults.log_level),
            request_timeout: file
                .request_timeout_secs
                .map_or(defaults.request_timeout, Duration::from_secs),
            probe_interval: file
                .probe_interval_ms
                .map_or(defaults.probe_interval, Duration::from_millis),
        })
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ReelfindError::Io`] if the file cannot be read and
    /// [`ReelfindError::Config`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn merge_cli(mut self, cli: Cli) -> Self {
        if let Some(api_url) = cli.api_url {
            self.api_url = api_url;
        }
        if let Some(data_dir) = cli.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        if let Some(secs) = cli.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Builds the effective configuration for a run.
    ///
    /// Uses `--config` when given, otherwise the platform config file if it
    /// exists, otherwise the defaults. CLI flags are applied last.
    ///
    /// # Errors
    ///
    /// Propagates [`Config::from_file`] failures. A missing default config
    /// file is not an error; a missing `--config` file is.
    pub fn resolve(cli: Cli) -> Result<Self> {
        let path = cli
            .config
            .clone()
            .or_else(|| infrastructure::default_config_file().filter(|p| p.is_file()));

        let base = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        Ok(base.merge_cli(cli))
    }
}

/// Builds a fresh [`AppState`] backed by JSON files in `config.data_dir`.
///
/// Used at startup and again for every reload after a render failure.
///
/// # Errors
///
/// Returns [`ReelfindError::Io`] if the data directory cannot be created.
///
/// # Example
///
/// ```
/// use reelfind::{initialize, Config};
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     data_dir: dir.path().to_path_buf(),
///     ..Config::default()
/// };
/// let state = initialize(&config, true)?;
/// assert!(state.history.get().is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn initialize(config: &Config, initially_online: bool) -> Result<AppState> {
    tracing::debug!(data_dir = %config.data_dir.display(), "initializing reelfind");
    let backend = JsonFileStore::new(config.data_dir.clone())?;
    Ok(AppState::new(backend, initially_online))
}

/// Rebuilds state from storage after a render failure.
///
/// The search worker outlives the old state and may still answer jobs it
/// issued, so the new controller continues that job numbering and treats
/// those answers as stale. Connectivity carries over from `previous`.
///
/// # Errors
///
/// Returns [`ReelfindError::Io`] if the data directory cannot be created.
pub fn reload(config: &Config, previous: &AppState) -> Result<AppState> {
    let mut state = initialize(config, previous.monitor.is_online())?;
    state.controller = search::SearchController::resuming_after(previous.controller.latest_seq());
    tracing::debug!(resume_seq = previous.controller.latest_seq(), "state rebuilt");
    Ok(state)
}
