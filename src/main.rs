//! Terminal entry point.
//!
//! This binary is the thin integration layer between the Reelfind library and
//! a real terminal. It owns the crossterm session, the helper threads, and the
//! event loop; all behaviour lives in the library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐
//! │ key reader   │  │ NetworkWatcher │  │ SearchWorker     │
//! │ (thread)     │  │ (thread)       │  │ (thread)         │
//! └──────┬───────┘  └───────┬────────┘  └────────┬─────────┘
//!        │ crossterm Event  │ bool               │ WorkerResponse
//!        ▼                  ▼                    ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ main loop: select! → map → handle_event → actions → draw │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Configure**: Parse flags, merge the config file, initialize tracing
//! 2. **Start**: Probe connectivity, spawn the watcher and search worker
//! 3. **Loop**: Translate terminal, timer, connectivity and worker input into
//!    library events; execute the returned actions; redraw when asked
//! 4. **Exit**: Restore the terminal, join helper threads

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crossbeam_channel::{select, tick, unbounded, Receiver};
use crossterm::event::Event as TermEvent;
use crossterm::{cursor, execute, terminal};
use reelfind::network::{NetworkWatcher, TcpProbe};
use reelfind::search::HttpSearchClient;
use reelfind::worker::SearchWorker;
use reelfind::{handle_event, map_key, Action, AppState, Cli, Config, Event, ReelfindError};
use std::io::Write;
use std::time::{Duration, Instant};

/// Interval of the timer that expires the reconnected notice.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Upper bound on a single connectivity probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Puts the terminal in raw mode on the alternate screen; restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, ReelfindError> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(std::io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Owns the library state plus everything tied to this process.
struct Runtime {
    config: Config,
    app: AppState,
    worker: SearchWorker,
}

impl Runtime {
    /// Translates terminal input into a library event.
    fn map_terminal_event(&self, event: TermEvent) -> Option<Event> {
        match event {
            TermEvent::Key(key) => map_key(&self.app, key),
            _ => None,
        }
    }

    /// Handles one event and executes its actions.
    ///
    /// Returns `(redraw, quit)`.
    fn dispatch(&mut self, event: &Event) -> (bool, bool) {
        let (mut redraw, actions) = match handle_event(&mut self.app, event) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                return (false, false);
            }
        };

        tracing::debug!(action_count = actions.len(), redraw, "event handled");

        for action in actions {
            match action {
                Action::PostToWorker(job) => {
                    if !self.worker.post(job) {
                        tracing::error!("search worker is gone");
                    }
                }
                Action::Reload => {
                    self.reload();
                    redraw = true;
                }
                Action::Quit => return (redraw, true),
            }
        }
        (redraw, false)
    }

    /// Rebuilds application state from configuration and storage.
    ///
    /// On failure the current state, tripped boundary included, is kept so the
    /// fallback screen stays up and reload can be tried again.
    fn reload(&mut self) {
        match reelfind::reload(&self.config, &self.app) {
            Ok(app) => {
                tracing::info!("application state rebuilt");
                self.app = app;
            }
            Err(e) => tracing::error!(error = %e, "reload failed"),
        }
    }

    fn draw(&mut self) -> Result<(), ReelfindError> {
        let (cols, rows) = terminal::size()?;
        let frame = reelfind::ui::render(&mut self.app, usize::from(rows), usize::from(cols));
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Forwards terminal events from a blocking reader thread.
fn spawn_terminal_reader() -> Receiver<TermEvent> {
    let (tx, rx) = unbounded();
    let spawned = std::thread::Builder::new()
        .name("terminal-input".to_string())
        .spawn(move || loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "terminal read failed");
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        tracing::error!(error = %e, "failed to spawn terminal reader");
    }
    rx
}

fn run(config: Config) -> Result<(), ReelfindError> {
    let _span = tracing::info_span!("run", api_url = %config.api_url).entered();

    let (connectivity_tx, connectivity_rx) = unbounded::<bool>();
    // Held so the receiver never disconnects, even without a watcher.
    let _connectivity_tx = connectivity_tx.clone();
    let probe_timeout = config.request_timeout.min(PROBE_TIMEOUT);
    let watcher = TcpProbe::for_url(&config.api_url, probe_timeout)
        .map(|probe| NetworkWatcher::spawn(probe, config.probe_interval, connectivity_tx));
    if watcher.is_none() {
        tracing::warn!(api_url = %config.api_url, "cannot derive a probe target, assuming online");
    }
    let online = watcher.as_ref().map_or(true, NetworkWatcher::initially_online);

    let client = HttpSearchClient::new(config.api_url.clone(), config.request_timeout)?;
    let worker = SearchWorker::spawn(Box::new(client));
    let app = reelfind::initialize(&config, online)?;

    let mut runtime = Runtime {
        config,
        app,
        worker,
    };

    let _terminal = TerminalGuard::enter()?;
    let terminal_rx = spawn_terminal_reader();
    let ticker = tick(TICK_INTERVAL);
    let responses = runtime.worker.responses().clone();

    tracing::info!(online, "reelfind started");
    runtime.draw()?;

    loop {
        let (redraw, quit) = select! {
            recv(terminal_rx) -> msg => match msg {
                Ok(TermEvent::Resize(..)) => (true, false),
                Ok(event) => match runtime.map_terminal_event(event) {
                    Some(event) => runtime.dispatch(&event),
                    None => (false, false),
                },
                Err(_) => (false, true),
            },
            recv(responses) -> msg => match msg {
                Ok(response) => runtime.dispatch(&Event::WorkerResponse(response)),
                Err(_) => {
                    tracing::error!("search worker channel closed");
                    (false, true)
                }
            },
            recv(connectivity_rx) -> msg => match msg {
                Ok(online) => runtime.dispatch(&Event::Connectivity { online, at: Instant::now() }),
                Err(_) => (false, false),
            },
            recv(ticker) -> at => runtime.dispatch(&Event::Tick(at.unwrap_or_else(|_| Instant::now()))),
        };

        if redraw {
            runtime.draw()?;
        }
        if quit {
            break;
        }
    }

    tracing::info!("reelfind exiting");
    drop(watcher);
    Ok(())
}

fn main() -> Result<(), ReelfindError> {
    let cli = Cli::parse();
    let config = Config::resolve(cli)?;
    reelfind::observability::init_tracing(&config);

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "panic");
        default_hook(info);
    }));

    run(config)
}
