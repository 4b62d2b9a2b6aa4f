//! Connectivity probing and the background watcher thread.
//!
//! A terminal process has no browser-style online/offline events, so the
//! watcher polls a [`ConnectivityProbe`] and reports transitions over a
//! channel. The watcher lives as long as its handle; dropping it stops and
//! joins the polling thread.

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::net::{TcpStream, ToSocketAddrs};
use std::thread::JoinHandle;
use std::time::Duration;

/// Source of the current connectivity signal.
pub trait ConnectivityProbe: Send + 'static {
    fn is_online(&self) -> bool;
}

/// Probe that treats a successful TCP connect to the search host as online.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Builds a probe targeting the host and port of `url`.
    ///
    /// Returns `None` if the URL has no host or no known port.
    #[must_use]
    pub fn for_url(url: &str, timeout: Duration) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str()?.to_string();
        let port = parsed.port_or_known_default()?;
        Some(Self::new(host, port, timeout))
    }
}

impl ConnectivityProbe for TcpProbe {
    fn is_online(&self) -> bool {
        let Ok(addrs) = (self.host.as_str(), self.port).to_socket_addrs() else {
            tracing::trace!(host = %self.host, "probe address resolution failed");
            return false;
        };
        addrs
            .into_iter()
            .any(|addr| TcpStream::connect_timeout(&addr, self.timeout).is_ok())
    }
}

/// Handle to the polling thread. Dropping it unsubscribes.
pub struct NetworkWatcher {
    initially_online: bool,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl NetworkWatcher {
    /// Reads the initial state synchronously, then polls every `interval` on
    /// a background thread, sending the new state on each transition.
    #[must_use]
    pub fn spawn<P: ConnectivityProbe>(probe: P, interval: Duration, events: Sender<bool>) -> Self {
        let initially_online = probe.is_online();
        tracing::debug!(initially_online, "starting connectivity watcher");

        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = std::thread::spawn(move || {
            let mut last = initially_online;
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                let online = probe.is_online();
                if online != last {
                    last = online;
                    if events.send(online).is_err() {
                        break;
                    }
                }
            }
            tracing::debug!("connectivity watcher stopped");
        });

        Self {
            initially_online,
            stop: Some(stop_tx),
            handle: Some(handle),
        }
    }

    #[must_use]
    pub const fn initially_online(&self) -> bool {
        self.initially_online
    }
}

impl Drop for NetworkWatcher {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("connectivity watcher panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct FlagProbe(Arc<AtomicBool>);

    impl ConnectivityProbe for FlagProbe {
        fn is_online(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn reports_only_transitions() {
        let flag = Arc::new(AtomicBool::new(false));
        let (tx, rx) = unbounded();
        let watcher = NetworkWatcher::spawn(FlagProbe(flag.clone()), Duration::from_millis(5), tx);
        assert!(!watcher.initially_online());

        flag.store(true, Ordering::SeqCst);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(true));

        flag.store(false, Ordering::SeqCst);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(false));

        drop(watcher);
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn probe_parses_url_host_and_port() {
        let probe = TcpProbe::for_url("http://localhost:8000", Duration::from_millis(10)).unwrap();
        assert_eq!(probe.host, "localhost");
        assert_eq!(probe.port, 8000);

        let https = TcpProbe::for_url("https://movies.example.com/api", Duration::from_millis(10)).unwrap();
        assert_eq!(https.port, 443);

        assert!(TcpProbe::for_url("not a url", Duration::from_millis(10)).is_none());
    }
}
