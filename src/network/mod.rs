//! Network status tracking.
//!
//! - [`monitor`]: pure online/offline state machine with the reconnected notice
//! - [`probe`]: connectivity probe trait, TCP probe, and the polling watcher

pub mod monitor;
pub mod probe;

pub use monitor::{Connectivity, NetworkMonitor, RECONNECTED_NOTICE_DURATION};
pub use probe::{ConnectivityProbe, NetworkWatcher, TcpProbe};
