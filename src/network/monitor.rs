//! Connectivity state machine.
//!
//! [`NetworkMonitor`] tracks whether the client is online and raises a
//! one-shot "back online" notice on each offline→online transition. It does
//! no I/O; the watcher in [`super::probe`] feeds it observations. Time is
//! passed in by the caller so tests can drive the notice window directly.

use std::time::{Duration, Instant};

/// How long the reconnected notice stays visible without dismissal.
pub const RECONNECTED_NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

/// Online/offline tracker with a transient reconnected notice.
#[derive(Debug, Clone)]
pub struct NetworkMonitor {
    state: Connectivity,
    /// Expiry of the pending reconnected notice, if one is showing.
    reconnected_until: Option<Instant>,
}

impl NetworkMonitor {
    /// Creates a monitor seeded from the platform's current signal.
    #[must_use]
    pub const fn new(initially_online: bool) -> Self {
        Self {
            state: if initially_online {
                Connectivity::Online
            } else {
                Connectivity::Offline
            },
            reconnected_until: None,
        }
    }

    /// Records a connectivity observation.
    ///
    /// Returns `true` if the visible state changed. Offline→online raises the
    /// reconnected notice; online→offline clears it.
    pub fn observe(&mut self, online: bool, now: Instant) -> bool {
        let next = if online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        };

        if next == self.state {
            return false;
        }

        tracing::debug!(from = ?self.state, to = ?next, "connectivity changed");
        self.state = next;

        self.reconnected_until = match next {
            Connectivity::Online => Some(now + RECONNECTED_NOTICE_DURATION),
            Connectivity::Offline => None,
        };
        true
    }

    /// Expires the reconnected notice once its window has passed.
    ///
    /// Returns `true` if the notice was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reconnected_until {
            Some(until) if now >= until => {
                self.reconnected_until = None;
                true
            }
            _ => false,
        }
    }

    /// Hides the reconnected notice immediately.
    pub fn dismiss_reconnected(&mut self) -> bool {
        self.reconnected_until.take().is_some()
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.state == Connectivity::Online
    }

    #[must_use]
    pub const fn state(&self) -> Connectivity {
        self.state
    }

    #[must_use]
    pub const fn show_reconnected(&self) -> bool {
        self.reconnected_until.is_some()
    }
}
