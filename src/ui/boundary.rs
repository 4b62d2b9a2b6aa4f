//! Render-failure containment.
//!
//! [`RenderBoundary`] runs a frame-drawing closure against a scratch buffer.
//! If the closure returns [`RenderError`] or panics, the partial frame is
//! dropped, the failure is logged, and a static fallback screen is returned
//! instead. A tripped boundary stays tripped: the closure is not called again
//! until the whole application state is rebuilt.
//!
//! # Example
//!
//! ```
//! use reelfind::ui::boundary::{RenderBoundary, RenderError, FALLBACK_TITLE};
//! use reelfind::ui::Theme;
//!
//! let mut boundary = RenderBoundary::new();
//! let frame = boundary.render(&Theme::default(), 24, 80, |out| {
//!     out.push_str("hello");
//!     Ok(())
//! });
//! assert_eq!(frame, "hello");
//!
//! let frame = boundary.render(&Theme::default(), 24, 80, |_| {
//!     Err(RenderError::InvalidHighlight { start: 4, end: 9, len: 3 })
//! });
//! assert!(boundary.is_tripped());
//! assert!(frame.contains(FALLBACK_TITLE));
//! ```

use crate::ui::components::render_fallback;
use crate::ui::theme::Theme;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_MESSAGE: &str = "The application encountered an error. Please try again.";
pub const FALLBACK_ACTION: &str = "r: Reload Application";

/// A failure while drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Writing into the frame buffer failed.
    #[error("frame formatting failed")]
    Format(#[from] std::fmt::Error),

    /// A highlight range points outside its text.
    #[error("highlight range {start}..{end} exceeds text of {len} chars")]
    InvalidHighlight { start: usize, end: usize, len: usize },

    /// The drawing code panicked.
    #[error("render panicked: {0}")]
    Panicked(String),
}

/// Fallible render scope with a sticky fallback.
#[derive(Debug, Default)]
pub struct RenderBoundary {
    failure: Option<RenderError>,
}

impl RenderBoundary {
    #[must_use]
    pub const fn new() -> Self {
        Self { failure: None }
    }

    #[must_use]
    pub const fn is_tripped(&self) -> bool {
        self.failure.is_some()
    }

    /// The failure that tripped the boundary.
    #[must_use]
    pub const fn failure(&self) -> Option<&RenderError> {
        self.failure.as_ref()
    }

    /// Draws one frame.
    ///
    /// Returns the closure's output on success, the fallback screen otherwise.
    pub fn render<F>(&mut self, theme: &Theme, rows: usize, cols: usize, draw: F) -> String
    where
        F: FnOnce(&mut String) -> Result<(), RenderError>,
    {
        if self.failure.is_none() {
            let mut frame = String::new();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| draw(&mut frame)))
                .unwrap_or_else(|payload| Err(RenderError::Panicked(panic_message(payload.as_ref()))));

            match outcome {
                Ok(()) => return frame,
                Err(e) => {
                    tracing::error!(error = %e, "render failed, showing fallback");
                    self.failure = Some(e);
                }
            }
        }

        Self::fallback_frame(theme, rows, cols)
    }

    fn fallback_frame(theme: &Theme, rows: usize, cols: usize) -> String {
        let mut frame = String::new();
        if render_fallback(&mut frame, theme, rows, cols).is_err() {
            return format!("{FALLBACK_TITLE}\r\n{FALLBACK_MESSAGE}\r\n{FALLBACK_ACTION}");
        }
        frame
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn theme() -> Theme {
        Theme::default()
    }

    #[test]
    fn successful_frame_passes_through() {
        let mut boundary = RenderBoundary::new();
        let frame = boundary.render(&theme(), 24, 80, |out| {
            out.push_str("frame");
            Ok(())
        });
        assert_eq!(frame, "frame");
        assert!(!boundary.is_tripped());
    }

    #[test]
    fn error_discards_partial_frame() {
        let mut boundary = RenderBoundary::new();
        let frame = boundary.render(&theme(), 24, 80, |out| {
            out.push_str("half a frame");
            Err(RenderError::Format(std::fmt::Error))
        });

        assert!(boundary.is_tripped());
        assert!(!frame.contains("half a frame"));
        assert!(frame.contains(FALLBACK_TITLE));
        assert!(frame.contains(FALLBACK_MESSAGE));
        assert!(frame.contains(FALLBACK_ACTION));
    }

    #[test]
    fn panic_is_contained() {
        let mut boundary = RenderBoundary::new();
        let frame = boundary.render(&theme(), 24, 80, |_| panic!("boom"));

        assert!(frame.contains(FALLBACK_TITLE));
        assert_eq!(
            boundary.failure(),
            Some(&RenderError::Panicked("boom".to_string()))
        );
    }

    #[test]
    fn tripped_boundary_does_not_retry() {
        let mut boundary = RenderBoundary::new();
        let _ = boundary.render(&theme(), 24, 80, |_| Err(RenderError::Format(std::fmt::Error)));

        let calls = Cell::new(0);
        let frame = boundary.render(&theme(), 24, 80, |out| {
            calls.set(calls.get() + 1);
            out.push_str("recovered");
            Ok(())
        });

        assert_eq!(calls.get(), 0);
        assert!(frame.contains(FALLBACK_TITLE));
        assert!(boundary.is_tripped());
    }

    #[test]
    fn fresh_boundary_starts_clean() {
        assert!(!RenderBoundary::default().is_tripped());
    }
}
