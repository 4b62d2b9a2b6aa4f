//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process run inside the state's
//! [`RenderBoundary`](crate::ui::boundary::RenderBoundary):
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → ANSI frame
//!
//! Either step may fail; the boundary turns a failure into the fallback
//! screen.

use crate::app::AppState;
use crate::ui::boundary::RenderError;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Produces the next frame for `state` as a string of ANSI output.
///
/// The caller writes the frame to the terminal in one go. Once a render has
/// failed, every later call returns the fallback screen until the state is
/// rebuilt.
///
/// # Example
///
/// ```
/// use reelfind::app::AppState;
/// use reelfind::storage::MemoryStore;
/// use reelfind::ui::render;
///
/// let mut state = AppState::new(MemoryStore::new(), true);
/// let frame = render(&mut state, 24, 80);
/// assert!(frame.contains("Reelfind"));
/// ```
pub fn render(state: &mut AppState, rows: usize, cols: usize) -> String {
    let theme = state.theme();
    let mut boundary = std::mem::take(&mut state.boundary);

    let frame = boundary.render(&theme, rows, cols, |out| {
        let viewmodel = state.compute_viewmodel();
        render_viewmodel(out, &viewmodel, &theme, rows, cols)
    });

    state.boundary = boundary;
    frame
}

/// Renders a pre-computed view model into `out`.
///
/// # Errors
///
/// Returns the first component failure.
pub fn render_viewmodel(
    out: &mut String,
    vm: &UIViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> Result<(), RenderError> {
    components::render_layout(out, vm, theme, rows, cols)
}
