//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal loop (main.rs) and the
//! domain/storage/search/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Timer / Connectivity → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                           ↑                                          ↓
//!                                           └──────────── Worker Responses ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Mode-aware key bindings
//! - [`modes`]: Input mode state machine
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use reelfind::app::{handle_event, AppState, Event, InputMode};
//! use reelfind::storage::MemoryStore;
//!
//! let mut state = AppState::new(MemoryStore::new(), true);
//! let (redraw, actions) = handle_event(&mut state, &Event::FocusResults)?;
//! assert!(redraw && actions.is_empty());
//! assert_eq!(state.input_mode, InputMode::Browsing);
//! # Ok::<(), reelfind::ReelfindError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::InputMode;
pub use state::AppState;
