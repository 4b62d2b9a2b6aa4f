//! Background worker for search requests.
//!
//! - `messages`: [`SearchJob`] and [`WorkerResponse`]
//! - `handler`: [`SearchWorker`] thread owning the transport

pub mod handler;
pub mod messages;

pub use handler::{SearchWorker, SHUTDOWN_GRACE};
pub use messages::{SearchJob, WorkerResponse};
