//! Search request orchestration.
//!
//! - [`client`]: request type, transport trait, HTTP implementation
//! - [`controller`]: session state, sequence guard, history hand-off
//! - [`pagination`]: fixed-size page slicing

pub mod client;
pub mod controller;
pub mod pagination;

pub use client::{HttpSearchClient, SearchRequest, SearchTransport};
pub use controller::{SearchController, SearchSession};
pub use pagination::{page_slice, total_pages, PAGE_SIZE};
