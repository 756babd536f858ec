//! REST API for the idea analysis service
//!
//! A single analysis endpoint plus the operational routes (status, version,
//! schema, logs). Analyses are persisted to an append-only store after the
//! response has been produced.

pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod startup;
pub mod state;
pub mod store;
pub mod types;

pub use routing::create_router;
pub use state::AppState;
