//! MindTrek: turn a free-text product idea into a startup plan
//!
//! The [`analysis`] module derives an [`analysis::AnalysisRecord`] from an
//! idea, the [`server`] module exposes it over HTTP and persists every
//! result, and [`session::IdeaSession`] drives a submission from the
//! terminal front-end in [`cli`].

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod session;
