//! Terminal front-end: an HTTP client, renderers and the CLI commands

pub mod client;
pub mod commands;
pub mod display;
