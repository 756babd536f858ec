//! HTTP request handlers

pub mod analyze;
pub mod logs;
pub mod status;
