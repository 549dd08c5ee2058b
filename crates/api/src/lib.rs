//! Tool-invocation boundary: tool registry, HTTP surface and configuration.

pub mod app;
pub mod config;
pub mod tools;
