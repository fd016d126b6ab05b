//! Transaction extraction gateway.
//!
//! `POST /process` wraps a free-text transaction message in a fixed extraction
//! prompt, sends it to a hosted LLM completion API, and returns the model's raw
//! answer.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
