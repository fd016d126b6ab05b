pub mod client;
pub mod factory;
pub mod groq;

pub use client::{CompletionError, CompletionProvider, CompletionResult};
pub use factory::build_completion_provider;
pub use groq::GroqProvider;
