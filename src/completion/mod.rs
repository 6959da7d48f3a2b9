pub mod client;
pub mod errors;
pub mod fallback;
pub mod types;

pub use client::{CompletionProvider, OpenAiClient};
pub use errors::CompletionError;
pub use fallback::{ParameterFallback, complete_with_fallback};
pub use types::{ChatMessage, ChatRequest, OptionalParam};
