pub mod client;
pub mod extract;
pub mod prompts;

pub use client::{LlmError, ModelClient, OpenAiClient};
pub use extract::{decode_payload, extract_json_payload};

/// Model used for catalog generation and claim search.
pub const GENERATION_MODEL: &str = "gpt-4o-mini";

/// Model used for the second-stage scientific claim lookups.
pub const VERIFICATION_MODEL: &str = "gpt-4";
