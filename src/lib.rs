pub mod api;
pub mod db;
pub mod llm;
pub mod models;

// Re-export commonly used types
pub use api::{create_app, run_server, AppState};
pub use db::DatabaseError;
pub use llm::{decode_payload, extract_json_payload, LlmError, ModelClient, OpenAiClient};
pub use models::{
    ClaimStatus, GeneratedClaim, GeneratedInfluencer, InfluencerDetail, InfluencerRow, PostRow,
    ResearchEntry, ScientificClaim,
};
