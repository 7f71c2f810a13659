// API handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Extract parameters from request
// 2. Call the model client / persistence gateway
// 3. Transform the result to an HTTP response

pub mod influencers;
pub mod research;

pub use influencers::{get_influencer_handler, list_influencers_handler, refresh_influencers_handler};
pub use research::{research_handler, search_claims_handler};
