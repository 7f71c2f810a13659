use axum::{extract::State, Json};
use futures::future::join_all;
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::error::ApiResult;
use crate::api::server::AppState;
use crate::db::read_ops::get_influencer;
use crate::llm::client::{LlmError, ModelClient};
use crate::llm::{decode_payload, prompts, GENERATION_MODEL, VERIFICATION_MODEL};
use crate::models::generated::{
    validate_claims, GeneratedClaim, ResearchEntry, ScientificClaim,
};

const DEFAULT_CLAIMS_TO_ANALYZE: u32 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchClaimsRequest {
    pub influencer_id: i64,
    pub topic: String,
}

/// Look up an influencer, then ask the model for their claims on a topic.
/// The result is returned to the caller and never persisted.
#[tracing::instrument(skip(state, request), fields(influencer_id = request.influencer_id, topic = %request.topic))]
pub async fn search_claims_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchClaimsRequest>,
) -> ApiResult<Json<Vec<GeneratedClaim>>> {
    let influencer = get_influencer(&state.pool, request.influencer_id).await?;

    info!("Searching claims for influencer '{}'", influencer.name);

    let raw = state
        .model
        .complete(
            GENERATION_MODEL,
            &prompts::search_claims(&influencer.name, &request.topic),
        )
        .await?;

    let claims: Vec<GeneratedClaim> = decode_payload(&raw)?;
    validate_claims(&claims)?;

    info!(claims = claims.len(), "Claim search completed");
    Ok(Json(claims))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    pub influencer: Option<String>,
    pub topic: Option<String>,
    pub date_range: String,
    pub claims_to_analyze: Option<u32>,
    pub journals: Vec<String>,
}

/// Two-stage research: fetch N claims, then concurrently back each one with
/// a scientific claim sourced from the caller's journal list.
#[tracing::instrument(skip(state, request), fields(date_range = %request.date_range))]
pub async fn research_handler(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> ApiResult<Json<Vec<ResearchEntry>>> {
    let count = request.claims_to_analyze.unwrap_or(DEFAULT_CLAIMS_TO_ANALYZE);

    let raw = state
        .model
        .complete(
            GENERATION_MODEL,
            &prompts::research_claims(
                count,
                request.topic.as_deref(),
                request.influencer.as_deref(),
                &request.date_range,
            ),
        )
        .await?;

    let claims: Vec<GeneratedClaim> = decode_payload(&raw)?;
    validate_claims(&claims)?;

    info!(claims = claims.len(), "Research stage one completed");

    let entries = attach_scientific_claims(state.model.as_ref(), claims, &request.journals).await;
    Ok(Json(entries))
}

/// Fan out one scientific-claim lookup per claim. A failing lookup gets the
/// documented placeholder instead of aborting the batch.
pub async fn attach_scientific_claims(
    model: &dyn ModelClient,
    claims: Vec<GeneratedClaim>,
    journals: &[String],
) -> Vec<ResearchEntry> {
    let lookups = claims
        .iter()
        .map(|claim| generate_scientific_claim(model, &claim.content, journals));
    let results = join_all(lookups).await;

    claims
        .into_iter()
        .zip(results)
        .map(|(claim, result)| {
            let scientific_claim = result.unwrap_or_else(|e| {
                warn!("Scientific claim lookup failed: {}", e);
                ScientificClaim::placeholder()
            });
            ResearchEntry {
                claim,
                scientific_claim,
            }
        })
        .collect()
}

async fn generate_scientific_claim(
    model: &dyn ModelClient,
    claim_content: &str,
    journals: &[String],
) -> Result<ScientificClaim, LlmError> {
    let raw = model
        .complete(
            VERIFICATION_MODEL,
            &prompts::scientific_claim(claim_content, journals),
        )
        .await?;
    decode_payload(&raw)
}
