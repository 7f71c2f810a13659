use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::db::read_ops::{list_influencers, load_influencer_detail};
use crate::db::write_ops::replace_catalog;
use crate::llm::{decode_payload, prompts, GENERATION_MODEL};
use crate::models::generated::{validate_catalog, GeneratedInfluencer};
use crate::models::records::{InfluencerDetail, InfluencerRow};

/// Number of influencers requested per catalog refresh.
const REFRESH_COUNT: usize = 15;

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub message: String,
}

/// Destructive refresh: prompt the model for a fresh catalog, then wipe and
/// repopulate both tables in one transaction. Decode and validation happen
/// before the transaction starts, so a malformed response never empties the
/// store.
#[tracing::instrument(skip(state))]
pub async fn refresh_influencers_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<RefreshResponse>> {
    info!("Refreshing influencer catalog");

    let raw = state
        .model
        .complete(GENERATION_MODEL, &prompts::refresh_catalog(REFRESH_COUNT))
        .await?;

    let catalog: Vec<GeneratedInfluencer> = decode_payload(&raw)?;
    validate_catalog(&catalog)?;

    info!(influencers = catalog.len(), "Decoded and validated catalog");

    let mut tx = state
        .pool
        .begin()
        .await
        .map_err(|e| ApiError::Database(format!("Failed to start transaction: {}", e)))?;

    let result = replace_catalog(&mut tx, &catalog).await;

    match result {
        Ok((influencers, posts)) => {
            tx.commit()
                .await
                .map_err(|e| ApiError::Database(format!("Failed to commit transaction: {}", e)))?;

            info!(influencers, posts, "Catalog refresh committed");
            Ok(Json(RefreshResponse {
                message: "Influencers and posts refreshed successfully!".to_string(),
            }))
        }
        Err(e) => {
            // Transaction rolls back when dropped
            error!("Catalog refresh failed: {:?}", e);
            Err(e.into())
        }
    }
}

/// Return all persisted influencers.
#[tracing::instrument(skip(state))]
pub async fn list_influencers_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<InfluencerRow>>> {
    let influencers = list_influencers(&state.pool).await?;
    Ok(Json(influencers))
}

/// Return one influencer with its posts; 404 when the id is absent.
#[tracing::instrument(skip(state), fields(influencer_id = influencer_id))]
pub async fn get_influencer_handler(
    State(state): State<AppState>,
    Path(influencer_id): Path<i64>,
) -> ApiResult<Json<InfluencerDetail>> {
    let detail = load_influencer_detail(&state.pool, influencer_id).await?;
    Ok(Json(detail))
}
