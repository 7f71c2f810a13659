use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::errors::{DatabaseError, Result};
use crate::models::records::{InfluencerDetail, InfluencerRow, PostRow};

/// List all persisted influencers, highest trust first. Posts are not
/// included here; the detail lookup carries them.
#[tracing::instrument(skip(pool))]
pub async fn list_influencers(pool: &PgPool) -> Result<Vec<InfluencerRow>> {
    debug!("Listing influencers");

    let rows = sqlx::query_as::<_, InfluencerRow>(
        r#"
        SELECT id, name, category, trust_score, followers_count, verified_claims, created_at
        FROM influencers
        ORDER BY trust_score DESC, id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    info!("Listed {} influencers", rows.len());
    Ok(rows)
}

/// Fetch one influencer by id, without posts.
#[tracing::instrument(skip(pool), fields(influencer_id = influencer_id))]
pub async fn get_influencer(pool: &PgPool, influencer_id: i64) -> Result<InfluencerRow> {
    debug!("Loading influencer {}", influencer_id);

    sqlx::query_as::<_, InfluencerRow>(
        r#"
        SELECT id, name, category, trust_score, followers_count, verified_claims, created_at
        FROM influencers
        WHERE id = $1
        "#,
    )
    .bind(influencer_id)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => {
            DatabaseError::NotFound(format!("Influencer not found for id: {}", influencer_id))
        }
        _ => DatabaseError::QueryError(e),
    })
}

/// All posts belonging to one influencer.
#[tracing::instrument(skip(pool), fields(influencer_id = influencer_id))]
pub async fn list_posts_for_influencer(pool: &PgPool, influencer_id: i64) -> Result<Vec<PostRow>> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, influencer_id, content, status, trust_score, created_at
        FROM posts
        WHERE influencer_id = $1
        ORDER BY id
        "#,
    )
    .bind(influencer_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(rows)
}

/// Fetch one influencer with its related posts. NotFound when the id is
/// absent, so the endpoint can answer 404 rather than 500.
#[tracing::instrument(skip(pool), fields(influencer_id = influencer_id))]
pub async fn load_influencer_detail(pool: &PgPool, influencer_id: i64) -> Result<InfluencerDetail> {
    let influencer = get_influencer(pool, influencer_id).await?;
    let posts = list_posts_for_influencer(pool, influencer_id).await?;

    info!(
        posts = posts.len(),
        "Loaded influencer '{}' with posts", influencer.name
    );
    Ok(InfluencerDetail { influencer, posts })
}
