use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// influencers table row. Serialized camelCase on the wire.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub trust_score: i32,
    pub followers_count: i64,
    pub verified_claims: i32,
    pub created_at: DateTime<Utc>,
}

/// posts table row (a persisted claim).
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostRow {
    pub id: i64,
    pub influencer_id: i64,
    pub content: String,
    pub status: String,
    pub trust_score: i32,
    pub created_at: DateTime<Utc>,
}

/// get-by-id response: the influencer with all of its posts.
#[derive(Debug, Clone, Serialize)]
pub struct InfluencerDetail {
    #[serde(flatten)]
    pub influencer: InfluencerRow,
    pub posts: Vec<PostRow>,
}
