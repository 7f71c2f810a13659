use sqlx::{Postgres, Row, Transaction};
use tracing::{debug, info};

use crate::db::errors::{DatabaseError, Result};
use crate::models::generated::GeneratedInfluencer;

/// Delete all posts. Must run before the influencer wipe to respect the
/// foreign key.
pub async fn delete_all_posts(tx: &mut Transaction<'_, Postgres>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM posts")
        .execute(&mut **tx)
        .await
        .map_err(DatabaseError::QueryError)?;

    let deleted = result.rows_affected();
    debug!("Deleted {} posts", deleted);
    Ok(deleted)
}

/// Delete all influencers.
pub async fn delete_all_influencers(tx: &mut Transaction<'_, Postgres>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM influencers")
        .execute(&mut **tx)
        .await
        .map_err(DatabaseError::QueryError)?;

    let deleted = result.rows_affected();
    debug!("Deleted {} influencers", deleted);
    Ok(deleted)
}

/// Bulk insert influencers, returning the store-generated ids in input order.
pub async fn bulk_insert_influencers(
    tx: &mut Transaction<'_, Postgres>,
    influencers: &[GeneratedInfluencer],
) -> Result<Vec<i64>> {
    if influencers.is_empty() {
        return Ok(Vec::new());
    }

    debug!("Bulk inserting {} influencers", influencers.len());

    let names: Vec<String> = influencers.iter().map(|i| i.name.clone()).collect();
    let categories: Vec<String> = influencers.iter().map(|i| i.category.clone()).collect();
    let trust_scores: Vec<i32> = influencers.iter().map(|i| i.trust_score as i32).collect();
    let followers: Vec<i64> = influencers.iter().map(|i| i.followers_count).collect();
    let verified: Vec<i32> = influencers.iter().map(|i| i.verified_claims as i32).collect();

    let rows = sqlx::query(
        r#"
        INSERT INTO influencers (name, category, trust_score, followers_count, verified_claims, created_at)
        SELECT name, category, trust_score, followers_count, verified_claims, NOW()
        FROM UNNEST($1::text[], $2::text[], $3::int[], $4::bigint[], $5::int[])
            WITH ORDINALITY AS t(name, category, trust_score, followers_count, verified_claims, ord)
        ORDER BY ord
        RETURNING id
        "#,
    )
    .bind(&names[..])
    .bind(&categories[..])
    .bind(&trust_scores[..])
    .bind(&followers[..])
    .bind(&verified[..])
    .fetch_all(&mut **tx)
    .await
    .map_err(DatabaseError::QueryError)?;

    let ids: Vec<i64> = rows.iter().map(|r| r.get("id")).collect();
    info!("Inserted {} influencers", ids.len());
    Ok(ids)
}

/// Bulk insert posts flattened from each influencer's claims, linked to the
/// store-generated parent ids from the same batch.
pub async fn bulk_insert_posts(
    tx: &mut Transaction<'_, Postgres>,
    influencers: &[GeneratedInfluencer],
    influencer_ids: &[i64],
) -> Result<u64> {
    if influencers.len() != influencer_ids.len() {
        return Err(DatabaseError::TransactionError(format!(
            "Influencer/id batch length mismatch: {} vs {}",
            influencers.len(),
            influencer_ids.len()
        )));
    }

    let mut parent_ids = Vec::new();
    let mut contents = Vec::new();
    let mut statuses = Vec::new();
    let mut trust_scores = Vec::new();

    for (influencer, id) in influencers.iter().zip(influencer_ids) {
        for claim in &influencer.claims {
            parent_ids.push(*id);
            contents.push(claim.content.clone());
            statuses.push(claim.status.as_str().to_string());
            trust_scores.push(claim.trust_score as i32);
        }
    }

    if parent_ids.is_empty() {
        info!("No posts to insert");
        return Ok(0);
    }

    debug!("Bulk inserting {} posts", parent_ids.len());

    let result = sqlx::query(
        r#"
        INSERT INTO posts (influencer_id, content, status, trust_score, created_at)
        SELECT influencer_id, content, status, trust_score, NOW()
        FROM UNNEST($1::bigint[], $2::text[], $3::text[], $4::int[])
            AS t(influencer_id, content, status, trust_score)
        "#,
    )
    .bind(&parent_ids[..])
    .bind(&contents[..])
    .bind(&statuses[..])
    .bind(&trust_scores[..])
    .execute(&mut **tx)
    .await
    .map_err(DatabaseError::QueryError)?;

    let inserted = result.rows_affected();
    info!("Inserted {} posts", inserted);
    Ok(inserted)
}

/// Wipe and regenerate the whole catalog inside the caller's transaction.
/// Returns (influencers inserted, posts inserted).
///
/// Takes an exclusive lock on both tables so two concurrent refreshes cannot
/// interleave their delete/insert phases; the second waits and then replaces
/// the first's catalog wholesale.
pub async fn replace_catalog(
    tx: &mut Transaction<'_, Postgres>,
    influencers: &[GeneratedInfluencer],
) -> Result<(u64, u64)> {
    sqlx::query("LOCK TABLE influencers, posts IN ACCESS EXCLUSIVE MODE")
        .execute(&mut **tx)
        .await
        .map_err(DatabaseError::QueryError)?;

    delete_all_posts(tx).await?;
    delete_all_influencers(tx).await?;

    let ids = bulk_insert_influencers(tx, influencers).await?;
    let posts = bulk_insert_posts(tx, influencers, &ids).await?;

    Ok((ids.len() as u64, posts))
}
