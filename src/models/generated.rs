use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Influencer '{name}': trustScore {value} outside 0-100")]
    InfluencerTrustScore { name: String, value: i64 },

    #[error("Claim '{content}': trustScore {value} outside 0-100")]
    ClaimTrustScore { content: String, value: i64 },

    #[error("Influencer '{name}': negative {field}")]
    NegativeCount { name: String, field: &'static str },
}

/// Verification status of a claim. Serde enforces the closed set at decode
/// time, so an off-vocabulary status is a malformed response, not bad data
/// in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Verified,
    Unverified,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "verified",
            ClaimStatus::Unverified => "unverified",
        }
    }
}

/// A claim as emitted by the model, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedClaim {
    pub content: String,
    pub status: ClaimStatus,
    pub trust_score: i64,
}

impl GeneratedClaim {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0..=100).contains(&self.trust_score) {
            return Err(ValidationError::ClaimTrustScore {
                content: self.content.clone(),
                value: self.trust_score,
            });
        }
        Ok(())
    }
}

/// An influencer with nested claims, as emitted by the model. The store
/// assigns its own primary keys; any id the model volunteers is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInfluencer {
    pub name: String,
    pub category: String,
    pub trust_score: i64,
    pub followers_count: i64,
    pub verified_claims: i64,
    pub claims: Vec<GeneratedClaim>,
}

impl GeneratedInfluencer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0..=100).contains(&self.trust_score) {
            return Err(ValidationError::InfluencerTrustScore {
                name: self.name.clone(),
                value: self.trust_score,
            });
        }
        if self.followers_count < 0 {
            return Err(ValidationError::NegativeCount {
                name: self.name.clone(),
                field: "followersCount",
            });
        }
        if self.verified_claims < 0 {
            return Err(ValidationError::NegativeCount {
                name: self.name.clone(),
                field: "verifiedClaims",
            });
        }
        for claim in &self.claims {
            claim.validate()?;
        }
        Ok(())
    }
}

/// Validate a whole decoded catalog before anything destructive happens.
pub fn validate_catalog(influencers: &[GeneratedInfluencer]) -> Result<(), ValidationError> {
    for influencer in influencers {
        influencer.validate()?;
    }
    Ok(())
}

/// Validate a transient claim batch (search-claims, research stage one).
pub fn validate_claims(claims: &[GeneratedClaim]) -> Result<(), ValidationError> {
    for claim in claims {
        claim.validate()?;
    }
    Ok(())
}

/// Second-stage research output: a verified statement and where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScientificClaim {
    pub content: String,
    pub source: String,
}

impl ScientificClaim {
    /// Stand-in when a per-claim lookup fails; the batch carries on.
    pub fn placeholder() -> Self {
        Self {
            content: "Failed to generate scientific claim".to_string(),
            source: "N/A".to_string(),
        }
    }
}

/// One research result row: the original claim plus its scientific backing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchEntry {
    #[serde(flatten)]
    pub claim: GeneratedClaim,
    pub scientific_claim: ScientificClaim,
}
