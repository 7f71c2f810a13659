use super::*;
use serde_json::json;

fn claim(trust_score: i64) -> GeneratedClaim {
    GeneratedClaim {
        content: "spinach cures everything".to_string(),
        status: ClaimStatus::Unverified,
        trust_score,
    }
}

fn influencer(trust_score: i64) -> GeneratedInfluencer {
    GeneratedInfluencer {
        name: "Dr. Health".to_string(),
        category: "Nutrition".to_string(),
        trust_score,
        followers_count: 120_000,
        verified_claims: 12,
        claims: vec![claim(55)],
    }
}

#[test]
fn valid_catalog_passes() {
    assert!(validate_catalog(&[influencer(92)]).is_ok());
}

#[test]
fn influencer_trust_score_out_of_range_fails() {
    let err = influencer(101).validate().unwrap_err();
    assert!(matches!(err, ValidationError::InfluencerTrustScore { value: 101, .. }));
}

#[test]
fn nested_claim_trust_score_out_of_range_fails() {
    let mut inf = influencer(70);
    inf.claims.push(claim(-1));
    assert!(matches!(
        inf.validate().unwrap_err(),
        ValidationError::ClaimTrustScore { value: -1, .. }
    ));
}

#[test]
fn negative_followers_count_fails() {
    let mut inf = influencer(70);
    inf.followers_count = -5;
    assert!(matches!(
        inf.validate().unwrap_err(),
        ValidationError::NegativeCount { field: "followersCount", .. }
    ));
}

#[test]
fn unknown_status_is_rejected_at_decode() {
    let payload = json!({
        "content": "a claim",
        "status": "maybe",
        "trustScore": 50
    });
    assert!(serde_json::from_value::<GeneratedClaim>(payload).is_err());
}

#[test]
fn claim_decodes_from_camel_case() {
    let payload = json!({
        "content": "a claim",
        "status": "verified",
        "trustScore": 88
    });
    let claim: GeneratedClaim = serde_json::from_value(payload).unwrap();
    assert_eq!(claim.status, ClaimStatus::Verified);
    assert_eq!(claim.trust_score, 88);
}

#[test]
fn research_entry_flattens_claim_fields() {
    let entry = ResearchEntry {
        claim: claim(60),
        scientific_claim: ScientificClaim {
            content: "fiber intake correlates with gut health".to_string(),
            source: "Nature".to_string(),
        },
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["trustScore"], 60);
    assert_eq!(value["status"], "unverified");
    assert_eq!(value["scientificClaim"]["source"], "Nature");
}

#[test]
fn placeholder_matches_documented_shape() {
    let placeholder = ScientificClaim::placeholder();
    assert_eq!(placeholder.content, "Failed to generate scientific claim");
    assert_eq!(placeholder.source, "N/A");
}
