//! Prompt builders for the generative-text provider. Every prompt demands
//! plain JSON so the extractor has a fighting chance.

/// Prompt for regenerating the full influencer catalog.
pub fn refresh_catalog(count: usize) -> String {
    format!(
        "Generate a list of {count} health influencers with their details in JSON format. \
Each influencer should include: \
\"name\", \
\"category\" (Nutrition/Fitness/Mental Health/Medical), \
\"trustScore\" (0-100), \
\"followersCount\", \
\"verifiedClaims\" (number of verified claims), \
and \"claims\" (an array of at least 5 of their most popular claims, both verified and unverified). \
Each claim in the \"claims\" array should have: \
\"content\" (the claim itself), \
\"status\" (\"verified\" or \"unverified\"), \
and \"trustScore\" (0-100). \
Sort influencers by trustScore in descending order. \
ONLY return valid JSON with no explanation or markdown formatting."
    )
}

/// Prompt for claims by a named influencer on a topic.
pub fn search_claims(influencer_name: &str, topic: &str) -> String {
    format!(
        "Find claims made by {influencer_name} related to {topic}. \
Return the result as a JSON array where each entry contains: \
\"content\" (the claim itself), \
\"status\" (\"verified\" or \"unverified\"), \
and \"trustScore\" (0-100). \
Ensure the response is only valid JSON without any extra text or markdown formatting."
    )
}

/// First-stage research prompt for N claims on a topic within a date range.
pub fn research_claims(
    count: u32,
    topic: Option<&str>,
    influencer: Option<&str>,
    date_range: &str,
) -> String {
    let topic = topic.unwrap_or("health");
    let by_influencer = influencer
        .map(|name| format!(" by {name}"))
        .unwrap_or_default();
    format!(
        "Find {count} claims made about {topic}{by_influencer} within the {date_range} time period. \
Return as a valid JSON array with fields: content, status (verified/unverified), trustScore. \
Ensure the output is plain JSON without any extra text or formatting."
    )
}

/// Second-stage prompt for a scientifically verified claim backed by the
/// caller's journal list.
pub fn scientific_claim(claim_content: &str, journals: &[String]) -> String {
    format!(
        "Provide a scientifically verified claim related to: \"{claim_content}\" \
using sources from: {}. \
Return the response as pure JSON in this format: \
{{ \"content\": \"scientific claim\", \"source\": \"journal/source name\" }}. \
Ensure the response contains only valid JSON without extra text or formatting.",
        journals.join(", ")
    )
}
