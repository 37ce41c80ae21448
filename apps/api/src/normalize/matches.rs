//! Job-match responses from the upstream `/match` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{decode_or_default, lenient, lenient_text};

const DEFAULT_COMPANY: &str = "Matched Role";
const UNTITLED: &str = "Untitled role";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub job_title: String,
    pub company: String,
    pub match_score: Option<f64>,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchDigest {
    pub matches: Vec<MatchSummary>,
    pub total_matches: Option<u64>,
}

impl MatchDigest {
    /// Explains why remote matches are missing when the service counted some.
    pub fn notice(&self) -> Option<String> {
        match self.total_matches {
            Some(total) if total > 0 && self.matches.is_empty() => Some(format!(
                "AI found {total} matches. Showing local matches."
            )),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawMatch {
    #[serde(deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    job_title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    job_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    company: Option<String>,
    #[serde(deserialize_with = "lenient")]
    match_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    match_reasons: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    reasons: Option<Vec<String>>,
}

impl RawMatch {
    fn into_summary(self) -> MatchSummary {
        MatchSummary {
            job_title: self
                .title
                .or(self.job_title)
                .or(self.job_id)
                .unwrap_or_else(|| UNTITLED.to_string()),
            company: self.company.unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
            match_score: self.match_score.or(self.score),
            match_reasons: self.match_reasons.or(self.reasons).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawMatchResponse {
    #[serde(deserialize_with = "lenient")]
    top_match: Option<RawMatch>,
    #[serde(deserialize_with = "lenient")]
    matches: Vec<RawMatch>,
    #[serde(deserialize_with = "lenient")]
    total_matches: Option<u64>,
}

/// `top_match` (when present) leads, followed by `matches` in order.
pub fn normalize_matches(value: &Value) -> MatchDigest {
    let raw: RawMatchResponse = decode_or_default(value);
    let matches = raw
        .top_match
        .into_iter()
        .chain(raw.matches)
        .map(RawMatch::into_summary)
        .collect();
    MatchDigest {
        matches,
        total_matches: raw.total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_match_leads_and_keys_fall_back() {
        let digest = normalize_matches(&json!({
            "top_match": { "job_id": "AI_Security", "match_score": 91, "match_reasons": ["Python"] },
            "matches": [
                { "job_title": "Data Intern", "company": "DataStream", "score": 77, "reasons": ["SQL"] }
            ],
            "total_matches": 2
        }));
        assert_eq!(digest.matches.len(), 2);
        assert_eq!(digest.matches[0].job_title, "AI_Security");
        assert_eq!(digest.matches[0].company, "Matched Role");
        assert_eq!(digest.matches[0].match_score, Some(91.0));
        assert_eq!(digest.matches[1].job_title, "Data Intern");
        assert_eq!(digest.matches[1].match_score, Some(77.0));
        assert_eq!(digest.matches[1].match_reasons, vec!["SQL"]);
        assert!(digest.notice().is_none());
    }

    #[test]
    fn test_count_without_matches_yields_notice() {
        let digest = normalize_matches(&json!({ "total_matches": 5 }));
        assert!(digest.matches.is_empty());
        assert_eq!(
            digest.notice().as_deref(),
            Some("AI found 5 matches. Showing local matches.")
        );
    }

    #[test]
    fn test_unrecognised_payload_is_empty() {
        let digest = normalize_matches(&json!(["unexpected"]));
        assert_eq!(digest, MatchDigest::default());
        assert!(digest.notice().is_none());
    }
}
