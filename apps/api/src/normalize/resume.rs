//! Resume-tailoring responses from the upstream `/tailor-resume` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{decode_or_default, lenient, lenient_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailoredResume {
    #[serde(deserialize_with = "lenient")]
    pub match_score: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub improvement_suggestions: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub matching_skills: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub relevant_experiences: Vec<String>,
}

/// Reads the nested `analysis` object when present, otherwise the top level.
/// A top-level `match_score` wins over the nested one. Returns `None` for
/// payloads that are not JSON objects.
pub fn normalize_tailored_resume(value: &Value) -> Option<TailoredResume> {
    if !value.is_object() {
        return None;
    }
    let analysis = value
        .get("analysis")
        .filter(|v| v.is_object())
        .unwrap_or(value);

    let mut resume: TailoredResume = decode_or_default(analysis);
    if let Some(score) = value.get("match_score").and_then(Value::as_f64) {
        resume.match_score = Some(score);
    }
    Some(resume)
}
