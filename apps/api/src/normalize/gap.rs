//! Skill-gap analysis responses from the upstream `/analyze-gap` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{decode_or_default, lenient, lenient_string, lenient_text};

/// Display-ready gap analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapAnalysis {
    pub summary: String,
    pub gaps: Vec<String>,
    pub strengths: Vec<String>,
}

impl GapAnalysis {
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty() && self.strengths.is_empty()
    }

    /// Shown when the service is unreachable or reports nothing usable.
    pub fn fallback() -> Self {
        let strings =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            summary: String::new(),
            gaps: strings(&["TypeScript", "REST APIs", "Cloud Services", "System Design", "CI/CD"]),
            strengths: strings(&["JavaScript", "React", "Python", "SQL", "Git"]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SkillGapEntry {
    Name(String),
    Named(NamedGap),
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct NamedGap {
    #[serde(deserialize_with = "lenient_text")]
    skill: Option<String>,
}

impl SkillGapEntry {
    fn skill(&self) -> Option<&str> {
        match self {
            SkillGapEntry::Name(name) => Some(name.as_str()),
            SkillGapEntry::Named(gap) => gap.skill.as_deref(),
            SkillGapEntry::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct GapFields {
    #[serde(deserialize_with = "lenient")]
    missing_skills: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    skill_gaps: Vec<SkillGapEntry>,
    #[serde(deserialize_with = "lenient")]
    current_strengths: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    strong_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    summary: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    overall_assessment: Option<String>,
}

impl GapFields {
    fn gap_names(&self) -> impl Iterator<Item = String> + '_ {
        self.skill_gaps
            .iter()
            .filter_map(SkillGapEntry::skill)
            .map(str::to_string)
    }
}

/// Normalizes a gap-analysis payload. A nested `gap_analysis` object is read in
/// full; top-level fields only fill gaps or strengths that are still empty.
pub fn normalize_gap_analysis(value: &Value) -> GapAnalysis {
    let mut analysis = GapAnalysis::default();

    if let Some(nested) = value.get("gap_analysis").filter(|v| v.is_object()) {
        let fields: GapFields = decode_or_default(nested);
        analysis.gaps.extend(fields.missing_skills.iter().cloned());
        analysis.gaps.extend(fields.gap_names());
        analysis.strengths.extend(fields.current_strengths.iter().cloned());
        analysis.strengths.extend(fields.strong_skills.iter().cloned());
        if let Some(summary) = fields.overall_assessment.or(fields.summary) {
            analysis.summary = summary;
        }
    }

    let top: GapFields = decode_or_default(value);
    if analysis.gaps.is_empty() {
        analysis.gaps.extend(top.missing_skills.iter().cloned());
    }
    if analysis.gaps.is_empty() {
        analysis.gaps.extend(top.gap_names());
    }
    if analysis.strengths.is_empty() {
        analysis.strengths = top.current_strengths;
    }

    analysis
}
