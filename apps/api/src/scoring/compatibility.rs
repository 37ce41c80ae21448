//! Compatibility scoring: a pluggable, trait-based scorer that measures a student's
//! skills against a job's required and preferred skill lists.
//!
//! Default: `HeuristicScorer` (fixed arithmetic, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn CompatibilityScorer>`.

use serde::{Deserialize, Serialize};

use crate::models::job::Job;

const BASE_SCORE: i32 = 50;
const REQUIRED_MATCH_POINTS: i32 = 5;
const REQUIRED_MATCH_CAP: i32 = 30;
const PREFERRED_MATCH_POINTS: i32 = 3;
const PREFERRED_MATCH_CAP: i32 = 15;
const MISSING_REQUIRED_PENALTY: i32 = 5;
const MISSING_REQUIRED_CAP: i32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Derived on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, job: &Job, user_skills: &[String]) -> CompatibilityResult;
}

/// Base 50, +5 per matched required (max +30), +3 per matched preferred
/// (max +15), −5 per missing required (max −30), clamped to 0–100.
pub struct HeuristicScorer;

impl CompatibilityScorer for HeuristicScorer {
    fn score(&self, job: &Job, user_skills: &[String]) -> CompatibilityResult {
        score_skills(&job.required_skills, &job.preferred_skills, user_skills)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive membership test against a lowercased skill set.
pub(crate) fn has_skill(user_lower: &[String], skill: &str) -> bool {
    let skill = skill.to_lowercase();
    user_lower.iter().any(|s| *s == skill)
}

pub(crate) fn lowercase_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Each entry of `required`/`preferred` is matched on its own, so duplicates in the
/// job's lists are counted once per entry.
pub fn score_skills(
    required: &[String],
    preferred: &[String],
    user_skills: &[String],
) -> CompatibilityResult {
    let user_lower = lowercase_all(user_skills);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|s| has_skill(&user_lower, s));

    let matched_preferred: Vec<String> = preferred
        .iter()
        .filter(|s| has_skill(&user_lower, s))
        .cloned()
        .collect();

    let bonus = |count: usize, points: i32, cap: i32| -> i32 {
        (count.min(i32::MAX as usize) as i32)
            .saturating_mul(points)
            .min(cap)
    };

    let raw = BASE_SCORE
        + bonus(matched_skills.len(), REQUIRED_MATCH_POINTS, REQUIRED_MATCH_CAP)
        + bonus(matched_preferred.len(), PREFERRED_MATCH_POINTS, PREFERRED_MATCH_CAP)
        - bonus(missing_skills.len(), MISSING_REQUIRED_PENALTY, MISSING_REQUIRED_CAP);
    let score = raw.clamp(0, 100) as u32;

    let recommendations = build_recommendations(&matched_skills, &missing_skills, required.len());

    CompatibilityResult {
        score,
        matched_skills,
        missing_skills,
        matched_preferred,
        recommendations,
    }
}

fn build_recommendations(matched: &[String], missing: &[String], required_total: usize) -> Vec<String> {
    let mut recommendations = Vec::new();
    if let Some(first) = missing.first() {
        recommendations.push(format!("Learn {first} through an online course or tutorial"));
    }
    if let Some(second) = missing.get(1) {
        recommendations.push(format!("Add a project using {second} to your portfolio"));
    }
    recommendations.push("Tailor your resume keywords to this job description".to_string());
    if matched.len() < required_total {
        recommendations
            .push("Schedule a Career Center advising session to discuss skill gaps".to_string());
    }
    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
