//! Skill-overlap helpers for listings: ranking, ATS keyword coverage, and the
//! mentor whose tags best overlap a job.

use serde::Serialize;

use crate::models::job::Job;
use crate::models::mentor::Mentor;
use crate::scoring::compatibility::{
    has_skill, lowercase_all, CompatibilityResult, CompatibilityScorer,
};

#[derive(Debug, Clone, Serialize)]
pub struct ScoredJob {
    pub job: Job,
    pub compatibility: CompatibilityResult,
}

/// Scores every job and sorts by descending score. Ties keep listing order.
pub fn rank_jobs<'a, I>(jobs: I, scorer: &dyn CompatibilityScorer, skills: &[String]) -> Vec<ScoredJob>
where
    I: IntoIterator<Item = &'a Job>,
{
    let mut ranked: Vec<ScoredJob> = jobs
        .into_iter()
        .map(|job| ScoredJob {
            compatibility: scorer.score(job, skills),
            job: job.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.compatibility.score.cmp(&a.compatibility.score));
    ranked
}

/// Which of the job's keywords (required then preferred) appear in the skill set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtsKeywords {
    pub found: Vec<String>,
    pub not_found: Vec<String>,
}

pub fn ats_keywords(job: &Job, skills: &[String]) -> AtsKeywords {
    let user_lower = lowercase_all(skills);
    let (found, not_found) = job
        .all_skills()
        .cloned()
        .partition(|k| has_skill(&user_lower, k));
    AtsKeywords { found, not_found }
}

/// Gap breakdown used when building an improvement plan for one listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillGap {
    pub matched: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_preferred: Vec<String>,
}

pub fn skill_gap(job: &Job, skills: &[String]) -> SkillGap {
    let user_lower = lowercase_all(skills);
    let missing = |list: &[String]| -> Vec<String> {
        list.iter()
            .filter(|s| !has_skill(&user_lower, s))
            .cloned()
            .collect()
    };
    SkillGap {
        matched: job
            .all_skills()
            .filter(|s| has_skill(&user_lower, s))
            .cloned()
            .collect(),
        missing_required: missing(&job.required_skills),
        missing_preferred: missing(&job.preferred_skills),
    }
}

/// Mentor with the most tags overlapping the job's skills (substring either way,
/// case-insensitive). Falls back to the first mentor when nothing overlaps.
pub fn best_mentor<'a>(job: &Job, mentors: &'a [Mentor]) -> Option<&'a Mentor> {
    let job_skills = lowercase_all(&job.all_skills().cloned().collect::<Vec<_>>());

    let mut best = mentors.first()?;
    let mut best_score = 0;
    for mentor in mentors {
        let score = mentor
            .tags
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| job_skills.iter().any(|s| s.contains(t.as_str()) || t.contains(s.as_str())))
            .count();
        if score > best_score {
            best_score = score;
            best = mentor;
        }
    }
    Some(best)
}
