//! Chat coach: offline replies, greetings and the per-listing improvement plan.

pub mod handlers;

use serde_json::Value;

use crate::catalog::seed::CANNED_COACH_REPLIES;
use crate::models::job::Job;
use crate::models::profile::UserProfile;
use crate::normalize::coaching::CoachingResponse;
use crate::normalize::resume::normalize_tailored_resume;
use crate::scoring::matching::SkillGap;

pub const DEFAULT_RESUME_FILE: &str = "Resume1.pdf";
const CLOSING_QUESTION: &str = "Would you like me to dive deeper into any of these areas?";

/// The canned reply whose quick-action prompt appears in `text`, ignoring case.
pub fn canned_reply(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    CANNED_COACH_REPLIES
        .iter()
        .find(|(prompt, _)| lower.contains(&prompt.to_lowercase()))
        .map(|(_, reply)| *reply)
}

/// General advice used when the coach is unreachable and no quick action matched.
pub fn generic_reply(profile: Option<&UserProfile>) -> String {
    let track = match profile {
        Some(p) if !p.career_track.is_empty() => format!(" as a {} candidate", p.career_track),
        Some(_) => " as a tech candidate".to_string(),
        None => String::new(),
    };
    format!(
        "That's a great question! Based on your profile{track}, I'd recommend:\n\n\
         1. **Review your target companies** - Research their tech stacks and recent projects\n\
         2. **Strengthen portfolio projects** - Focus on React with TypeScript\n\
         3. **Visit the Career Center** - Schedule a resume review and mock interview\n\
         4. **Network on Nole Network** - Connect with FSU alumni at your target companies\n\n\
         {CLOSING_QUESTION}"
    )
}

pub fn offline_reply(text: &str, profile: Option<&UserProfile>) -> String {
    canned_reply(text)
        .map(str::to_string)
        .unwrap_or_else(|| generic_reply(profile))
}

/// Opening message for an empty chat, tailored to a listing when one is given.
pub fn welcome(job: Option<&Job>, profile: Option<&UserProfile>) -> String {
    match job {
        Some(job) => format!(
            "I see you're looking at the **{}** position at {}. This is a great match for \
             your React and JavaScript skills! How can I help you prepare for this opportunity?",
            job.title, job.company
        ),
        None => {
            let name = profile
                .map(|p| p.first_name())
                .filter(|n| !n.is_empty())
                .map(|n| format!(", {n}"))
                .unwrap_or_default();
            format!(
                "Welcome{name}! I'm your AI career coach. I can help you find internships, \
                 improve your resume, build a preparation plan, or practice for interviews. \
                 What would you like to work on today?"
            )
        }
    }
}

pub fn improvement_greeting(job: &Job) -> String {
    format!(
        "I'll create a comprehensive improvement plan for the **{}** position at **{}**. \
         Analyzing your resume, identifying skill gaps, and building your action checklist now...",
        job.title, job.company
    )
}

/// The question sent to the coach when building an improvement plan.
pub fn improvement_question(job: &Job, skills: &[String]) -> String {
    format!(
        "I want to improve my match for the {} position at {}. My current skills are: {}. \
         The job requires: {}. Preferred skills: {}. Give me a detailed action plan with \
         short-term and long-term checklist items including courses, certifications, and \
         experience I should get.",
        job.title,
        job.company,
        skills.join(", "),
        job.required_skills.join(", "),
        job.preferred_skills.join(", ")
    )
}

/// Builds the improvement plan for `job` from whatever the resume and coach calls
/// returned. `None` means the call failed. When both failed a static action plan
/// is used instead.
pub fn improvement_plan(
    job: &Job,
    gap: &SkillGap,
    resume: Option<&Value>,
    coach: Option<&Value>,
) -> String {
    let mut parts = vec![format!(
        "Here's your personalized improvement plan for **{}** at **{}**:\n",
        job.title, job.company
    )];

    if !gap.matched.is_empty() {
        parts.push(format!(
            "**Your Matching Skills:** {}\n",
            gap.matched.join(", ")
        ));
    }

    if !gap.missing_required.is_empty() || !gap.missing_preferred.is_empty() {
        parts.push("**Skills Gap Checklist:**".to_string());
        if !gap.missing_required.is_empty() {
            parts.push("*Required skills you need:*".to_string());
            parts.extend(gap.missing_required.iter().map(|s| {
                format!("- [ ] Learn **{s}** (high priority - required for this role)")
            }));
        }
        if !gap.missing_preferred.is_empty() {
            parts.push("*Preferred skills to boost your score:*".to_string());
            parts.extend(
                gap.missing_preferred
                    .iter()
                    .map(|s| format!("- [ ] Add **{s}** to your skillset")),
            );
        }
        parts.push(String::new());
    }

    if let Some(analysis) = resume.and_then(normalize_tailored_resume) {
        if let Some(summary) = &analysis.summary {
            parts.push(format!("**Resume Analysis:** {summary}\n"));
        }
        if !analysis.improvement_suggestions.is_empty() {
            parts.push("**Resume Improvements:**".to_string());
            parts.extend(
                analysis
                    .improvement_suggestions
                    .iter()
                    .map(|s| format!("- [ ] {s}")),
            );
            parts.push(String::new());
        }
        if !analysis.matching_skills.is_empty() {
            parts.push(format!(
                "**Resume Strengths:** {}\n",
                analysis.matching_skills.join(", ")
            ));
        }
    }

    if let Some(coach) = coach {
        CoachingResponse::decode(coach).render_improvement(&mut parts);
    }

    if resume.is_none() && coach.is_none() {
        push_static_plan(&mut parts, job, gap);
    }

    parts.push(CLOSING_QUESTION.to_string());
    parts.join("\n")
}

fn push_static_plan(parts: &mut Vec<String>, job: &Job, gap: &SkillGap) {
    let first_two = |skills: &[String]| skills.iter().take(2).cloned().collect::<Vec<_>>().join(" and ");

    parts.push("**Recommended Action Plan:**".to_string());
    if let Some(first) = gap.missing_required.first() {
        parts.push(format!(
            "- [ ] Take an online course covering {}",
            first_two(&gap.missing_required)
        ));
        parts.push(format!("- [ ] Build a portfolio project using {first}"));
    }
    if !gap.missing_preferred.is_empty() {
        parts.push(format!(
            "- [ ] Explore tutorials for {}",
            first_two(&gap.missing_preferred)
        ));
    }
    parts.extend(
        [
            "- [ ] Tailor your resume to highlight relevant experience for this role",
            "- [ ] Add quantifiable results to your resume bullet points",
            "- [ ] Schedule a mock interview at the FSU Career Center",
            "",
            "**Long-Term Development:**",
            "- [ ] Seek a related project or coursework to build domain expertise",
            "- [ ] Attend FSU career fairs and networking events",
        ]
        .map(str::to_string),
    );
    parts.push(format!(
        "- [ ] Connect with alumni working at {} through Nole Network",
        job.company
    ));
    parts.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::jobs::seed_jobs;
    use crate::scoring::matching::skill_gap;
    use serde_json::json;

    fn demo_skills() -> Vec<String> {
        ["JavaScript", "React", "HTML/CSS", "Python", "Git", "SQL"]
            .map(str::to_string)
            .to_vec()
    }

    fn job_with_gaps() -> Job {
        seed_jobs()
            .into_iter()
            .find(|j| {
                let gap = skill_gap(j, &demo_skills());
                !gap.missing_required.is_empty() && !gap.missing_preferred.is_empty()
            })
            .unwrap()
    }

    #[test]
    fn test_canned_reply_matches_case_insensitively() {
        let reply = canned_reply("can you BUILD A 2-WEEK PLAN for me?").unwrap();
        assert!(reply.starts_with("Here's your personalized 2-week internship prep plan"));
        assert!(canned_reply("hello").is_none());
    }

    #[test]
    fn test_generic_reply_mentions_track() {
        let profile = UserProfile {
            career_track: "Data Science".into(),
            ..Default::default()
        };
        assert!(generic_reply(Some(&profile)).contains("profile as a Data Science candidate,"));
        assert!(generic_reply(Some(&UserProfile::default())).contains("as a tech candidate"));
        assert!(generic_reply(None).starts_with("That's a great question! Based on your profile, I'd"));
    }

    #[test]
    fn test_offline_reply_prefers_quick_action() {
        let reply = offline_reply("Mock interview questions", None);
        assert!(reply.starts_with("Here are practice questions"));
    }

    #[test]
    fn test_welcome_uses_first_name() {
        let profile = UserProfile {
            name: "Jordan Lee".into(),
            ..Default::default()
        };
        assert!(welcome(None, Some(&profile)).starts_with("Welcome, Jordan! I'm your AI career coach."));
        assert!(welcome(None, None).starts_with("Welcome! I'm"));
    }

    #[test]
    fn test_static_plan_when_both_calls_failed() {
        let job = job_with_gaps();
        let gap = skill_gap(&job, &demo_skills());
        let plan = improvement_plan(&job, &gap, None, None);
        assert!(plan.contains("**Skills Gap Checklist:**"));
        assert!(plan.contains("**Recommended Action Plan:**"));
        assert!(plan.contains(&format!(
            "- [ ] Build a portfolio project using {}",
            gap.missing_required[0]
        )));
        assert!(plan.contains(&format!(
            "- [ ] Connect with alumni working at {} through Nole Network",
            job.company
        )));
        assert!(plan.ends_with(CLOSING_QUESTION));
    }

    #[test]
    fn test_upstream_sections_replace_static_plan() {
        let job = job_with_gaps();
        let gap = skill_gap(&job, &demo_skills());
        let resume = json!({ "analysis": {
            "summary": "Strong front-end base",
            "improvement_suggestions": ["Quantify your impact"],
            "matching_skills": ["React", "Git"]
        }});
        let coach = json!({ "short_term_checklist": ["Finish a TypeScript course"] });
        let plan = improvement_plan(&job, &gap, Some(&resume), Some(&coach));

        assert!(plan.contains("**Resume Analysis:** Strong front-end base\n"));
        assert!(plan.contains("**Resume Improvements:**\n- [ ] Quantify your impact\n"));
        assert!(plan.contains("**Resume Strengths:** React, Git\n"));
        assert!(plan.contains("1. Finish a TypeScript course"));
        assert!(!plan.contains("**Recommended Action Plan:**"));
    }

    #[test]
    fn test_one_successful_call_suppresses_static_plan() {
        let job = job_with_gaps();
        let gap = skill_gap(&job, &demo_skills());
        let plan = improvement_plan(&job, &gap, None, Some(&json!({})));
        assert!(!plan.contains("**Recommended Action Plan:**"));
    }

    #[test]
    fn test_improvement_question_lists_skills() {
        let job = job_with_gaps();
        let question = improvement_question(&job, &demo_skills());
        assert!(question.contains("My current skills are: JavaScript, React, HTML/CSS, Python, Git, SQL."));
        assert!(question.contains(&format!("The job requires: {}.", job.required_skills.join(", "))));
    }
}
