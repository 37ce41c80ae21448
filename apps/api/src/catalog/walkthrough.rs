//! The guided "how your plan was built" walkthrough. Step outputs are computed
//! from the live catalog so counts and scores never drift from the data.

use serde::Serialize;

use crate::catalog::{locations, Catalog};
use crate::models::checklist::{ChecklistCategory, ChecklistItem};
use crate::models::job::JobSource;
use crate::scoring::compatibility::CompatibilityScorer;

/// Listings featured in the ranking step, by id.
const FEATURED_JOB_IDS: [u32; 3] = [1, 2, 11];

#[derive(Debug, Clone, Serialize)]
pub struct WalkthroughStep {
    pub title: &'static str,
    pub description: &'static str,
    pub output: String,
}

pub fn walkthrough(
    catalog: &Catalog,
    scorer: &dyn CompatibilityScorer,
    checklist: &[ChecklistItem],
) -> Vec<WalkthroughStep> {
    let student = catalog.student();
    let jobs = catalog.jobs(false);

    let profile = format!(
        "Name: {}\nSchool: {}\nMajor: {} ({})\nSkills: {}\nInterests: {}\nFocus Track: {}",
        student.name,
        student.school,
        student.major,
        student.year,
        student.skills.join(", "),
        student.interests.join(", "),
        student.focus_track
    );

    let from = |source: JobSource| jobs.iter().filter(|j| j.source == source).count();
    let aggregated = format!(
        "Found {} internship listings:\n- {} from Web sources\n- {} from Nole Network\n\nLocations: {}",
        jobs.len(),
        from(JobSource::Web),
        from(JobSource::NoleNetwork),
        locations(jobs).join(", ")
    );

    let featured: Vec<String> = FEATURED_JOB_IDS
        .iter()
        .filter_map(|id| catalog.job(*id))
        .enumerate()
        .map(|(i, job)| {
            format!(
                "{}. {} at {} - Score: {}%",
                i + 1,
                job.title,
                job.company,
                scorer.score(job, &student.skills).score
            )
        })
        .collect();
    let ranked = format!(
        "Top 3 Matches:\n{}\n\nScoring: Base 50 + matched required skills (+5 ea) + matched preferred (+3 ea) - missing requirements (-5 ea)",
        featured.join("\n")
    );

    let per_category: Vec<String> = ChecklistCategory::ALL
        .iter()
        .map(|category| {
            let count = checklist.iter().filter(|i| i.category == *category).count();
            format!("- {}: {count} tasks", category.label())
        })
        .collect();
    let checklist_plan = format!(
        "Generated {} checklist items:\n{}",
        checklist.len(),
        per_category.join("\n")
    );

    let mentor_lines: Vec<String> = catalog
        .mentors()
        .iter()
        .map(|m| format!("{} ({}, {})", m.name, m.company, m.role))
        .collect();
    let mentors = format!(
        "Matched {} alumni mentors:\n- {}\n\nOutreach messages drafted for each mentor.\nTip: Personalize the message with a specific question about their role.",
        mentor_lines.len(),
        mentor_lines.join("\n- ")
    );

    vec![
        WalkthroughStep {
            title: "Collected Your Profile",
            description: "Gathered your academic info, skills, experience, and career interests to build a personalized coaching plan.",
            output: profile,
        },
        WalkthroughStep {
            title: "Aggregated Jobs (Web + Nole Network)",
            description: "Searched across external job boards and FSU's Nole Network to compile relevant internship listings.",
            output: aggregated,
        },
        WalkthroughStep {
            title: "Ranked Matches with Compatibility Scoring",
            description: "Compared your skills against each job's requirements and preferences to generate compatibility scores.",
            output: ranked,
        },
        WalkthroughStep {
            title: "Identified Skill Gaps",
            description: "Analyzed the gap between your current skills and what top-matching employers are looking for.",
            output: "Key skill gaps across top matches:\n- TypeScript (requested by 4 of top 5 matches)\n- Docker (requested by 3 roles)\n- Node.js (required for full-stack positions)\n- AWS/Cloud basics (growing demand)\n\nRecommended learning order: TypeScript > Node.js > Docker > Cloud".to_string(),
        },
        WalkthroughStep {
            title: "Generated Checklist Plan",
            description: "Created a structured action plan with prioritized tasks across skills, resume, networking, and applications.",
            output: checklist_plan,
        },
        WalkthroughStep {
            title: "Tailored Resume & ATS Improvements",
            description: "Scanned your resume against ATS systems and generated optimized bullet points for target roles.",
            output: "ATS Score: 68/100\n\nMissing keywords: TypeScript, responsive design, agile, REST APIs, unit testing\n\nSuggested improvements:\n- Add quantified achievements to project descriptions\n- Include relevant coursework section\n- Optimize formatting for ATS parsing\n- Add a skills section matching job posting keywords".to_string(),
        },
        WalkthroughStep {
            title: "Suggested Mentors + Outreach Drafts",
            description: "Matched you with FSU alumni mentors based on your interests and career goals, with ready-to-send messages.",
            output: mentors,
        },
    ]
}
