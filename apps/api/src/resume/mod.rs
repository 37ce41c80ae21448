//! Resume tools: the merged AI analysis, the growth advisor and the plain-text
//! tailored resume.

pub mod handlers;

use serde::Serialize;
use serde_json::Value;

use crate::models::job::Job;
use crate::models::profile::StudentProfile;
use crate::normalize::coaching::{CoachingResponse, FALLBACK_REPLY, ROADMAP_HEADER};
use crate::normalize::gap::GapAnalysis;
use crate::normalize::resume::normalize_tailored_resume;

pub const ANALYSIS_QUESTION: &str = "What courses, certifications, and long-term steps should I take to improve my resume and career prospects?";
pub const DEFAULT_TARGET_JOB: &str = "AI_Security";

const DEFAULT_SUMMARY: &str = "Analysis complete with long-term growth recommendations.";
const DEFAULT_COURSES: [&str; 3] = [
    "COP 4530 - Data Structures & Algorithms",
    "CIS 4360 - Computer Security Fundamentals",
    "CAP 4630 - Intro to Artificial Intelligence",
];
const DEFAULT_CERTIFICATIONS: [&str; 3] = [
    "AWS Cloud Practitioner",
    "Google Data Analytics Certificate",
    "Meta Front-End Developer Certificate",
];
const DEFAULT_TIPS: [&str; 4] = [
    "Build 3-5 portfolio projects showcasing different tech stacks",
    "Contribute to open-source projects on GitHub",
    "Attend FSU career fairs and networking events each semester",
    "Complete at least one internship before senior year",
];

/// Coach replies shorter than this are treated as too thin to show.
const MIN_ADVISOR_REPLY_LEN: usize = 100;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn or_default(list: Vec<String>, default: &[&str]) -> Vec<String> {
    if list.is_empty() {
        strings(default)
    } else {
        list
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AI analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeAnalysis {
    pub match_score: Option<f64>,
    pub summary: String,
    pub improvement_suggestions: Vec<String>,
    pub matching_skills: Vec<String>,
    pub relevant_experiences: Vec<String>,
    pub recommended_courses: Vec<String>,
    pub recommended_certifications: Vec<String>,
    pub long_term_tips: Vec<String>,
}

/// Merges the tailor-resume and coach payloads (`None` when a call failed).
/// Without a resume payload, every coach section that is empty is replaced by
/// a static recommendation list.
pub fn merge_analysis(resume: Option<&Value>, coach: Option<&Value>) -> ResumeAnalysis {
    let coach = coach.map(CoachingResponse::decode);
    let plan = coach.as_ref().and_then(CoachingResponse::plan);
    let courses = plan.map(|p| p.courses().to_vec()).unwrap_or_default();
    let certifications = plan.map(|p| p.certifications().to_vec()).unwrap_or_default();
    let tips = coach
        .as_ref()
        .map(CoachingResponse::long_term_tips)
        .unwrap_or_default();

    match resume.and_then(normalize_tailored_resume) {
        Some(resume) => ResumeAnalysis {
            match_score: resume.match_score,
            summary: resume.summary.unwrap_or_default(),
            improvement_suggestions: resume.improvement_suggestions,
            matching_skills: resume.matching_skills,
            relevant_experiences: resume.relevant_experiences,
            recommended_courses: courses,
            recommended_certifications: certifications,
            long_term_tips: tips,
        },
        None => ResumeAnalysis {
            summary: DEFAULT_SUMMARY.to_string(),
            recommended_courses: or_default(courses, &DEFAULT_COURSES),
            recommended_certifications: or_default(certifications, &DEFAULT_CERTIFICATIONS),
            long_term_tips: or_default(tips, &DEFAULT_TIPS),
            ..Default::default()
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Growth advisor
// ────────────────────────────────────────────────────────────────────────────

/// Appends the student's gap analysis to a question so the coach can tailor it.
pub fn enriched_question(message: &str, gap: Option<&GapAnalysis>) -> String {
    let Some(gap) = gap.filter(|g| !g.is_empty()) else {
        return message.to_string();
    };
    let mut context = Vec::new();
    if !gap.gaps.is_empty() {
        context.push(format!("My skill gaps are: {}.", gap.gaps.join(", ")));
    }
    if !gap.strengths.is_empty() {
        context.push(format!("My current strengths are: {}.", gap.strengths.join(", ")));
    }
    if !gap.summary.is_empty() {
        context.push(format!("Assessment: {}", gap.summary));
    }
    format!(
        "{message} (Context from my skill gap analysis: {})",
        context.join(" ")
    )
}

/// Whether a coach payload is worth showing as advisor output.
pub fn usable_advice(data: &Value) -> Option<String> {
    let response = CoachingResponse::decode(data);
    if !response.has_plan() {
        return None;
    }
    let text = response.render();
    let substantive = text.len() > MIN_ADVISOR_REPLY_LEN && !text.contains(FALLBACK_REPLY);
    substantive.then_some(text)
}

/// Offline advisor reply keyed on the topic of `question`, built from the gap
/// analysis (or the static fallback analysis when none is available).
pub fn gap_based_reply(question: &str, gap: Option<&GapAnalysis>) -> String {
    let fallback = GapAnalysis::fallback();
    let gaps = match gap {
        Some(g) if !g.gaps.is_empty() => g.gaps.as_slice(),
        _ => fallback.gaps.as_slice(),
    };
    let strengths = match gap {
        Some(g) if !g.strengths.is_empty() => g.strengths.as_slice(),
        _ => fallback.strengths.as_slice(),
    };
    // Short lists borrow from the static analysis rather than printing blanks.
    let gap_at = |i: usize| gaps.get(i).or_else(|| fallback.gaps.get(i)).map_or("", String::as_str);
    let strength_at =
        |i: usize| strengths.get(i).or_else(|| fallback.strengths.get(i)).map_or("", String::as_str);
    let first = |list: &[String], n: usize, sep: &str| {
        list.iter().take(n).cloned().collect::<Vec<_>>().join(sep)
    };

    let q = question.to_lowercase();
    let lines: Vec<String> = if q.contains("certification") {
        vec![
            ROADMAP_HEADER.to_string(),
            "**Certifications to Pursue**".to_string(),
            format!(
                "Based on your skill gaps ({}), these certifications would strengthen your profile:",
                first(gaps, 3, ", ")
            ),
            "- AWS Cloud Practitioner (addresses cloud services gap)".to_string(),
            "- Meta Front-End Developer Certificate (builds on your React strength)".to_string(),
            "- Google IT Automation with Python (leverages your Python skills)".to_string(),
            "- CompTIA Security+ (valuable for any tech role)".to_string(),
            String::new(),
            "**Why These Matter**".to_string(),
            format!(
                "Your current strengths in {} give you a solid foundation.",
                first(strengths, 3, ", ")
            ),
            format!(
                "Adding certifications in {} will make you more competitive for full-stack and cloud-focused roles.",
                first(gaps, 2, " and ")
            ),
        ]
    } else if q.contains("course") || q.contains("fsu") {
        vec![
            ROADMAP_HEADER.to_string(),
            "**Recommended FSU Courses**".to_string(),
            format!("Based on your gaps in {}:", first(gaps, 3, ", ")),
            "- COP 4710 - Database Systems (strengthen SQL and data modeling)".to_string(),
            "- CEN 4021 - Software Engineering II (system design, architecture patterns)".to_string(),
            "- CDA 3101 - Computer Organization (deepen systems understanding)".to_string(),
            "- CIS 4360 - Intro to Computer Security (growing field, always in demand)".to_string(),
            "- CAP 4630 - Intro to AI (machine learning fundamentals)".to_string(),
            String::new(),
            "**Course Strategy**".to_string(),
            format!(
                "Since you're strong in {}, focus on courses that complement those skills with {} knowledge.",
                first(strengths, 2, " and "),
                first(gaps, 2, " and ")
            ),
        ]
    } else if q.contains("internship") || q.contains("prepare") {
        vec![
            ROADMAP_HEADER.to_string(),
            "**Internship Strategy**".to_string(),
            format!(
                "Your strengths in {} make you competitive for these types of roles:",
                first(strengths, 3, ", ")
            ),
            String::new(),
            "Target Companies: Google, Microsoft, Amazon, Meta, local Tallahassee tech firms".to_string(),
            "When to Apply: August-October for summer internships (applications open early!)".to_string(),
            String::new(),
            "**Application Tips:**".to_string(),
            format!(
                "- Build a portfolio project using {} and {} to showcase your skills",
                strength_at(0),
                strength_at(1)
            ),
            format!(
                "- Address your {} gap by completing an online course before interviews",
                gap_at(0)
            ),
            "- Practice LeetCode problems (aim for 100+ before interview season)".to_string(),
            "- Attend FSU Career Center mock interview sessions".to_string(),
            "- Network at FSU Hack-a-thon and ACM chapter events".to_string(),
            String::new(),
            "**Short-Term Actions (This Week/Month)**\n".to_string(),
            format!("1. **Start learning {}**", gap_at(0)),
            "   Timeline: This week".to_string(),
            "   Why: Most job postings require it".to_string(),
            String::new(),
            format!(
                "2. **Build a demo project combining {} with {}**",
                strength_at(0),
                gap_at(0)
            ),
            "   Timeline: 2-3 weeks".to_string(),
            "   Why: Demonstrates adaptability to employers".to_string(),
        ]
    } else if q.contains("skill") {
        let mut lines = vec![
            ROADMAP_HEADER.to_string(),
            "**Skills to Learn Next**".to_string(),
            "Based on your gap analysis, prioritize these skills:".to_string(),
            String::new(),
        ];
        lines.extend(gaps.iter().enumerate().map(|(i, g)| {
            format!("{}. **{g}** - High demand in job postings you'd match with", i + 1)
        }));
        lines.extend([
            String::new(),
            "**Learning Path**".to_string(),
            format!(
                "You're already strong in {}. Build on that foundation:",
                strengths.join(", ")
            ),
            String::new(),
            format!(
                "1. **{}** - Start here, it pairs well with your {} experience",
                gap_at(0),
                strength_at(0)
            ),
            format!("2. **{}** - Essential for backend/full-stack roles", gap_at(1)),
            format!(
                "3. **{}** - Will set you apart from other candidates",
                gaps.get(2).map_or("Testing", String::as_str)
            ),
            String::new(),
            "**Recommended Resources**".to_string(),
            "- freeCodeCamp (free, project-based learning)".to_string(),
            "- FSU ACM workshops and study groups".to_string(),
            "- Build personal projects that combine new + existing skills".to_string(),
        ]);
        lines
    } else {
        vec![
            ROADMAP_HEADER.to_string(),
            "**Short-Term Actions (This Week/Month)**\n".to_string(),
            format!("1. **Address your top skill gap: {}**", gap_at(0)),
            "   Timeline: Start this week".to_string(),
            "   Why: This is the most requested skill missing from your profile".to_string(),
            String::new(),
            format!("2. **Strengthen {} knowledge**", gap_at(1)),
            "   Timeline: Over the next month".to_string(),
            "   Why: Pairs well with your existing strengths".to_string(),
            String::new(),
            "**Long-Term Milestones**\n".to_string(),
            format!(
                "1. **Build a full-stack project using {} + {}**",
                strength_at(0),
                gap_at(0)
            ),
            "   Timeline: 1-2 months".to_string(),
            String::new(),
            "2. **Earn a relevant industry certification**".to_string(),
            "   Timeline: 3-6 months".to_string(),
            String::new(),
            format!("**Your Strengths:** {}", strengths.join(", ")),
            format!("**Areas to Develop:** {}", gaps.join(", ")),
            String::new(),
            "Would you like specific advice on certifications, FSU courses, internship prep, or skills to learn?".to_string(),
        ]
    };
    lines.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Tailored resume download
// ────────────────────────────────────────────────────────────────────────────

const RESUME_BULLETS: [&str; 3] = [
    "Developed a responsive web application using React and Node.js that enabled 50+ students to track study group schedules, improving group coordination by 40%",
    "Served as an active member of Women in CS, organizing 3 technical workshops attended by 80+ students and mentoring 5 incoming freshmen in introductory programming courses",
    "Managed front-desk operations at the FSU Student Union, coordinating schedules for 15+ staff members and resolving 20+ daily student inquiries with a 95% satisfaction rate",
];

const RESUME_PROJECTS: [&str; 3] = [
    "Developed a responsive web application using React and Node.js for FSU study group coordination",
    "Built a Python-based data analysis tool processing 10,000+ records for academic research",
    "Created a mobile-first portfolio website with modern CSS animations and accessibility features",
];

/// Download name, e.g. `Maya_Rodriguez_Tailored_Resume_ShopNest.txt`.
pub fn resume_filename(student: &StudentProfile, job: Option<&Job>) -> String {
    let underscored = |s: &str| s.split_whitespace().collect::<Vec<_>>().join("_");
    let suffix = job
        .map(|j| format!("_{}", underscored(&j.company)))
        .unwrap_or_default();
    format!("{}_Tailored_Resume{suffix}.txt", underscored(&student.name))
}

/// Plain-text resume with the objective aimed at `job` (or a general search).
pub fn tailored_resume_text(
    student: &StudentProfile,
    job: Option<&Job>,
    planned_courses: &[String],
    certifications: &[String],
) -> String {
    let target = match job {
        Some(job) => format!("{} at {}", job.title, job.company),
        None => "General".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}\nTallahassee, FL | maya.rodriguez@fsu.edu | (850) 555-0123 | linkedin.com/in/mayarodriguez\n\n",
        student.name
    ));
    out.push_str("OBJECTIVE\n");
    out.push_str(&format!(
        "Motivated {} {} at {} seeking {target} to apply strong programming skills and passion for technology in a professional setting.\n\n",
        student.major, student.year.to_lowercase(), student.school
    ));
    out.push_str("EDUCATION\n");
    out.push_str(&format!("{}, Tallahassee, FL\n", student.school));
    out.push_str(&format!(
        "Bachelor of Science in {} | Expected May 2027 | GPA: 3.7\n",
        student.major
    ));
    out.push_str("Relevant Coursework: Data Structures, Algorithms, Database Systems, Software Engineering, Web Development\n\n");
    out.push_str("SKILLS\n");
    out.push_str("Languages: JavaScript, Python, HTML/CSS, SQL, Java\n");
    out.push_str("Frameworks & Tools: React, Node.js, Git, VS Code, MongoDB\n");
    out.push_str("Soft Skills: Problem-solving, Team collaboration, Technical communication\n\n");
    out.push_str("EXPERIENCE\n");
    for bullet in RESUME_BULLETS {
        out.push_str(&format!("• {bullet}\n"));
    }
    out.push_str("\nPROJECTS\n");
    for project in RESUME_PROJECTS {
        out.push_str(&format!("• {project}\n"));
    }
    if !planned_courses.is_empty() {
        out.push_str("\nPLANNED COURSEWORK\n");
        for course in planned_courses {
            out.push_str(&format!("• {course}\n"));
        }
    }
    if !certifications.is_empty() {
        out.push_str("\nCERTIFICATIONS IN PROGRESS\n");
        for cert in certifications {
            out.push_str(&format!("• {cert}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use serde_json::json;

    #[test]
    fn test_resume_payload_drives_analysis() {
        let resume = json!({ "match_score": 74, "analysis": {
            "summary": "Solid fit",
            "improvement_suggestions": ["Add metrics"],
            "matching_skills": ["Python"]
        }});
        let coach = json!({ "coaching_plan": {
            "recommended_courses": ["CEN 4020"],
            "long_term_checklist": [{ "milestone": "Ship a portfolio", "timeline": "6 months" }]
        }});
        let analysis = merge_analysis(Some(&resume), Some(&coach));
        assert_eq!(analysis.match_score, Some(74.0));
        assert_eq!(analysis.summary, "Solid fit");
        assert_eq!(analysis.recommended_courses, vec!["CEN 4020"]);
        assert!(analysis.recommended_certifications.is_empty());
        assert_eq!(analysis.long_term_tips, vec!["Ship a portfolio (6 months)"]);
    }

    #[test]
    fn test_missing_resume_uses_static_recommendations() {
        let analysis = merge_analysis(None, None);
        assert_eq!(analysis.summary, DEFAULT_SUMMARY);
        assert_eq!(analysis.recommended_courses.len(), 3);
        assert_eq!(analysis.recommended_certifications[0], "AWS Cloud Practitioner");
        assert_eq!(analysis.long_term_tips.len(), 4);
        assert!(analysis.match_score.is_none());
    }

    #[test]
    fn test_missing_resume_keeps_coach_sections() {
        let coach = json!({ "recommended_certifications": ["CompTIA Security+"] });
        let analysis = merge_analysis(None, Some(&coach));
        assert_eq!(analysis.recommended_certifications, vec!["CompTIA Security+"]);
        assert_eq!(analysis.recommended_courses.len(), 3);
    }

    #[test]
    fn test_enriched_question_appends_gap_context() {
        let gap = GapAnalysis {
            summary: "Close".into(),
            gaps: vec!["Docker".into()],
            strengths: vec!["React".into()],
        };
        assert_eq!(
            enriched_question("What next?", Some(&gap)),
            "What next? (Context from my skill gap analysis: My skill gaps are: Docker. My current strengths are: React. Assessment: Close)"
        );
        assert_eq!(enriched_question("What next?", None), "What next?");
    }

    #[test]
    fn test_usable_advice_rejects_thin_or_unstructured_replies() {
        assert!(usable_advice(&json!({ "response": "x".repeat(300) })).is_none());
        assert!(usable_advice(&json!({ "coaching_plan": {} })).is_none());
        let rich = json!({ "short_term_checklist": [
            "Finish the TypeScript handbook and rebuild one class project with it",
            "Deploy the project to a cloud provider and write a short case study"
        ]});
        assert!(usable_advice(&rich).unwrap().starts_with(ROADMAP_HEADER));
    }

    #[test]
    fn test_gap_reply_topics() {
        let reply = gap_based_reply("Which certifications?", None);
        assert!(reply.contains("Based on your skill gaps (TypeScript, REST APIs, Cloud Services)"));

        let gap = GapAnalysis {
            summary: String::new(),
            gaps: vec!["Rust".into()],
            strengths: vec!["Go".into()],
        };
        let reply = gap_based_reply("what skills next", Some(&gap));
        assert!(reply.contains("1. **Rust** - High demand"));
        assert!(reply.contains("3. **Testing** - Will set you apart"));

        let reply = gap_based_reply("hello", Some(&gap));
        assert!(reply.contains("**Areas to Develop:** Rust"));
        assert!(reply.contains("2. **Strengthen REST APIs knowledge**"));
    }

    #[test]
    fn test_tailored_resume_mentions_target() {
        let catalog = Catalog::seeded();
        let job = catalog.job(8);
        let text = tailored_resume_text(catalog.student(), job, &[], &["AWS Cloud Practitioner".into()]);
        assert!(text.starts_with("Maya Rodriguez\n"));
        assert!(text.contains(&format!("seeking {} at {}", job.unwrap().title, job.unwrap().company)));
        assert!(text.contains("CERTIFICATIONS IN PROGRESS\n• AWS Cloud Practitioner\n"));
        assert!(!text.contains("PLANNED COURSEWORK"));
        assert_eq!(
            resume_filename(catalog.student(), job),
            format!("Maya_Rodriguez_Tailored_Resume_{}.txt", job.unwrap().company.replace(' ', "_"))
        );
    }
}
