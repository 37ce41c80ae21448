//! Seed data: the demo student, the starter checklist, the mentor directory and
//! the canned coach replies used when the upstream coach is unreachable.

use crate::models::checklist::{ChecklistCategory, ChecklistItem};
use crate::models::mentor::Mentor;
use crate::models::profile::StudentProfile;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_student() -> StudentProfile {
    StudentProfile {
        name: "Maya Rodriguez".to_string(),
        school: "Florida State University".to_string(),
        major: "Computer Science".to_string(),
        year: "Junior".to_string(),
        interests: strings(&["Front-End / Full-Stack internships", "AI-adjacent products"]),
        skills: strings(&["JavaScript", "React", "HTML/CSS", "Python", "Git", "SQL"]),
        experience: strings(&[
            "Women in CS club member",
            "1 class project (web app)",
            "Part-time campus job",
        ]),
        focus_track: "Front-End SWE Intern".to_string(),
    }
}

pub fn seed_checklist() -> Vec<ChecklistItem> {
    use ChecklistCategory::*;

    let seed: [(&str, ChecklistCategory, bool, bool); 15] = [
        ("Tailor resume to Front-End Intern roles", Resume, false, false),
        ("Add 2 React projects to portfolio", Skills, true, false),
        ("Practice 10 JS interview questions", InterviewPrep, false, false),
        ("Complete a SQL basics module", Skills, false, true),
        ("Reach out to 2 alumni mentors", Networking, false, false),
        ("Apply to 5 internships this week", Applications, false, false),
        ("Update LinkedIn headline and summary", Networking, true, false),
        ("Schedule a Career Center resume review", Resume, false, true),
        ("Build a personal portfolio website", Skills, false, false),
        ("Practice STAR method for behavioral questions", InterviewPrep, false, true),
        ("Attend the Spring Career Fair", Networking, false, false),
        ("Review company research for top 3 matches", Applications, false, false),
        ("Learn TypeScript fundamentals", Skills, false, true),
        ("Write a cover letter template", Applications, true, false),
        ("Do a mock interview with Career Center", InterviewPrep, false, false),
    ];

    seed.into_iter()
        .zip(1u32..)
        .map(|((text, category, completed, suggested_by_coach), id)| ChecklistItem {
            id,
            text: text.to_string(),
            category,
            completed,
            suggested_by_coach,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn mentor(
    id: u32,
    name: &str,
    grad_year: u16,
    company: &str,
    role: &str,
    tags: &[&str],
    why_matched: &str,
    outreach_message: &str,
) -> Mentor {
    Mentor {
        id,
        name: name.to_string(),
        grad_year,
        company: company.to_string(),
        role: role.to_string(),
        tags: strings(tags),
        why_matched: why_matched.to_string(),
        outreach_message: outreach_message.to_string(),
    }
}

pub fn seed_mentors() -> Vec<Mentor> {
    vec![
        mentor(
            1,
            "Alex Chen",
            2021,
            "Google",
            "Front-End Engineer",
            &["React", "JavaScript", "UI/UX"],
            "Shares your interest in front-end development and transitioned from a similar CS background at FSU. Can advise on building a strong portfolio.",
            "Hi Alex,\n\nI'm Maya Rodriguez, a junior CS major at FSU focusing on front-end development. I noticed you graduated from FSU and are now a Front-End Engineer at Google. I'd love to hear about your journey from FSU to Google and any advice on preparing for front-end internships.\n\nWould you be open to a brief 15-minute chat?\n\nBest,\nMaya",
        ),
        mentor(
            2,
            "Jasmine Williams",
            2022,
            "Microsoft",
            "Software Engineer",
            &["Full-Stack", "Python", "Cloud"],
            "Also a Women in CS club alum and can share tips on landing internships at major tech companies straight out of FSU.",
            "Hi Jasmine,\n\nI'm Maya Rodriguez, a fellow Women in CS member at FSU. I'm currently a junior looking for front-end/full-stack internships. I'd love to learn about your experience going from FSU to Microsoft.\n\nWould you have time for a short virtual coffee chat?\n\nThanks,\nMaya",
        ),
        mentor(
            3,
            "Marcus Johnson",
            2020,
            "Meta",
            "Product Engineer",
            &["React", "Product", "AI"],
            "Works on AI-adjacent products at Meta and uses React daily. Great match for your interest in AI-adjacent product development.",
            "Hi Marcus,\n\nI'm Maya Rodriguez, a CS junior at FSU interested in AI-adjacent product work. Your role as a Product Engineer at Meta caught my attention since it aligns with my career interests.\n\nI'd appreciate any insights on breaking into product engineering roles. Would you be available for a brief chat?\n\nBest regards,\nMaya",
        ),
        mentor(
            4,
            "Sarah Mitchell",
            2023,
            "Spotify",
            "Frontend Developer",
            &["JavaScript", "CSS", "Design Systems"],
            "Recently went through the internship process and can provide up-to-date advice on applications, interviewing, and what companies look for in junior developers.",
            "Hi Sarah,\n\nI'm Maya, a junior at FSU studying CS. I'm inspired by your path to Spotify as a Frontend Developer. Since you recently went through the internship and job search process, I'd love to hear what worked for you.\n\nWould you be open to sharing your experience?\n\nThank you,\nMaya",
        ),
        mentor(
            5,
            "David Park",
            2019,
            "Amazon",
            "Senior SDE",
            &["Full-Stack", "System Design", "Mentoring"],
            "Known for mentoring FSU students and has helped several Seminoles land internships at top companies. Active in the Nole Network community.",
            "Hi David,\n\nI'm Maya Rodriguez, a CS junior at FSU. I've heard you're an active mentor in the Nole Network, and I'd love to connect. I'm targeting front-end/full-stack internships and would value your guidance.\n\nCould we schedule a brief chat at your convenience?\n\nBest,\nMaya",
        ),
        mentor(
            6,
            "Rachel Torres",
            2021,
            "Stripe",
            "Full-Stack Engineer",
            &["JavaScript", "React", "Payments"],
            "Works on complex React interfaces at Stripe. Her experience with fintech products gives unique insight into building reliable, user-facing applications.",
            "Hi Rachel,\n\nI'm Maya Rodriguez, a CS junior at FSU interested in full-stack development. Your work on React interfaces at Stripe sounds fascinating. I'd love to learn about your journey and any tips for landing internships in fintech.\n\nWould you be free for a short conversation?\n\nThanks,\nMaya",
        ),
        mentor(
            7,
            "James Wright",
            2022,
            "Figma",
            "Design Engineer",
            &["UI/UX", "React", "Design Systems"],
            "Bridge between design and engineering, matching your interest in UI/UX. Can advise on building a design-engineering portfolio.",
            "Hi James,\n\nI'm Maya Rodriguez, a CS junior at FSU with a strong interest in the intersection of design and engineering. Your role as a Design Engineer at Figma is exactly the kind of career path I'm exploring.\n\nWould you have time for a quick chat about your experience?\n\nBest,\nMaya",
        ),
        mentor(
            8,
            "Nicole Adams",
            2020,
            "LinkedIn",
            "Staff Engineer",
            &["React", "Accessibility", "Performance"],
            "Expert in web accessibility and performance optimization. Can provide guidance on standing out with specialized frontend skills.",
            "Hi Nicole,\n\nI'm Maya Rodriguez, a CS junior at FSU focusing on front-end development. Your expertise in accessibility and performance at LinkedIn is inspiring. I'd love to learn how these specialties can help differentiate a junior developer.\n\nWould you be open to a brief conversation?\n\nThank you,\nMaya",
        ),
    ]
}

/// Quick-action prompts paired with the reply served when the coach is offline.
pub const CANNED_COACH_REPLIES: &[(&str, &str)] = &[
    (
        "Find roles like this",
        "Based on the selected job, here are similar roles I'd recommend:\n\n1. **Product Engineering Intern** at Innovatech Corp - Strong React/JS match (Score: 85)\n2. **Frontend Intern - E-Commerce** at ShopNest - Great HTML/CSS + React fit (Score: 82)\n3. **UI/UX Engineering Intern** at DesignForward Studio - Local to Tallahassee! (Score: 78)\n\nI suggest applying to all three this week. Want me to help tailor your resume for any of these?",
    ),
    (
        "Improve my resume bullet",
        "Here's how to strengthen your resume bullets using the STAR method:\n\n**Before:** \"Worked on a web app for class project\"\n\n**After:** \"Developed a responsive web application using React and Node.js that enabled 50+ students to track study group schedules, improving group coordination by 40%\"\n\n**Key tips:**\n- Start with a strong action verb\n- Include specific technologies used\n- Quantify the impact where possible\n- Focus on results, not just tasks\n\nWant me to help rewrite more bullets?",
    ),
    (
        "Build a 2-week plan",
        "Here's your personalized 2-week internship prep plan:\n\n**Week 1: Foundation**\n- Mon-Tue: Update resume with Career Center feedback\n- Wed: Research top 5 target companies\n- Thu: Complete 1 React portfolio project\n- Fri: Practice 5 JavaScript interview questions\n\n**Week 2: Apply & Network**\n- Mon-Tue: Submit 3 applications with tailored resumes\n- Wed: Reach out to 2 alumni mentors on Nole Network\n- Thu: Practice behavioral questions (STAR method)\n- Fri: Review and refine remaining applications\n\nShall I add these items to your checklist?",
    ),
    (
        "Mock interview questions",
        "Here are practice questions tailored to Front-End SWE Intern roles:\n\n**Technical:**\n1. Explain the difference between `let`, `const`, and `var` in JavaScript.\n2. How does React's virtual DOM work?\n3. What is CSS specificity and how does it affect styling?\n4. Describe how you would make a website accessible.\n\n**Behavioral:**\n1. Tell me about a time you worked on a team project. What was your role?\n2. Describe a technical challenge you overcame recently.\n3. Why are you interested in front-end development?\n\n**Tips:** Practice answering out loud, time yourself (2 min per answer), and schedule a mock interview with the Career Center.\n\nWant me to help you prepare answers for any of these?",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_seed_ids_are_sequential() {
        let items = seed_checklist();
        assert_eq!(items.len(), 15);
        assert!(items.iter().zip(1u32..).all(|(item, id)| item.id == id));
        assert_eq!(items.iter().filter(|i| i.completed).count(), 3);
    }

    #[test]
    fn test_every_category_is_seeded() {
        let items = seed_checklist();
        for category in ChecklistCategory::ALL {
            assert!(items.iter().any(|i| i.category == category), "{category:?}");
        }
    }
}
