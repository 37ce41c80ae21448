//! Interview practice packs built from a listing's title, company and required
//! skills. Technical questions are keyed on the listing's skills; behavioral
//! questions are a fixed STAR-format set personalised with the role.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// Behavioral question ids start here so they never collide with technical ones.
const BEHAVIORAL_FIRST_ID: u32 = 101;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Technical,
    Behavioral,
}

impl QuestionKind {
    /// Case-insensitive match on the lowercase wire name.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "technical" => Some(Self::Technical),
            "behavioral" => Some(Self::Behavioral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeQuestion {
    pub id: u32,
    pub text: String,
    /// Shown when the student is stuck.
    pub hint: String,
    pub example_answer: String,
    /// Self-review prompts shown after an answer is submitted.
    pub feedback_bullets: Vec<String>,
    pub suggested_improvement: String,
}

fn question(
    text: impl Into<String>,
    hint: &str,
    example_answer: impl Into<String>,
    feedback: [&str; 4],
    suggested_improvement: &str,
) -> PracticeQuestion {
    PracticeQuestion {
        id: 0,
        text: text.into(),
        hint: hint.to_string(),
        example_answer: example_answer.into(),
        feedback_bullets: feedback.iter().map(|s| s.to_string()).collect(),
        suggested_improvement: suggested_improvement.to_string(),
    }
}

fn numbered(questions: Vec<PracticeQuestion>, first_id: u32) -> Vec<PracticeQuestion> {
    questions
        .into_iter()
        .zip(first_id..)
        .map(|(q, id)| PracticeQuestion { id, ..q })
        .collect()
}

// ============================================================================
// Technical
// ============================================================================

fn has_skill(skills: &[String], needles: &[&str]) -> bool {
    skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        needles.iter().any(|needle| skill.contains(needle))
    })
}

fn scope_question(title: &str) -> PracticeQuestion {
    question(
        format!("For the {title} role: Explain the difference between `let`, `const`, and `var` in JavaScript. When would you use each?"),
        "Think about scope (block vs function), hoisting behavior, and reassignment rules.",
        "`var` is function-scoped, hoisted, and can be redeclared. `let` is block-scoped, not hoisted in the same way, and can be reassigned but not redeclared. `const` is block-scoped and cannot be reassigned after initialization (though objects/arrays it references can still be mutated). Use `const` by default for values that won't change, `let` for loop counters or values that need reassignment, and avoid `var` in modern code.",
        [
            "Correctness: Did you mention scope differences (block vs function)?",
            "Edge cases: Did you note that `const` objects are still mutable?",
            "Complexity: Did you explain hoisting behavior?",
            "Tradeoffs: Did you recommend a default usage pattern?",
        ],
        "A strong answer also mentions the Temporal Dead Zone for `let`/`const` and explains why `var` can lead to bugs in loops with closures.",
    )
}

fn virtual_dom_question(title: &str) -> PracticeQuestion {
    question(
        format!("How does React's Virtual DOM work, and why is it beneficial for a {title} position?"),
        "Consider the reconciliation process, diffing algorithm, and performance benefits over direct DOM manipulation.",
        "React maintains a lightweight in-memory representation of the actual DOM called the Virtual DOM. When state changes, React creates a new Virtual DOM tree, diffs it against the previous one (reconciliation), and calculates the minimum set of changes needed. It then batches these changes and applies them to the real DOM in a single update. This is beneficial because direct DOM manipulation is expensive, and React's approach minimizes reflows and repaints, leading to better performance in complex UIs.",
        [
            "Correctness: Did you explain the diffing/reconciliation process?",
            "Edge cases: Did you mention key props for list rendering?",
            "Complexity: Did you discuss batching and performance?",
            "Tradeoffs: Did you acknowledge any limitations of Virtual DOM?",
        ],
        "Mention React Fiber architecture for concurrent rendering and how keys help React identify which items changed in lists.",
    )
}

fn lifecycle_question() -> PracticeQuestion {
    question(
        "Describe the component lifecycle in React. How do hooks like `useEffect` relate to class component lifecycle methods?",
        "Map useEffect to componentDidMount, componentDidUpdate, and componentWillUnmount.",
        "In class components, the lifecycle includes mounting (constructor, render, componentDidMount), updating (shouldComponentUpdate, render, componentDidUpdate), and unmounting (componentWillUnmount). With hooks, `useEffect` with an empty dependency array replaces componentDidMount, `useEffect` with dependencies replaces componentDidUpdate, and the cleanup function returned from `useEffect` replaces componentWillUnmount. Hooks simplify the mental model by colocating related logic rather than splitting it across lifecycle methods.",
        [
            "Correctness: Did you map hooks to lifecycle methods accurately?",
            "Edge cases: Did you mention cleanup functions?",
            "Complexity: Did you discuss dependency arrays?",
            "Tradeoffs: Did you explain why hooks are preferred?",
        ],
        "Discuss common pitfalls like missing dependencies causing stale closures, and mention useLayoutEffect for synchronous DOM reads.",
    )
}

fn system_design_question(title: &str) -> PracticeQuestion {
    let scenario = if title.contains("E-Commerce") {
        "an e-commerce checkout flow"
    } else {
        "a dashboard with multiple data views"
    };
    question(
        format!("System design: How would you structure a small React application for {scenario}?"),
        "Think about component hierarchy, state management, data fetching, and routing.",
        "I would start with a clear folder structure: pages/ for route-level components, components/ for reusable UI pieces, hooks/ for custom logic, and lib/ for utilities. For state management, I'd use React Context for global state (like user auth) and local useState for component-specific state. Data fetching would use React Query for server state with caching and automatic refetching. Routing would use React Router with lazy loading for code splitting. I'd also set up a design system with consistent spacing, colors, and typography.",
        [
            "Correctness: Did you address component organization?",
            "Edge cases: Did you consider loading and error states?",
            "Complexity: Did you mention state management strategy?",
            "Tradeoffs: Did you discuss when to use local vs global state?",
        ],
        "Add discussion of testing strategy (unit tests for utilities, integration tests for key flows) and accessibility considerations.",
    )
}

fn async_question() -> PracticeQuestion {
    question(
        "Explain async/await in JavaScript. How does it relate to Promises, and what are common pitfalls?",
        "Think about the event loop, error handling with try/catch, and parallel execution with Promise.all.",
        "Async/await is syntactic sugar over Promises that makes asynchronous code read like synchronous code. An `async` function always returns a Promise. `await` pauses execution within the function until the Promise resolves. Common pitfalls include: not handling errors (use try/catch), accidentally running awaits sequentially when they could be parallel (use Promise.all), and forgetting that `await` only works in async functions. The event loop continues processing other tasks while awaiting.",
        [
            "Correctness: Did you explain the relationship to Promises?",
            "Edge cases: Did you mention error handling patterns?",
            "Complexity: Did you discuss sequential vs parallel execution?",
            "Tradeoffs: Did you mention when callbacks might still be appropriate?",
        ],
        "Mention Promise.allSettled for handling mixed success/failure cases, and discuss how async/await works with the microtask queue.",
    )
}

fn project_question() -> PracticeQuestion {
    question(
        "Walk me through a project you've built. What was the architecture, and what would you do differently?",
        "Use the STAR-like format: describe the project, your role, technical decisions, and lessons learned.",
        "I built a study group scheduling web app using React and Node.js. The frontend used React with Context API for state management and React Router for navigation. The backend was Express with a PostgreSQL database. I used REST APIs for communication. If I were to rebuild it, I'd use TypeScript for type safety, React Query for data fetching instead of raw fetch calls, and add automated testing. I'd also implement better error boundaries and loading states.",
        [
            "Correctness: Did you clearly describe the tech stack and architecture?",
            "Edge cases: Did you mention challenges you encountered?",
            "Complexity: Did you discuss your decision-making process?",
            "Tradeoffs: Did you show growth by identifying improvements?",
        ],
        "Quantify impact where possible (users served, performance improvements). Show how you'd apply lessons learned to the role you're interviewing for.",
    )
}

fn duplicate_question() -> PracticeQuestion {
    question(
        "Write a function that finds the first duplicate in an array. What is the time and space complexity?",
        "Consider using a Set for O(n) time complexity, or discuss the brute force O(n^2) approach first.",
        "Using a Set: iterate through the array, checking if each element is already in the Set. If yes, return it as the first duplicate. If no, add it to the Set. Time: O(n) where n is array length. Space: O(n) for the Set. Alternative: sort first (O(n log n) time, O(1) space if in-place) and check adjacent elements. The Set approach is preferred when space isn't constrained.",
        [
            "Correctness: Did your solution handle edge cases (empty array, no duplicates)?",
            "Edge cases: What about arrays with all identical elements?",
            "Complexity: Did you analyze both time and space complexity?",
            "Tradeoffs: Did you discuss multiple approaches?",
        ],
        "Discuss when you'd choose one approach over another based on constraints. Mention that in-place solutions may be preferred in memory-constrained environments.",
    )
}

/// Questions for `title` keyed on its required skills, numbered from 1. System
/// design and project walkthrough questions are always included.
pub fn technical_questions(title: &str, required_skills: &[String]) -> Vec<PracticeQuestion> {
    let mut questions = Vec::new();

    if has_skill(required_skills, &["javascript", "react"]) {
        questions.push(scope_question(title));
        questions.push(virtual_dom_question(title));
    }
    if has_skill(required_skills, &["react"]) {
        questions.push(lifecycle_question());
    }
    questions.push(system_design_question(title));
    if has_skill(required_skills, &["async", "javascript"]) {
        questions.push(async_question());
    }
    questions.push(project_question());
    if has_skill(required_skills, &["python", "sql"]) {
        questions.push(duplicate_question());
    }

    numbered(questions, 1)
}

// ============================================================================
// Behavioral
// ============================================================================

/// The STAR-format set, numbered from 101, with the role and company filled in.
pub fn behavioral_questions(title: &str, company: &str) -> Vec<PracticeQuestion> {
    let questions = vec![
        question(
            "Tell me about a time you had a conflict with a teammate while working on a project. How did you resolve it?",
            "Use the STAR method: Situation, Task, Action, Result. Focus on communication and compromise.",
            "Situation: During a group project, a teammate and I disagreed on whether to use REST or GraphQL for our API. Task: We needed to decide quickly to meet our deadline. Action: I suggested we each spend 30 minutes researching pros/cons for our specific use case, then present findings. After comparing, we agreed REST was simpler for our needs. Result: We delivered on time, and the teammate later thanked me for the structured approach to resolving disagreements.",
            [
                "Clarity: Did you set up the situation clearly?",
                "Structure: Did you follow the STAR format?",
                "Specificity: Did you provide concrete details, not vague generalities?",
                "STAR format: Was the Result section strong with a clear outcome?",
            ],
            "Quantify the result if possible (delivered 2 days early, received positive feedback from professor/manager). Show what you learned from the experience.",
        ),
        question(
            format!("Why are you interested in the {title} role at {company}?"),
            "Research the company's products, culture, and mission. Connect your skills and interests to their specific work.",
            format!("I'm excited about {company} because of their focus on building innovative products that impact real users. The {title} role aligns perfectly with my skills in front-end development and my interest in creating intuitive user experiences. I've followed {company}'s recent work and I'm particularly drawn to their commitment to code quality and mentoring interns. I see this as an opportunity to grow my technical skills while contributing meaningfully to the team."),
            [
                "Clarity: Did you articulate specific reasons for your interest?",
                "Structure: Did you connect your skills to the role?",
                "Specificity: Did you mention something specific about the company?",
                "STAR format: N/A - This is a motivation question, not behavioral.",
            ],
            "Reference a specific product, feature, or company value. Show you've done your homework beyond the job posting.",
        ),
        question(
            "Describe a time when you had to learn something quickly to complete a task or project.",
            "Internship-specific: Show you can ramp up fast, seek resources, and deliver under time pressure.",
            "Situation: For a class project, I needed to build a REST API in two weeks, but I had only done front-end work before. Task: Deliver a working backend for our team's web app. Action: I dedicated the first 3 days to a Node.js/Express crash course, built a small practice project, then started on the real API. I asked a friend with backend experience to code review my work. Result: I delivered a functional API with 5 endpoints on time, and our project received an A. I continued learning backend development after the class.",
            [
                "Clarity: Did you explain what you needed to learn and why?",
                "Structure: Did you follow the STAR format?",
                "Specificity: Did you describe your learning strategy?",
                "STAR format: Did the Result show both the outcome and continued growth?",
            ],
            "Mention specific resources you used (documentation, tutorials, mentors). Show how this learning experience shaped your approach to new technologies.",
        ),
        question(
            "Tell me about yourself and your journey into software development.",
            "Keep it to 2 minutes. Cover: background, what drew you to tech, key experiences, and what you're looking for now.",
            "I'm a junior Computer Science major at Florida State University with a passion for front-end development. I got interested in coding through a web design class in high school, where I built my first website. At FSU, I've deepened my skills in JavaScript and React through coursework and personal projects, including a study group scheduling app. I'm active in Women in CS and have a part-time campus job that's taught me time management. Now I'm looking for an internship where I can apply my front-end skills on real products and learn from experienced engineers.",
            [
                "Clarity: Was the narrative easy to follow?",
                "Structure: Did it flow logically from past to present to future?",
                "Specificity: Did you mention concrete experiences and skills?",
                "STAR format: N/A - This is a narrative question.",
            ],
            "Tailor the ending to the specific role. Mention what about this company/team excites you as a natural conclusion.",
        ),
        question(
            "How do you handle receiving critical feedback on your work?",
            "Show maturity: listen actively, separate feedback from ego, extract actionable items, follow up.",
            "Situation: In a code review, a senior student pointed out that my React component had poor separation of concerns and was doing too much. Task: I needed to address the feedback and improve my code. Action: I thanked them for the detailed review, asked clarifying questions about best practices, and refactored the component into three smaller, focused components. Result: The refactored code was easier to test and maintain. I now proactively seek code reviews before submitting work because I've seen how much I learn from them.",
            [
                "Clarity: Did you describe the feedback you received?",
                "Structure: Did you follow the STAR format?",
                "Specificity: Did you show what you did with the feedback?",
                "STAR format: Did the Result show growth and changed behavior?",
            ],
            "Emphasize that you view feedback as a growth opportunity. Mention a system you've developed for tracking and acting on feedback.",
        ),
        question(
            "Describe a situation where you had to prioritize multiple competing deadlines.",
            "Show organizational skills: how you assessed urgency, communicated with stakeholders, and delivered.",
            "Situation: During midterms, I had a CS project due, a math exam, and a club event I was organizing all in the same week. Task: I needed to deliver quality work on all three without burning out. Action: I created a priority matrix based on deadlines and impact. I started with the CS project (highest complexity), broke it into daily milestones, studied math in 30-minute focused sessions, and delegated some club tasks to other officers. Result: I completed the project a day early, scored well on the exam, and the club event went smoothly. This experience taught me the value of planning and delegation.",
            [
                "Clarity: Did you explain the competing priorities clearly?",
                "Structure: Did you follow the STAR format?",
                "Specificity: Did you describe your prioritization method?",
                "STAR format: Did the Result cover all three items?",
            ],
            "Mention tools you use for organization (calendar blocking, task lists). Show how you communicate proactively when timelines are tight.",
        ),
    ];

    numbered(questions, BEHAVIORAL_FIRST_ID)
}

// ============================================================================
// Packs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct InterviewPack {
    pub job_id: u32,
    pub title: String,
    pub company: String,
    pub kind: QuestionKind,
    /// One-line description of what the pack covers.
    pub summary: String,
    pub questions: Vec<PracticeQuestion>,
}

pub fn interview_pack(job: &Job, kind: QuestionKind) -> InterviewPack {
    let questions = match kind {
        QuestionKind::Technical => technical_questions(&job.title, &job.required_skills),
        QuestionKind::Behavioral => behavioral_questions(&job.title, &job.company),
    };
    let summary = match kind {
        QuestionKind::Technical => format!(
            "{} questions covering {}, system design, and problem-solving.",
            questions.len(),
            job.required_skills.join(", ")
        ),
        QuestionKind::Behavioral => format!(
            "{} STAR-format questions on teamwork, leadership, motivation, and internship readiness.",
            questions.len()
        ),
    };

    InterviewPack {
        job_id: job.id,
        title: job.title.clone(),
        company: job.company.clone(),
        kind,
        summary,
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts(questions: &[PracticeQuestion]) -> Vec<&str> {
        questions.iter().map(|q| q.text.as_str()).collect()
    }

    #[test]
    fn test_javascript_and_react_get_the_full_front_end_set() {
        let questions = technical_questions(
            "Front-End Software Engineering Intern",
            &skills(&["JavaScript", "React", "HTML/CSS", "Git"]),
        );
        assert_eq!(questions.len(), 6);
        assert_eq!(
            questions.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        let texts = texts(&questions);
        assert!(texts[0].starts_with("For the Front-End Software Engineering Intern role:"));
        assert!(texts[1].contains("Virtual DOM"));
        assert!(texts[2].contains("component lifecycle"));
        assert!(texts[3].contains("a dashboard with multiple data views"));
        assert!(texts[4].contains("async/await"));
        assert!(texts[5].starts_with("Walk me through a project"));
    }

    #[test]
    fn test_react_alone_skips_async() {
        let questions = technical_questions("UI Intern", &skills(&["React", "Figma"]));
        let texts = texts(&questions);
        assert_eq!(texts.len(), 5);
        assert!(texts.iter().any(|t| t.contains("`let`, `const`, and `var`")));
        assert!(texts.iter().any(|t| t.contains("component lifecycle")));
        assert!(!texts.iter().any(|t| t.contains("async/await")));
    }

    #[test]
    fn test_async_skill_alone_triggers_async_question() {
        let questions = technical_questions("Backend Intern", &skills(&["Async Rust"]));
        let texts = texts(&questions);
        assert_eq!(texts.len(), 3);
        assert!(texts[1].contains("async/await"));
    }

    #[test]
    fn test_python_or_sql_adds_duplicate_question_last() {
        let questions =
            technical_questions("Data Engineering Intern", &skills(&["Python", "SQL", "Git"]));
        assert_eq!(questions.len(), 3);
        assert!(questions[0].text.starts_with("System design:"));
        assert!(questions[1].text.starts_with("Walk me through a project"));
        assert!(questions[2].text.contains("first duplicate"));
        assert_eq!(questions[2].id, 3);

        let sql_only = technical_questions("Analyst Intern", &skills(&["sql"]));
        assert!(sql_only.last().unwrap().text.contains("first duplicate"));
    }

    #[test]
    fn test_unmatched_skills_still_get_design_and_project() {
        let questions = technical_questions("Cloud Intern", &skills(&["Linux", "Terraform"]));
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.feedback_bullets.len() == 4));
    }

    #[test]
    fn test_e_commerce_titles_get_checkout_scenario() {
        let questions = technical_questions("Frontend Intern - E-Commerce Platform", &[]);
        assert!(questions[0].text.contains("an e-commerce checkout flow"));
    }

    #[test]
    fn test_behavioral_questions_name_role_and_company() {
        let questions = behavioral_questions("Data Engineering Intern", "DataStream Analytics");
        assert_eq!(questions.len(), 6);
        assert_eq!(questions[0].id, 101);
        assert_eq!(questions[5].id, 106);
        assert_eq!(
            questions[1].text,
            "Why are you interested in the Data Engineering Intern role at DataStream Analytics?"
        );
        assert!(questions[1].example_answer.contains("I've followed DataStream Analytics's recent work"));
    }

    #[test]
    fn test_pack_summary_reflects_kind() {
        let catalog = Catalog::seeded();
        let job = catalog.job(1).unwrap();

        let technical = interview_pack(job, QuestionKind::Technical);
        assert_eq!(
            technical.summary,
            "6 questions covering JavaScript, React, HTML/CSS, Git, system design, and problem-solving."
        );

        let behavioral = interview_pack(job, QuestionKind::Behavioral);
        assert_eq!(behavioral.kind, QuestionKind::Behavioral);
        assert!(behavioral.summary.starts_with("6 STAR-format questions"));
        assert_eq!(behavioral.company, "TechVentures Inc.");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(QuestionKind::from_label(" Behavioral "), Some(QuestionKind::Behavioral));
        assert_eq!(QuestionKind::from_label("technical"), Some(QuestionKind::Technical));
        assert_eq!(QuestionKind::from_label("trivia"), None);
    }
}
