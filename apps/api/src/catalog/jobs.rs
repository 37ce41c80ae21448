//! Static internship listings aggregated from the web and the Nole Network.

use crate::models::job::{Job, JobSource};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    remote: bool,
    source: JobSource,
    description: &str,
    required: &[&str],
    preferred: &[&str],
    posted: &str,
    paid: bool,
) -> Job {
    Job {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        remote,
        source,
        description: description.to_string(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        posted: posted.to_string(),
        employment_type: "Internship".to_string(),
        paid,
    }
}

pub fn seed_jobs() -> Vec<Job> {
    use JobSource::{NoleNetwork, Web};

    vec![
        listing(
            1,
            "Front-End Software Engineering Intern",
            "TechVentures Inc.",
            "Miami, FL",
            false,
            Web,
            "Join our product team to build user-facing features using React, TypeScript, and modern CSS frameworks. You'll work alongside senior engineers on real shipping products used by thousands of customers. Ideal for students with strong JavaScript fundamentals and a passion for UI/UX.",
            &["JavaScript", "React", "HTML/CSS", "Git"],
            &["TypeScript", "Tailwind CSS", "Figma"],
            "2 days ago",
            true,
        ),
        listing(
            2,
            "Full-Stack Developer Intern",
            "Bright Health Solutions",
            "Orlando, FL",
            true,
            NoleNetwork,
            "Help us build and maintain web applications for our healthcare platform. You'll contribute to both frontend React components and backend Node.js services. Great opportunity to gain full-stack experience in a mission-driven company.",
            &["JavaScript", "React", "Node.js", "SQL"],
            &["Python", "Docker", "AWS"],
            "1 day ago",
            true,
        ),
        listing(
            3,
            "Software Engineering Intern - AI Products",
            "NovaMind AI",
            "San Francisco, CA",
            true,
            Web,
            "Work on cutting-edge AI-powered web applications. Build intuitive interfaces for machine learning tools and help design user experiences for complex AI workflows. Python and JavaScript skills are a must.",
            &["Python", "JavaScript", "Git"],
            &["React", "Machine Learning", "TensorFlow"],
            "3 days ago",
            true,
        ),
        listing(
            4,
            "UI/UX Engineering Intern",
            "DesignForward Studio",
            "Tallahassee, FL",
            false,
            NoleNetwork,
            "Bridge the gap between design and development. Create pixel-perfect implementations of design mockups and build reusable component libraries. Close collaboration with our design team on real client projects.",
            &["HTML/CSS", "JavaScript", "React"],
            &["Figma", "Storybook", "Accessibility"],
            "5 days ago",
            true,
        ),
        listing(
            5,
            "Web Development Intern",
            "GovTech Solutions",
            "Tallahassee, FL",
            false,
            NoleNetwork,
            "Support the development of web applications used by state government agencies. Focus on accessibility, performance, and clean code practices. Great exposure to large-scale enterprise applications.",
            &["HTML/CSS", "JavaScript", "Git"],
            &["React", "Section 508 Compliance", "Agile"],
            "1 week ago",
            true,
        ),
        listing(
            6,
            "React Native Mobile Intern",
            "AppFlow Labs",
            "Austin, TX",
            true,
            Web,
            "Build cross-platform mobile applications using React Native. Work with our team to ship features to both iOS and Android simultaneously. Experience with React web development is a strong plus.",
            &["JavaScript", "React", "Git"],
            &["React Native", "Mobile Development", "Redux"],
            "4 days ago",
            true,
        ),
        listing(
            7,
            "Data Engineering Intern",
            "DataStream Analytics",
            "Jacksonville, FL",
            false,
            Web,
            "Help build ETL pipelines and data visualization dashboards. Work with SQL databases, Python scripting, and modern BI tools. Strong analytical thinking and attention to detail required.",
            &["Python", "SQL", "Git"],
            &["Pandas", "Apache Spark", "Tableau"],
            "3 days ago",
            true,
        ),
        listing(
            8,
            "Frontend Intern - E-Commerce Platform",
            "ShopNest",
            "Atlanta, GA",
            true,
            Web,
            "Join our front-end team working on a fast-growing e-commerce platform. Build responsive shopping experiences, optimize checkout flows, and implement A/B testing frameworks. High-impact role on a small, agile team.",
            &["JavaScript", "React", "HTML/CSS"],
            &["Next.js", "GraphQL", "Performance Optimization"],
            "2 days ago",
            true,
        ),
        listing(
            9,
            "Software Intern - Student Services",
            "Florida State University IT",
            "Tallahassee, FL",
            false,
            NoleNetwork,
            "Work within FSU's IT department to build and maintain internal tools used by students and faculty. Gain experience with full-stack web development in an academic environment.",
            &["HTML/CSS", "JavaScript", "SQL"],
            &["Python", "React", "Agile"],
            "6 days ago",
            true,
        ),
        listing(
            10,
            "Cloud & DevOps Intern",
            "SkyOps Technologies",
            "Tampa, FL",
            true,
            Web,
            "Learn cloud infrastructure and DevOps practices. Help manage CI/CD pipelines, write automation scripts, and monitor cloud services. Ideal for students interested in infrastructure and reliability.",
            &["Git", "Python", "Linux"],
            &["AWS", "Docker", "Kubernetes", "Terraform"],
            "1 week ago",
            false,
        ),
        listing(
            11,
            "Product Engineering Intern",
            "Innovatech Corp",
            "Remote",
            true,
            Web,
            "Join a cross-functional product team building SaaS tools for small businesses. You'll participate in sprint planning, build features end-to-end, and ship code weekly. Fast-paced startup environment.",
            &["JavaScript", "React", "Git", "HTML/CSS"],
            &["Node.js", "PostgreSQL", "CI/CD"],
            "2 days ago",
            true,
        ),
        listing(
            12,
            "Junior QA & Test Automation Intern",
            "QualityFirst Software",
            "Fort Lauderdale, FL",
            false,
            Web,
            "Learn software quality assurance and test automation. Write automated tests, perform manual testing, and help improve our testing infrastructure. Great entry point into software engineering.",
            &["JavaScript", "Git"],
            &["Selenium", "Cypress", "Jest", "Python"],
            "5 days ago",
            true,
        ),
    ]
}

/// The "refreshed" listing: same jobs, rotated so the second half leads.
pub fn rotated(jobs: &[Job]) -> Vec<Job> {
    let split = jobs.len().min(6);
    jobs[split..].iter().chain(jobs[..split].iter()).cloned().collect()
}
