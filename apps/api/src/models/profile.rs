use serde::{Deserialize, Serialize};

/// Profile captured at onboarding. Replaced wholesale on login, cleared on logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub major: String,
    pub year: String,
    pub career_goals: String,
    pub career_track: String,
    pub skills: Vec<String>,
    pub needs_sponsorship: bool,
    pub resume_filename: String,
    pub location_preference: String,
    pub remote_preference: String,
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// The built-in demo student used when nobody is logged in.
#[derive(Debug, Clone, Serialize)]
pub struct StudentProfile {
    pub name: String,
    pub school: String,
    pub major: String,
    pub year: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub focus_track: String,
}
