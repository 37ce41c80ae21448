use serde::Serialize;

/// Alumni directory entry with a ready-to-send outreach draft.
#[derive(Debug, Clone, Serialize)]
pub struct Mentor {
    pub id: u32,
    pub name: String,
    pub grad_year: u16,
    pub company: String,
    pub role: String,
    pub tags: Vec<String>,
    pub why_matched: String,
    pub outreach_message: String,
}
