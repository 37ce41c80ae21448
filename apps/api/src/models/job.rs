use serde::{Deserialize, Serialize};

/// Where a listing was aggregated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSource {
    #[serde(rename = "Web")]
    Web,
    #[serde(rename = "Nole Network")]
    NoleNetwork,
}

impl JobSource {
    pub fn label(&self) -> &'static str {
        match self {
            JobSource::Web => "Web",
            JobSource::NoleNetwork => "Nole Network",
        }
    }

    /// Accepts the display label as well as the snake_case query form.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "web" => Some(JobSource::Web),
            "nole network" | "nole_network" | "nole-network" => Some(JobSource::NoleNetwork),
            _ => None,
        }
    }
}

/// An internship listing. Immutable once the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub remote: bool,
    pub source: JobSource,
    pub description: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub posted: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub paid: bool,
}

impl Job {
    /// Required skills followed by preferred skills, in listing order.
    pub fn all_skills(&self) -> impl Iterator<Item = &String> {
        self.required_skills.iter().chain(self.preferred_skills.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_to_display_label() {
        let json = serde_json::to_string(&JobSource::NoleNetwork).unwrap();
        assert_eq!(json, "\"Nole Network\"");
    }

    #[test]
    fn test_source_parse_accepts_query_forms() {
        assert_eq!(JobSource::parse("Web"), Some(JobSource::Web));
        assert_eq!(JobSource::parse("nole_network"), Some(JobSource::NoleNetwork));
        assert_eq!(JobSource::parse("Nole Network"), Some(JobSource::NoleNetwork));
        assert_eq!(JobSource::parse("linkedin"), None);
    }
}
