use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistCategory {
    Skills,
    Resume,
    Networking,
    Applications,
    #[serde(rename = "Interview Prep")]
    InterviewPrep,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 5] = [
        ChecklistCategory::Skills,
        ChecklistCategory::Resume,
        ChecklistCategory::Networking,
        ChecklistCategory::Applications,
        ChecklistCategory::InterviewPrep,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::Skills => "Skills",
            ChecklistCategory::Resume => "Resume",
            ChecklistCategory::Networking => "Networking",
            ChecklistCategory::Applications => "Applications",
            ChecklistCategory::InterviewPrep => "Interview Prep",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub text: String,
    pub category: ChecklistCategory,
    pub completed: bool,
    pub suggested_by_coach: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_prep_label_round_trips_through_serde() {
        let json = serde_json::to_string(&ChecklistCategory::InterviewPrep).unwrap();
        assert_eq!(json, "\"Interview Prep\"");
        assert_eq!(
            ChecklistCategory::from_label("interview prep"),
            Some(ChecklistCategory::InterviewPrep)
        );
    }
}
