//! Coaching-plan responses from the upstream `/coach` endpoint.
//!
//! Known shapes:
//! - nested: `{ "coaching_plan": { ...plan fields } }` (older builds used `"plan"`)
//! - flat: plan fields at the top level, optionally with a free-text `"response"`
//! - camelCase checklist keys (`shortTermChecklist`, `longTermChecklist`)
//! - a bare JSON string
//!
//! In the nested shape, top-level plan fields fill any section the nested plan
//! leaves empty.

use serde::Deserialize;
use serde_json::Value;

use crate::normalize::{decode_or_default, first_non_empty, lenient, lenient_string, lenient_text};

pub const ROADMAP_HEADER: &str = "Here's your personalized career roadmap:\n";
pub const FALLBACK_REPLY: &str =
    "I've analyzed your profile. Let me know what specific area you'd like to focus on.";

const NESTED_PLAN_KEYS: [&str; 2] = ["coaching_plan", "plan"];

#[derive(Debug, Clone, Copy)]
enum LabelKey {
    Task,
    Action,
    Title,
    Milestone,
    Goal,
}

const SHORT_TERM_LABELS: &[LabelKey] = &[LabelKey::Task, LabelKey::Action, LabelKey::Title];
const LONG_TERM_LABELS: &[LabelKey] = &[
    LabelKey::Milestone,
    LabelKey::Goal,
    LabelKey::Task,
    LabelKey::Title,
];
const ANY_LABEL: &[LabelKey] = &[
    LabelKey::Task,
    LabelKey::Action,
    LabelKey::Title,
    LabelKey::Milestone,
    LabelKey::Goal,
];

// ────────────────────────────────────────────────────────────────────────────
// Decoded shapes
// ────────────────────────────────────────────────────────────────────────────

/// A checklist entry given as an object rather than a plain string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailedItem {
    #[serde(deserialize_with = "lenient_text")]
    pub task: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub action: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub milestone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub goal: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub timeline: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub why: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub why_critical: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub steps: Vec<String>,
}

impl DetailedItem {
    fn label(&self, keys: &[LabelKey]) -> Option<&str> {
        keys.iter().find_map(|key| {
            let field = match key {
                LabelKey::Task => &self.task,
                LabelKey::Action => &self.action,
                LabelKey::Title => &self.title,
                LabelKey::Milestone => &self.milestone,
                LabelKey::Goal => &self.goal,
            };
            field.as_deref()
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlanItem {
    Text(String),
    Detailed(DetailedItem),
    /// Numbers, nulls and other values that carry no renderable text.
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InternshipStrategy {
    #[serde(deserialize_with = "lenient")]
    pub target_companies: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_text")]
    pub when_to_apply: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub application_tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoachingPlan {
    #[serde(deserialize_with = "lenient")]
    short_term_checklist: Vec<PlanItem>,
    #[serde(rename = "shortTermChecklist", deserialize_with = "lenient")]
    short_term_checklist_camel: Vec<PlanItem>,
    #[serde(deserialize_with = "lenient")]
    long_term_checklist: Vec<PlanItem>,
    #[serde(rename = "longTermChecklist", deserialize_with = "lenient")]
    long_term_checklist_camel: Vec<PlanItem>,
    #[serde(deserialize_with = "lenient")]
    recommended_fsu_courses: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    recommended_courses: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    recommended_certifications: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    internship_strategy: Option<InternshipStrategy>,
    #[serde(deserialize_with = "lenient_string")]
    overall_strategy: Option<String>,
}

impl CoachingPlan {
    pub fn from_value(value: &Value) -> Self {
        decode_or_default(value)
    }

    pub fn short_term(&self) -> &[PlanItem] {
        first_non_empty(&[
            self.short_term_checklist.as_slice(),
            self.short_term_checklist_camel.as_slice(),
        ])
    }

    pub fn long_term(&self) -> &[PlanItem] {
        first_non_empty(&[
            self.long_term_checklist.as_slice(),
            self.long_term_checklist_camel.as_slice(),
        ])
    }

    pub fn courses(&self) -> &[String] {
        first_non_empty(&[
            self.recommended_fsu_courses.as_slice(),
            self.recommended_courses.as_slice(),
        ])
    }

    pub fn certifications(&self) -> &[String] {
        &self.recommended_certifications
    }

    pub fn internship_strategy(&self) -> Option<&InternshipStrategy> {
        self.internship_strategy.as_ref()
    }

    pub fn overall_strategy(&self) -> Option<&str> {
        self.overall_strategy.as_deref()
    }

    /// Fills every section this plan leaves empty from `fallback`.
    fn backfilled_from(mut self, fallback: CoachingPlan) -> Self {
        fn fill<T>(slot: &mut Vec<T>, other: Vec<T>) {
            if slot.is_empty() {
                *slot = other;
            }
        }
        fill(&mut self.short_term_checklist, fallback.short_term_checklist);
        fill(
            &mut self.short_term_checklist_camel,
            fallback.short_term_checklist_camel,
        );
        fill(&mut self.long_term_checklist, fallback.long_term_checklist);
        fill(
            &mut self.long_term_checklist_camel,
            fallback.long_term_checklist_camel,
        );
        fill(
            &mut self.recommended_fsu_courses,
            fallback.recommended_fsu_courses,
        );
        fill(&mut self.recommended_courses, fallback.recommended_courses);
        fill(
            &mut self.recommended_certifications,
            fallback.recommended_certifications,
        );
        self.internship_strategy = self.internship_strategy.or(fallback.internship_strategy);
        self.overall_strategy = self.overall_strategy.or(fallback.overall_strategy);
        self
    }
}

/// A decoded `/coach` payload.
#[derive(Debug, Clone)]
pub enum CoachingResponse {
    Nested {
        plan: CoachingPlan,
        response: Option<String>,
    },
    Flat {
        plan: CoachingPlan,
        response: Option<String>,
    },
    Text(String),
    Unrecognized,
}

impl CoachingResponse {
    pub fn decode(value: &Value) -> Self {
        let map = match value {
            Value::String(text) => return CoachingResponse::Text(text.clone()),
            Value::Object(map) => map,
            _ => return CoachingResponse::Unrecognized,
        };

        let response = map
            .get("response")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let top = CoachingPlan::from_value(value);

        let nested = NESTED_PLAN_KEYS
            .iter()
            .find_map(|key| map.get(*key).filter(|v| v.is_object()));

        match nested {
            Some(inner) => CoachingResponse::Nested {
                plan: CoachingPlan::from_value(inner).backfilled_from(top),
                response,
            },
            None => CoachingResponse::Flat {
                plan: top,
                response,
            },
        }
    }

    pub fn plan(&self) -> Option<&CoachingPlan> {
        match self {
            CoachingResponse::Nested { plan, .. } | CoachingResponse::Flat { plan, .. } => {
                Some(plan)
            }
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&str> {
        match self {
            CoachingResponse::Nested { response, .. } | CoachingResponse::Flat { response, .. } => {
                response.as_deref()
            }
            _ => None,
        }
    }

    /// Renders the chat-style roadmap. Never returns an empty string.
    pub fn render(&self) -> String {
        let (plan, trailing_response) = match self {
            CoachingResponse::Nested { plan, .. } => (plan, None),
            CoachingResponse::Flat { plan, response } => (plan, response.as_deref()),
            CoachingResponse::Text(text) if !text.trim().is_empty() => return text.clone(),
            CoachingResponse::Text(_) | CoachingResponse::Unrecognized => {
                return FALLBACK_REPLY.to_string()
            }
        };

        let mut parts = vec![ROADMAP_HEADER.to_string()];

        if !plan.short_term().is_empty() {
            parts.push("**Short-Term Actions (This Week/Month)**\n".to_string());
            push_roadmap_items(&mut parts, plan.short_term(), SHORT_TERM_LABELS);
        }
        if !plan.long_term().is_empty() {
            parts.push("**Long-Term Milestones**\n".to_string());
            push_roadmap_items(&mut parts, plan.long_term(), LONG_TERM_LABELS);
        }
        push_plan_resources(&mut parts, plan);

        if let Some(response) = trailing_response {
            parts.push(response.to_string());
        }

        if parts.len() <= 1 {
            return self
                .response()
                .map(str::to_string)
                .unwrap_or_else(|| FALLBACK_REPLY.to_string());
        }

        parts.join("\n")
    }

    /// Appends the coach's sections in the improvement-plan layout used for a
    /// single listing. Returns `false` when the payload carried nothing to show.
    pub fn render_improvement(&self, parts: &mut Vec<String>) -> bool {
        let Some(plan) = self.plan() else {
            return false;
        };
        let before = parts.len();

        if !plan.short_term().is_empty() {
            parts.push("**Short-Term Actions (This Week/Month)**\n".to_string());
            for (i, item) in plan.short_term().iter().enumerate() {
                let n = i + 1;
                match item {
                    PlanItem::Text(text) => parts.push(format!("{n}. {text}")),
                    PlanItem::Detailed(detail) => {
                        let label = detail.label(SHORT_TERM_LABELS).unwrap_or("Action Item");
                        parts.push(format!("{n}. **{label}**"));
                        push_detail(parts, "Timeline", &detail.timeline);
                        push_detail(parts, "Priority", &detail.priority);
                        push_detail(parts, "Why", &detail.why);
                    }
                    PlanItem::Other(_) => {}
                }
                parts.push(String::new());
            }
        }

        if !plan.long_term().is_empty() {
            parts.push("**Long-Term Milestones**\n".to_string());
            for (i, item) in plan.long_term().iter().enumerate() {
                let n = i + 1;
                match item {
                    PlanItem::Text(text) => parts.push(format!("{n}. {text}")),
                    PlanItem::Detailed(detail) => {
                        let label = detail.label(LONG_TERM_LABELS).unwrap_or("Milestone");
                        let timeline = detail
                            .timeline
                            .as_deref()
                            .map(|t| format!(" ({t})"))
                            .unwrap_or_default();
                        parts.push(format!("{n}. **{label}**{timeline}"));
                        for step in &detail.steps {
                            parts.push(format!("   - {step}"));
                        }
                        push_detail(parts, "Why", &detail.why_critical);
                        push_detail(parts, "Why", &detail.why);
                    }
                    PlanItem::Other(_) => {}
                }
                parts.push(String::new());
            }
        }

        push_plan_resources(parts, plan);

        if let Some(response) = self.response() {
            parts.push(format!("**Advice:** {response}\n"));
        }

        parts.len() > before
    }

    /// Plain-text checklist entries (short-term first) for merging into the
    /// student's checklist.
    pub fn checklist_texts(&self) -> Vec<String> {
        let Some(plan) = self.plan() else {
            return Vec::new();
        };
        plan.short_term()
            .iter()
            .chain(plan.long_term())
            .filter_map(|item| match item {
                PlanItem::Text(text) => Some(text.trim().to_string()),
                PlanItem::Detailed(detail) => detail.label(ANY_LABEL).map(str::to_string),
                PlanItem::Other(_) => None,
            })
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Long-term milestones flattened to one line each, e.g. `Ship a portfolio (6 months)`.
    pub fn long_term_tips(&self) -> Vec<String> {
        let Some(plan) = self.plan() else {
            return Vec::new();
        };
        plan.long_term()
            .iter()
            .filter_map(|item| match item {
                PlanItem::Text(text) => Some(text.clone()),
                PlanItem::Detailed(detail) => match &detail.milestone {
                    Some(milestone) => Some(match &detail.timeline {
                        Some(timeline) => format!("{milestone} ({timeline})"),
                        None => milestone.clone(),
                    }),
                    None => detail.task.clone().or_else(|| detail.goal.clone()),
                },
                PlanItem::Other(_) => None,
            })
            .collect()
    }

    /// Whether the payload carried a structured plan rather than free text only.
    pub fn has_plan(&self) -> bool {
        match self {
            CoachingResponse::Nested { .. } => true,
            CoachingResponse::Flat { plan, .. } => {
                !plan.short_term().is_empty()
                    || !plan.long_term().is_empty()
                    || !plan.courses().is_empty()
                    || !plan.certifications().is_empty()
            }
            CoachingResponse::Text(_) | CoachingResponse::Unrecognized => false,
        }
    }
}

/// Decodes and renders in one step.
pub fn render_coaching(value: &Value) -> String {
    CoachingResponse::decode(value).render()
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering helpers
// ────────────────────────────────────────────────────────────────────────────

fn push_detail(parts: &mut Vec<String>, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        parts.push(format!("   {name}: {value}"));
    }
}

fn push_roadmap_items(parts: &mut Vec<String>, items: &[PlanItem], labels: &[LabelKey]) {
    for (i, item) in items.iter().enumerate() {
        let n = i + 1;
        match item {
            PlanItem::Text(text) => parts.push(format!("{n}. {text}")),
            PlanItem::Detailed(detail) => {
                parts.push(format!("{n}. **{}**", detail.label(labels).unwrap_or("Item")));
                push_detail(parts, "Timeline", &detail.timeline);
                push_detail(parts, "Priority", &detail.priority);
                push_detail(parts, "Why", &detail.why);
                push_detail(parts, "Why", &detail.why_critical);
                for step in &detail.steps {
                    parts.push(format!("   - {step}"));
                }
            }
            PlanItem::Other(_) => {}
        }
        parts.push(String::new());
    }
}

/// Courses, certifications, internship strategy and overall strategy.
fn push_plan_resources(parts: &mut Vec<String>, plan: &CoachingPlan) {
    if !plan.courses().is_empty() {
        parts.push("**Recommended FSU Courses**".to_string());
        parts.extend(plan.courses().iter().map(|c| format!("- {c}")));
        parts.push(String::new());
    }

    if !plan.certifications().is_empty() {
        parts.push("**Certifications to Pursue**".to_string());
        parts.extend(plan.certifications().iter().map(|c| format!("- {c}")));
        parts.push(String::new());
    }

    if let Some(strategy) = plan.internship_strategy() {
        parts.push("**Internship Strategy**".to_string());
        if let Some(companies) = &strategy.target_companies {
            parts.push(format!("Target Companies: {}", companies.join(", ")));
        }
        if let Some(when) = &strategy.when_to_apply {
            parts.push(format!("When to Apply: {when}"));
        }
        if let Some(tips) = &strategy.application_tips {
            parts.push("Application Tips:".to_string());
            parts.extend(tips.iter().map(|t| format!("- {t}")));
        }
        parts.push(String::new());
    }

    if let Some(overall) = plan.overall_strategy() {
        parts.push(format!("**Overall Strategy:** {overall}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_falls_back() {
        assert_eq!(render_coaching(&json!({})), FALLBACK_REPLY);
    }

    #[test]
    fn test_non_object_payloads_fall_back() {
        assert_eq!(render_coaching(&json!(42)), FALLBACK_REPLY);
        assert_eq!(render_coaching(&json!(null)), FALLBACK_REPLY);
        assert_eq!(render_coaching(&json!("   ")), FALLBACK_REPLY);
    }

    #[test]
    fn test_bare_string_is_returned_as_is() {
        assert_eq!(render_coaching(&json!("Keep going!")), "Keep going!");
    }

    #[test]
    fn test_short_term_strings_are_numbered_in_order() {
        let text = render_coaching(&json!({ "short_term_checklist": ["A", "B"] }));
        assert!(text.starts_with(ROADMAP_HEADER));
        let a = text.find("1. A").expect("first item");
        let b = text.find("2. B").expect("second item");
        assert!(a < b);
        assert!(text.contains("**Short-Term Actions (This Week/Month)**"));
    }

    #[test]
    fn test_nested_plan_renders_detailed_items() {
        let text = render_coaching(&json!({
            "coaching_plan": {
                "short_term_checklist": [{
                    "action": "Finish React course",
                    "timeline": "2 weeks",
                    "priority": "High",
                    "why": "Core requirement"
                }],
                "long_term_checklist": [{
                    "goal": "Land an internship",
                    "steps": ["Apply to 20 roles", "Prep interviews"],
                    "why_critical": "Experience compounds"
                }]
            }
        }));
        assert!(text.contains("1. **Finish React course**"));
        assert!(text.contains("   Timeline: 2 weeks"));
        assert!(text.contains("   Priority: High"));
        assert!(text.contains("   Why: Core requirement"));
        assert!(text.contains("1. **Land an internship**"));
        assert!(text.contains("   - Apply to 20 roles"));
        assert!(text.contains("   Why: Experience compounds"));
    }

    #[test]
    fn test_object_without_label_uses_item() {
        let text = render_coaching(&json!({ "short_term_checklist": [{ "timeline": 3 }] }));
        assert!(text.contains("1. **Item**"));
        assert!(text.contains("   Timeline: 3"));
    }

    #[test]
    fn test_top_level_fields_backfill_nested_plan() {
        let response = CoachingResponse::decode(&json!({
            "coaching_plan": { "overall_strategy": "Focus on front-end" },
            "recommended_certifications": ["AWS Cloud Practitioner"]
        }));
        let text = response.render();
        assert!(text.contains("**Overall Strategy:** Focus on front-end"));
        assert!(text.contains("- AWS Cloud Practitioner"));
    }

    #[test]
    fn test_camel_case_checklist_is_recognised() {
        let text = render_coaching(&json!({ "longTermChecklist": ["Build portfolio"] }));
        assert!(text.contains("**Long-Term Milestones**"));
        assert!(text.contains("1. Build portfolio"));
    }

    #[test]
    fn test_wrongly_typed_section_does_not_hide_others() {
        let text = render_coaching(&json!({
            "short_term_checklist": "not a list",
            "recommended_fsu_courses": ["COP 3330"]
        }));
        assert!(!text.contains("Short-Term"));
        assert!(text.contains("**Recommended FSU Courses**\n- COP 3330"));
    }

    #[test]
    fn test_internship_strategy_section() {
        let text = render_coaching(&json!({
            "internship_strategy": {
                "target_companies": ["Google", "Stripe"],
                "when_to_apply": "September",
                "application_tips": ["Apply early"]
            }
        }));
        assert!(text.contains("Target Companies: Google, Stripe"));
        assert!(text.contains("When to Apply: September"));
        assert!(text.contains("Application Tips:\n- Apply early"));
    }

    #[test]
    fn test_flat_response_is_appended_after_header() {
        let text = render_coaching(&json!({ "response": "Try networking." }));
        assert_eq!(text, format!("{ROADMAP_HEADER}\nTry networking."));
    }

    #[test]
    fn test_nested_response_without_sections_returns_response() {
        let text = render_coaching(&json!({
            "coaching_plan": {},
            "response": "Plan pending."
        }));
        assert_eq!(text, "Plan pending.");
    }

    #[test]
    fn test_checklist_texts_collects_strings_and_labels() {
        let response = CoachingResponse::decode(&json!({
            "short_term_checklist": ["Update resume", { "task": "Practice STAR" }, 7],
            "long_term_checklist": [{ "milestone": "Earn AWS cert" }, ""]
        }));
        assert_eq!(
            response.checklist_texts(),
            vec!["Update resume", "Practice STAR", "Earn AWS cert"]
        );
    }

    #[test]
    fn test_long_term_tips_include_timeline() {
        let response = CoachingResponse::decode(&json!({
            "coaching_plan": {
                "long_term_checklist": [
                    { "milestone": "Ship a portfolio", "timeline": "6 months" },
                    { "goal": "Join a research lab" },
                    "Attend career fairs"
                ]
            }
        }));
        assert_eq!(
            response.long_term_tips(),
            vec![
                "Ship a portfolio (6 months)",
                "Join a research lab",
                "Attend career fairs"
            ]
        );
    }

    #[test]
    fn test_improvement_layout_uses_inline_timeline_and_advice() {
        let response = CoachingResponse::decode(&json!({
            "plan": {
                "long_term_checklist": [{ "milestone": "Contribute to OSS", "timeline": "1 year" }]
            },
            "response": "Stay consistent."
        }));
        let mut parts = Vec::new();
        assert!(response.render_improvement(&mut parts));
        assert!(parts.contains(&"1. **Contribute to OSS** (1 year)".to_string()));
        assert!(parts.contains(&"**Advice:** Stay consistent.\n".to_string()));
    }

    #[test]
    fn test_improvement_layout_reports_nothing_for_text() {
        let mut parts = Vec::new();
        assert!(!CoachingResponse::decode(&json!("hello")).render_improvement(&mut parts));
        assert!(parts.is_empty());
    }

    #[test]
    fn test_has_plan_distinguishes_free_text() {
        assert!(CoachingResponse::decode(&json!({ "coaching_plan": {} })).has_plan());
        assert!(CoachingResponse::decode(&json!({ "recommended_certifications": ["AWS"] })).has_plan());
        assert!(!CoachingResponse::decode(&json!({ "response": "Keep going" })).has_plan());
        assert!(!CoachingResponse::decode(&json!("text")).has_plan());
    }
}
