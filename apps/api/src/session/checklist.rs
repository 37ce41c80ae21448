//! Checklist operations: toggling, progress, and merging coach suggestions.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::checklist::{ChecklistCategory, ChecklistItem};

/// Coach-suggested items are numbered from here unless existing ids are higher.
const COACH_ID_START: u32 = 100;

/// Keyword rules applied in order; the first hit wins. Unmatched text is a skill.
const CATEGORY_KEYWORDS: &[(ChecklistCategory, &[&str])] = &[
    (ChecklistCategory::Skills, &["skill", "learn", "technical"]),
    (ChecklistCategory::Resume, &["resume", "cv", "portfolio"]),
    (
        ChecklistCategory::Networking,
        &["network", "mentor", "connect", "alumni"],
    ),
    (ChecklistCategory::Applications, &["applic", "apply", "job"]),
    (
        ChecklistCategory::InterviewPrep,
        &["interview", "practice", "prep"],
    ),
];

pub fn categorize(text: &str) -> ChecklistCategory {
    let lower = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ChecklistCategory::Skills)
}

/// Flips the item's completed flag. `None` when no item has `id`.
pub fn toggle(items: &mut [ChecklistItem], id: u32) -> Option<&ChecklistItem> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    item.completed = !item.completed;
    Some(item)
}

/// Appends suggestions whose lowercase text is not already present, returning
/// how many were added.
pub fn merge_suggestions<I, S>(items: &mut Vec<ChecklistItem>, suggestions: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen: HashSet<String> = items.iter().map(|i| i.text.to_lowercase()).collect();
    let mut next_id = items
        .iter()
        .map(|i| i.id + 1)
        .max()
        .unwrap_or(0)
        .max(COACH_ID_START);

    let before = items.len();
    for text in suggestions {
        let text: String = text.into();
        if text.trim().is_empty() || !seen.insert(text.to_lowercase()) {
            continue;
        }
        items.push(ChecklistItem {
            id: next_id,
            category: categorize(&text),
            text,
            completed: false,
            suggested_by_coach: true,
        });
        next_id += 1;
    }
    items.len() - before
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub category: ChecklistCategory,
    pub total: usize,
    pub done: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistProgress {
    pub total: usize,
    pub done: usize,
    pub percent: u32,
    pub categories: Vec<CategoryProgress>,
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}

pub fn progress(items: &[ChecklistItem]) -> ChecklistProgress {
    let done = items.iter().filter(|i| i.completed).count();
    let categories = ChecklistCategory::ALL
        .into_iter()
        .map(|category| {
            let in_category = items.iter().filter(|i| i.category == category);
            let total = in_category.clone().count();
            let done = in_category.filter(|i| i.completed).count();
            CategoryProgress {
                category,
                total,
                done,
                percent: percent(done, total),
            }
        })
        .collect();
    ChecklistProgress {
        total: items.len(),
        done,
        percent: percent(done, items.len()),
        categories,
    }
}

/// The first `limit` open items in checklist order.
pub fn next_open(items: &[ChecklistItem], limit: usize) -> Vec<ChecklistItem> {
    items
        .iter()
        .filter(|i| !i.completed)
        .take(limit)
        .cloned()
        .collect()
}
