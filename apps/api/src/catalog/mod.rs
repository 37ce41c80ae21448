//! In-memory catalog of listings, mentors and seed data. Built once at startup and
//! shared read-only through `AppState`.

pub mod handlers;
pub mod jobs;
pub mod seed;
pub mod walkthrough;

use serde::Deserialize;

use crate::models::checklist::ChecklistItem;
use crate::models::job::{Job, JobSource};
use crate::models::mentor::Mentor;
use crate::models::profile::StudentProfile;

pub struct Catalog {
    jobs: Vec<Job>,
    rotated_jobs: Vec<Job>,
    mentors: Vec<Mentor>,
    student: StudentProfile,
}

impl Catalog {
    pub fn seeded() -> Self {
        let jobs = jobs::seed_jobs();
        let rotated_jobs = jobs::rotated(&jobs);
        Self {
            jobs,
            rotated_jobs,
            mentors: seed::seed_mentors(),
            student: seed::demo_student(),
        }
    }

    /// The listing in display order. `alternate` selects the refreshed rotation.
    pub fn jobs(&self, alternate: bool) -> &[Job] {
        if alternate {
            &self.rotated_jobs
        } else {
            &self.jobs
        }
    }

    pub fn job(&self, id: u32) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn student(&self) -> &StudentProfile {
        &self.student
    }

    pub fn seed_checklist(&self) -> Vec<ChecklistItem> {
        seed::seed_checklist()
    }
}

/// Query-string filters for the jobs listing. Empty or `all` values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobFilter {
    pub q: Option<String>,
    pub location: Option<String>,
    pub remote_only: bool,
    pub paid_only: bool,
    pub source: Option<String>,
    pub alt: bool,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(q) = active(&self.q) {
            let q = q.to_lowercase();
            if !job.title.to_lowercase().contains(&q) && !job.company.to_lowercase().contains(&q) {
                return false;
            }
        }
        if let Some(location) = active(&self.location) {
            if job.location != location {
                return false;
            }
        }
        if self.remote_only && !job.remote {
            return false;
        }
        if self.paid_only && !job.paid {
            return false;
        }
        if let Some(source) = active(&self.source) {
            // An unrecognised source matches nothing rather than everything.
            if JobSource::parse(source) != Some(job.source) {
                return false;
            }
        }
        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Distinct locations across `jobs`, sorted.
pub fn locations(jobs: &[Job]) -> Vec<String> {
    let mut locs: Vec<String> = jobs.iter().map(|j| j.location.clone()).collect();
    locs.sort();
    locs.dedup();
    locs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keeps_every_job() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.jobs(true).len(), catalog.jobs(false).len());
        assert_eq!(catalog.jobs(true)[0].id, 7);
        assert_eq!(catalog.jobs(true)[6].id, 1);
    }

    #[test]
    fn test_filter_by_query_matches_title_or_company() {
        let catalog = Catalog::seeded();
        let filter = JobFilter {
            q: Some("shopnest".to_string()),
            ..Default::default()
        };
        let hits: Vec<u32> = catalog
            .jobs(false)
            .iter()
            .filter(|j| filter.matches(j))
            .map(|j| j.id)
            .collect();
        assert_eq!(hits, vec![8]);
    }

    #[test]
    fn test_filter_combines_remote_paid_and_source() {
        let catalog = Catalog::seeded();
        let filter = JobFilter {
            remote_only: true,
            paid_only: true,
            source: Some("Nole Network".to_string()),
            ..Default::default()
        };
        let hits: Vec<u32> = catalog
            .jobs(false)
            .iter()
            .filter(|j| filter.matches(j))
            .map(|j| j.id)
            .collect();
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_all_is_treated_as_no_filter() {
        let catalog = Catalog::seeded();
        let filter = JobFilter {
            location: Some("all".to_string()),
            source: Some("all".to_string()),
            ..Default::default()
        };
        assert!(catalog.jobs(false).iter().all(|j| filter.matches(j)));
    }

    #[test]
    fn test_locations_are_sorted_and_distinct() {
        let catalog = Catalog::seeded();
        let locs = locations(catalog.jobs(false));
        assert_eq!(locs.len(), 10);
        assert_eq!(locs.first().map(String::as_str), Some("Atlanta, GA"));
        assert!(locs.windows(2).all(|w| w[0] < w[1]));
    }
}
