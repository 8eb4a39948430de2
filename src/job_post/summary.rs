//! Read-only review shown on the last job post step.

use serde::Serialize;

use super::model::JobPostDraft;

/// Display strings for the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub company: String,
    pub title: String,
    pub job_type: String,
    pub location: String,
    pub salary: String,
    pub workplace: String,
    pub experience: String,
    pub must_have_qualifications: Option<String>,
    pub preferred_qualifications: Option<String>,
}

impl JobSummary {
    pub fn from_draft(draft: &JobPostDraft) -> Self {
        let title = non_blank(&draft.job_title).unwrap_or_else(|| "Not specified".to_string());
        let location = match non_blank(&draft.city) {
            Some(city) => format!("{}, {}", city, draft.country.label()),
            None => draft.country.label().to_string(),
        };
        let salary = format!(
            "{} {} - {}",
            draft.currency.symbol_code(),
            non_blank(&draft.min_salary).unwrap_or_else(|| "0".to_string()),
            non_blank(&draft.max_salary).unwrap_or_else(|| "0".to_string()),
        );

        Self {
            company: draft.company.clone(),
            title,
            job_type: draft.job_type.label().to_string(),
            location,
            salary,
            workplace: draft.workplace_type.label().to_string(),
            experience: draft.experience_level.label().to_string(),
            must_have_qualifications: non_blank(&draft.must_have_qualifications),
            preferred_qualifications: non_blank(&draft.desired_qualifications),
        }
    }

    /// Label/value rows in display order. Empty qualifications are omitted.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            ("Company", self.company.as_str()),
            ("Job Title", self.title.as_str()),
            ("Job Type", self.job_type.as_str()),
            ("Location", self.location.as_str()),
            ("Salary Range", self.salary.as_str()),
            ("Workplace", self.workplace.as_str()),
            ("Experience", self.experience.as_str()),
        ];
        if let Some(ref q) = self.must_have_qualifications {
            rows.push(("Must-have Qualifications", q.as_str()));
        }
        if let Some(ref q) = self.preferred_qualifications {
            rows.push(("Preferred Qualifications", q.as_str()));
        }
        rows
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
