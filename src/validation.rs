//! Per-step field validation for the company form.
//!
//! Validation is a pure function of `(step, draft)`. It returns the complete
//! error map for that step; callers replace their previous map wholesale.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::company::{CompanyField, CompanyProfileDraft, CompanyStep};
use crate::config::OnboardingConfig;

static WEBSITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://.+\..+").expect("valid website pattern"));

/// Field → message. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<CompanyField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: CompanyField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CompanyField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: CompanyField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop one field's error. Returns whether there was one.
    pub fn clear(&mut self, field: CompanyField) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Offending fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = CompanyField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompanyField, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Length bounds for the free-text "about" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub about_min_chars: usize,
    pub about_max_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            about_min_chars: 50,
            about_max_chars: 500,
        }
    }
}

impl From<&OnboardingConfig> for ValidationLimits {
    fn from(config: &OnboardingConfig) -> Self {
        Self {
            about_min_chars: config.about_min_chars,
            about_max_chars: config.about_max_chars,
        }
    }
}

/// Validate `step` with the default limits.
pub fn validate(step: CompanyStep, draft: &CompanyProfileDraft) -> ValidationErrors {
    validate_with(step, draft, &ValidationLimits::default())
}

/// Validate the fields that belong to `step`.
pub fn validate_with(
    step: CompanyStep,
    draft: &CompanyProfileDraft,
    limits: &ValidationLimits,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        CompanyStep::BasicInfo => {
            if let Some(msg) = check_required(&draft.company_name, "Company name is required") {
                errors.insert(CompanyField::CompanyName, msg);
            }
            if let Some(msg) = check_website(&draft.website) {
                errors.insert(CompanyField::Website, msg);
            }
            if let Some(msg) = check_required(&draft.location, "Location is required") {
                errors.insert(CompanyField::Location, msg);
            }
        }
        CompanyStep::LogoAndAbout => {
            if draft.logo.is_none() {
                errors.insert(CompanyField::Logo, "Company logo is required");
            }
            if let Some(msg) = check_about(&draft.about, limits) {
                errors.insert(CompanyField::About, msg);
            }
        }
    }

    errors
}

fn check_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

/// Website must be present and look like `scheme://host.tld`.
pub fn check_website(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Website is required".to_string());
    }
    if !WEBSITE.is_match(value) {
        return Some("Please enter a valid website URL".to_string());
    }
    None
}

/// About text must be present and within the length bounds once trimmed.
pub fn check_about(value: &str, limits: &ValidationLimits) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("About your company is required".to_string());
    }
    let len = trimmed.chars().count();
    if len < limits.about_min_chars {
        return Some(format!(
            "Please provide at least {} characters",
            limits.about_min_chars
        ));
    }
    if len > limits.about_max_chars {
        return Some(format!(
            "Description must be less than {} characters",
            limits.about_max_chars
        ));
    }
    None
}
