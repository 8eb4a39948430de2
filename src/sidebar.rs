//! Progress sidebar: a pure projection of step descriptors and the unified
//! step index.

use serde::Serialize;

use crate::job_post::JobPostStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIcon {
    Building,
    Briefcase,
}

/// Display metadata for one sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub title: String,
    pub description: String,
    pub icon: StepIcon,
}

impl StepDescriptor {
    fn new(title: &str, description: &str, icon: StepIcon) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon,
        }
    }
}

/// Descriptors for the company form only.
pub fn company_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(
            "Company details",
            "Step 1: Basic information",
            StepIcon::Building,
        ),
        StepDescriptor::new(
            "Company details",
            "Step 2: Logo & description",
            StepIcon::Building,
        ),
    ]
}

/// Company steps followed by the job post steps.
pub fn all_steps() -> Vec<StepDescriptor> {
    let mut steps = company_steps();
    steps.extend(JobPostStep::ALL.iter().map(|step| {
        StepDescriptor::new(
            "Create job post",
            &format!("Step {}: {}", step.number(), step.title()),
            StepIcon::Briefcase,
        )
    }));
    steps
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Complete,
    Active,
    Pending,
}

impl StepStatus {
    /// Status of the entry at 1-based `position` when `current` is active.
    pub fn at(position: usize, current: usize) -> Self {
        match position.cmp(&current) {
            std::cmp::Ordering::Less => Self::Complete,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub position: usize,
    #[serde(flatten)]
    pub descriptor: StepDescriptor,
    pub status: StepStatus,
}

/// Rendered sidebar state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub entries: Vec<SidebarEntry>,
    pub current: usize,
    /// Connector fill, in `[0, 1]`.
    pub fill: f64,
    /// Mobile header, e.g. "Step 3 of 6".
    pub compact_label: String,
    pub compact_percent: u32,
}

impl SidebarView {
    pub fn new(steps: Vec<StepDescriptor>, current: usize) -> Self {
        let total = steps.len();
        let entries = steps
            .into_iter()
            .enumerate()
            .map(|(i, descriptor)| SidebarEntry {
                position: i + 1,
                descriptor,
                status: StepStatus::at(i + 1, current),
            })
            .collect();

        Self {
            entries,
            current,
            fill: fill_fraction(current, total),
            compact_label: format!("Step {} of {}", current, total),
            compact_percent: compact_percent(current, total),
        }
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// `(current - 1) / (total - 1)`, clamped. Zero when there is one step or none.
pub fn fill_fraction(current: usize, total: usize) -> f64 {
    if total <= 1 {
        return 0.0;
    }
    let fraction = (current as f64 - 1.0) / (total as f64 - 1.0);
    fraction.clamp(0.0, 1.0)
}

pub fn compact_percent(current: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (current as f64 / total as f64 * 100.0).round() as u32
}
