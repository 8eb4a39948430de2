//! Job post wizard steps.

use serde::{Deserialize, Serialize};

/// The four steps of the job post wizard. No step is gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPostStep {
    #[default]
    BasicInformation,
    JobDetails,
    IdealQualifications,
    ReviewAndPublish,
}

impl JobPostStep {
    pub const TOTAL: u32 = 4;

    pub const ALL: [JobPostStep; 4] = [
        Self::BasicInformation,
        Self::JobDetails,
        Self::IdealQualifications,
        Self::ReviewAndPublish,
    ];

    /// 1-based step number.
    pub fn number(&self) -> u32 {
        match self {
            Self::BasicInformation => 1,
            Self::JobDetails => 2,
            Self::IdealQualifications => 3,
            Self::ReviewAndPublish => 4,
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        Self::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::JobDetails => "Job Details",
            Self::IdealQualifications => "Ideal Qualifications",
            Self::ReviewAndPublish => "Review & Publish",
        }
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last() { "Create" } else { "Continue" }
    }

    /// The first step's back button reads "Cancel" but does nothing.
    pub fn back_label(&self) -> &'static str {
        if self.previous().is_none() {
            "Cancel"
        } else {
            "Back"
        }
    }
}

impl std::fmt::Display for JobPostStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BasicInformation => "basic_information",
            Self::JobDetails => "job_details",
            Self::IdealQualifications => "ideal_qualifications",
            Self::ReviewAndPublish => "review_and_publish",
        };
        write!(f, "{s}")
    }
}
