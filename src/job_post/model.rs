//! Job post draft, its field names, and the option lists behind its selects.

use serde::{Deserialize, Serialize};

use super::state::JobPostStep;
use crate::error::FlowError;

/// Declares a select-box option enum with its wire code and display label.
macro_rules! select_options {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// Wire code, e.g. `"fulltime"`.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Human-readable label, e.g. `"Full-time"`.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(format!("Unknown {}: {}", stringify!($name), s)),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

select_options! {
    /// Employment type.
    JobType, default = Fulltime {
        Fulltime => ("fulltime", "Full-time"),
        Parttime => ("parttime", "Part-time"),
        Contract => ("contract", "Contract"),
        Internship => ("internship", "Internship"),
    }
}

select_options! {
    /// Where the work happens.
    WorkplaceType, default = Onsite {
        Remote => ("remote", "Remote"),
        Onsite => ("onsite", "On-Site"),
        Hybrid => ("hybrid", "Hybrid"),
    }
}

select_options! {
    /// Country of the position.
    Country, default = Us {
        Us => ("us", "United States"),
        Uk => ("uk", "United Kingdom"),
        Ca => ("ca", "Canada"),
        Au => ("au", "Australia"),
        In => ("in", "India"),
    }
}

select_options! {
    /// Salary currency.
    Currency, default = Usd {
        Usd => ("usd", "USD ($)"),
        Eur => ("eur", "EUR (€)"),
        Gbp => ("gbp", "GBP (£)"),
        Inr => ("inr", "INR (₹)"),
    }
}

select_options! {
    /// Seniority of the role.
    ExperienceLevel, default = Mid {
        Entry => ("entry", "Entry Level"),
        Mid => ("mid", "Mid Level"),
        Senior => ("senior", "Senior Level"),
        Executive => ("executive", "Executive"),
    }
}

select_options! {
    /// Publication state chosen on the review step.
    JobStatus, default = Published {
        Draft => ("draft", "Draft"),
        Published => ("published", "Published"),
    }
}

impl Currency {
    /// Currency code shown in salary ranges, e.g. `"USD"`.
    pub fn symbol_code(&self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }
}

/// A field of the job post wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Company,
    JobTitle,
    JobType,
    WorkplaceType,
    City,
    Country,
    ExperienceLevel,
    MinSalary,
    MaxSalary,
    Currency,
    JobDescription,
    Responsibilities,
    Requirements,
    Benefits,
    MustHaveQualifications,
    DesiredQualifications,
    JobStatus,
}

impl JobField {
    pub const ALL: [JobField; 17] = [
        Self::Company,
        Self::JobTitle,
        Self::JobType,
        Self::WorkplaceType,
        Self::City,
        Self::Country,
        Self::ExperienceLevel,
        Self::MinSalary,
        Self::MaxSalary,
        Self::Currency,
        Self::JobDescription,
        Self::Responsibilities,
        Self::Requirements,
        Self::Benefits,
        Self::MustHaveQualifications,
        Self::DesiredQualifications,
        Self::JobStatus,
    ];

    /// The wizard step that shows this field.
    pub fn step(&self) -> JobPostStep {
        match self {
            Self::Company
            | Self::JobTitle
            | Self::JobType
            | Self::WorkplaceType
            | Self::City
            | Self::Country
            | Self::ExperienceLevel
            | Self::MinSalary
            | Self::MaxSalary
            | Self::Currency => JobPostStep::BasicInformation,
            Self::JobDescription | Self::Responsibilities | Self::Requirements | Self::Benefits => {
                JobPostStep::JobDetails
            }
            Self::MustHaveQualifications | Self::DesiredQualifications => {
                JobPostStep::IdealQualifications
            }
            Self::JobStatus => JobPostStep::ReviewAndPublish,
        }
    }

    /// The rich-text editor behind this field, if it has one.
    pub fn rich_text(&self) -> Option<RichTextField> {
        match self {
            Self::JobDescription => Some(RichTextField::JobDescription),
            Self::Responsibilities => Some(RichTextField::Responsibilities),
            Self::Requirements => Some(RichTextField::Requirements),
            Self::Benefits => Some(RichTextField::Benefits),
            _ => None,
        }
    }
}

impl std::fmt::Display for JobField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Company => "company",
            Self::JobTitle => "job_title",
            Self::JobType => "job_type",
            Self::WorkplaceType => "workplace_type",
            Self::City => "city",
            Self::Country => "country",
            Self::ExperienceLevel => "experience_level",
            Self::MinSalary => "min_salary",
            Self::MaxSalary => "max_salary",
            Self::Currency => "currency",
            Self::JobDescription => "job_description",
            Self::Responsibilities => "responsibilities",
            Self::Requirements => "requirements",
            Self::Benefits => "benefits",
            Self::MustHaveQualifications => "must_have_qualifications",
            Self::DesiredQualifications => "desired_qualifications",
            Self::JobStatus => "job_status",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for JobField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.to_string() == s)
            .ok_or_else(|| format!("Unknown job field: {}", s))
    }
}

/// Job post fields edited through a rich-text editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextField {
    JobDescription,
    Responsibilities,
    Requirements,
    Benefits,
}

impl RichTextField {
    pub const ALL: [RichTextField; 4] = [
        Self::JobDescription,
        Self::Responsibilities,
        Self::Requirements,
        Self::Benefits,
    ];

    pub fn job_field(&self) -> JobField {
        match self {
            Self::JobDescription => JobField::JobDescription,
            Self::Responsibilities => JobField::Responsibilities,
            Self::Requirements => JobField::Requirements,
            Self::Benefits => JobField::Benefits,
        }
    }
}

impl std::str::FromStr for RichTextField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field: JobField = s.parse()?;
        field
            .rich_text()
            .ok_or_else(|| format!("Not a rich-text field: {}", s))
    }
}

/// In-memory accumulator for the job post wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobPostDraft {
    pub company: String,
    pub job_title: String,
    pub job_type: JobType,
    pub workplace_type: WorkplaceType,
    pub city: String,
    pub country: Country,
    pub experience_level: ExperienceLevel,
    pub min_salary: String,
    pub max_salary: String,
    pub currency: Currency,
    pub job_description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub benefits: String,
    pub must_have_qualifications: String,
    pub desired_qualifications: String,
    pub job_status: JobStatus,
}

impl JobPostDraft {
    /// A fresh draft for `company` with every select at its default.
    pub fn for_company(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..Default::default()
        }
    }

    /// Current value of a field as a string (select fields give their code).
    pub fn get(&self, field: JobField) -> String {
        match field {
            JobField::Company => self.company.clone(),
            JobField::JobTitle => self.job_title.clone(),
            JobField::JobType => self.job_type.code().to_string(),
            JobField::WorkplaceType => self.workplace_type.code().to_string(),
            JobField::City => self.city.clone(),
            JobField::Country => self.country.code().to_string(),
            JobField::ExperienceLevel => self.experience_level.code().to_string(),
            JobField::MinSalary => self.min_salary.clone(),
            JobField::MaxSalary => self.max_salary.clone(),
            JobField::Currency => self.currency.code().to_string(),
            JobField::JobDescription => self.job_description.clone(),
            JobField::Responsibilities => self.responsibilities.clone(),
            JobField::Requirements => self.requirements.clone(),
            JobField::Benefits => self.benefits.clone(),
            JobField::MustHaveQualifications => self.must_have_qualifications.clone(),
            JobField::DesiredQualifications => self.desired_qualifications.clone(),
            JobField::JobStatus => self.job_status.code().to_string(),
        }
    }

    /// Set a field from its string form. Select fields take their code.
    ///
    /// `Company` is read-only; unknown select codes are rejected and leave
    /// the draft untouched.
    pub fn set(&mut self, field: JobField, value: &str) -> Result<(), FlowError> {
        let invalid = |_: String| FlowError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };
        match field {
            JobField::Company => {
                return Err(FlowError::ReadOnlyField {
                    field: field.to_string(),
                });
            }
            JobField::JobTitle => self.job_title = value.to_string(),
            JobField::JobType => self.job_type = value.parse().map_err(invalid)?,
            JobField::WorkplaceType => self.workplace_type = value.parse().map_err(invalid)?,
            JobField::City => self.city = value.to_string(),
            JobField::Country => self.country = value.parse().map_err(invalid)?,
            JobField::ExperienceLevel => self.experience_level = value.parse().map_err(invalid)?,
            JobField::MinSalary => self.min_salary = value.to_string(),
            JobField::MaxSalary => self.max_salary = value.to_string(),
            JobField::Currency => self.currency = value.parse().map_err(invalid)?,
            JobField::JobDescription => self.job_description = value.to_string(),
            JobField::Responsibilities => self.responsibilities = value.to_string(),
            JobField::Requirements => self.requirements = value.to_string(),
            JobField::Benefits => self.benefits = value.to_string(),
            JobField::MustHaveQualifications => self.must_have_qualifications = value.to_string(),
            JobField::DesiredQualifications => self.desired_qualifications = value.to_string(),
            JobField::JobStatus => self.job_status = value.parse().map_err(invalid)?,
        }
        Ok(())
    }
}
