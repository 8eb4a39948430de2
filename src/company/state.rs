//! Company form steps.

use serde::{Deserialize, Serialize};

/// The two steps of the company profile form.
///
/// Progresses linearly: BasicInfo → LogoAndAbout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStep {
    #[default]
    BasicInfo,
    LogoAndAbout,
}

impl CompanyStep {
    /// Number of steps in the company form.
    pub const TOTAL: u32 = 2;

    /// 1-based step number.
    pub fn number(&self) -> u32 {
        match self {
            Self::BasicInfo => 1,
            Self::LogoAndAbout => 2,
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::BasicInfo),
            2 => Some(Self::LogoAndAbout),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::LogoAndAbout),
            Self::LogoAndAbout => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::LogoAndAbout => Some(Self::BasicInfo),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Subtitle shown in the form header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic information",
            Self::LogoAndAbout => "Logo & description",
        }
    }

    /// Label of the forward button.
    pub fn next_label(&self) -> &'static str {
        if self.is_last() { "Complete" } else { "Next" }
    }
}

impl std::fmt::Display for CompanyStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BasicInfo => "basic_info",
            Self::LogoAndAbout => "logo_and_about",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_roundtrip() {
        for n in 1..=CompanyStep::TOTAL {
            assert_eq!(CompanyStep::from_number(n).unwrap().number(), n);
        }
        assert!(CompanyStep::from_number(0).is_none());
        assert!(CompanyStep::from_number(3).is_none());
    }

    #[test]
    fn next_and_previous_are_inverse() {
        let step = CompanyStep::BasicInfo;
        let next = step.next().unwrap();
        assert_eq!(next, CompanyStep::LogoAndAbout);
        assert_eq!(next.previous(), Some(step));
        assert!(next.next().is_none());
        assert!(step.previous().is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(CompanyStep::BasicInfo.next_label(), "Next");
        assert_eq!(CompanyStep::LogoAndAbout.next_label(), "Complete");
        assert_eq!(CompanyStep::LogoAndAbout.title(), "Logo & description");
    }

    #[test]
    fn display_matches_serde() {
        for step in [CompanyStep::BasicInfo, CompanyStep::LogoAndAbout] {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{step}\""), json);
        }
    }
}
