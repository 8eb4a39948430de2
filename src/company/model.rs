//! Company profile draft and field names.

use serde::{Deserialize, Serialize};

use crate::upload::LogoFile;

/// A field of the company profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyField {
    CompanyName,
    Website,
    Location,
    Logo,
    About,
}

impl CompanyField {
    /// Text fields, in form order. `Logo` is set through an upload instead.
    pub const TEXT_FIELDS: [CompanyField; 4] = [
        Self::CompanyName,
        Self::Website,
        Self::Location,
        Self::About,
    ];

    /// Form label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CompanyName => "Company name",
            Self::Website => "Company Website",
            Self::Location => "Location",
            Self::Logo => "Company Logo",
            Self::About => "About your Company",
        }
    }
}

impl std::fmt::Display for CompanyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CompanyName => "company_name",
            Self::Website => "website",
            Self::Location => "location",
            Self::Logo => "logo",
            Self::About => "about",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CompanyField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company_name" | "name" => Ok(Self::CompanyName),
            "website" => Ok(Self::Website),
            "location" => Ok(Self::Location),
            "logo" => Ok(Self::Logo),
            "about" => Ok(Self::About),
            _ => Err(format!("Unknown company field: {}", s)),
        }
    }
}

/// In-memory accumulator for the company profile form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyProfileDraft {
    pub company_name: String,
    pub website: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoFile>,
    pub about: String,
}

impl CompanyProfileDraft {
    /// Read a text field. Returns `None` for `Logo`.
    pub fn text(&self, field: CompanyField) -> Option<&str> {
        match field {
            CompanyField::CompanyName => Some(&self.company_name),
            CompanyField::Website => Some(&self.website),
            CompanyField::Location => Some(&self.location),
            CompanyField::About => Some(&self.about),
            CompanyField::Logo => None,
        }
    }

    /// Overwrite a text field. Returns `false` (and changes nothing) for `Logo`.
    pub fn set_text(&mut self, field: CompanyField, value: impl Into<String>) -> bool {
        let slot = match field {
            CompanyField::CompanyName => &mut self.company_name,
            CompanyField::Website => &mut self.website,
            CompanyField::Location => &mut self.location,
            CompanyField::About => &mut self.about,
            CompanyField::Logo => return false,
        };
        *slot = value.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        let fields = [
            CompanyField::CompanyName,
            CompanyField::Website,
            CompanyField::Location,
            CompanyField::Logo,
            CompanyField::About,
        ];
        for field in fields {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(format!("\"{field}\""), json);
            assert_eq!(field.to_string().parse::<CompanyField>().unwrap(), field);
        }
    }

    #[test]
    fn set_text_routes_to_field() {
        let mut draft = CompanyProfileDraft::default();
        assert!(draft.set_text(CompanyField::CompanyName, "Acme"));
        assert!(draft.set_text(CompanyField::About, "We make anvils"));
        assert_eq!(draft.company_name, "Acme");
        assert_eq!(draft.text(CompanyField::About), Some("We make anvils"));
        assert!(!draft.set_text(CompanyField::Logo, "logo.png"));
        assert!(draft.logo.is_none());
        assert_eq!(draft.text(CompanyField::Logo), None);
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        assert!("favicon".parse::<CompanyField>().is_err());
        assert_eq!("name".parse::<CompanyField>().unwrap(), CompanyField::CompanyName);
    }
}
