//! Company profile form: two validated steps.

use tracing::{debug, info};

use super::model::{CompanyField, CompanyProfileDraft};
use super::state::CompanyStep;
use crate::config::OnboardingConfig;
use crate::error::UploadError;
use crate::upload::{LogoFile, LogoGate};
use crate::validation::{ValidationErrors, ValidationLimits, validate_with};

/// What a navigation request did to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyFormOutcome {
    /// Moved to another step.
    StepChanged(CompanyStep),
    /// Validation failed; the form stayed put.
    Rejected(ValidationErrors),
    /// The last step validated; here is the finished draft.
    Submitted(CompanyProfileDraft),
    /// Nothing to do (e.g. Back on the first step).
    Unchanged,
}

/// Owns the company draft, its current step, and its inline errors.
#[derive(Debug, Clone)]
pub struct CompanyForm {
    step: CompanyStep,
    draft: CompanyProfileDraft,
    errors: ValidationErrors,
    limits: ValidationLimits,
    gate: LogoGate,
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::new(&OnboardingConfig::default())
    }
}

impl CompanyForm {
    pub fn new(config: &OnboardingConfig) -> Self {
        Self {
            step: CompanyStep::default(),
            draft: CompanyProfileDraft::default(),
            errors: ValidationErrors::new(),
            limits: ValidationLimits::from(config),
            gate: LogoGate::new(config.max_logo_bytes),
        }
    }

    pub fn step(&self) -> CompanyStep {
        self.step
    }

    pub fn draft(&self) -> &CompanyProfileDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Set a text field and clear that field's error only.
    ///
    /// Returns `false` for `Logo`, which goes through [`select_logo`](Self::select_logo).
    pub fn edit(&mut self, field: CompanyField, value: impl Into<String>) -> bool {
        if !self.draft.set_text(field, value) {
            return false;
        }
        if self.errors.clear(field) {
            debug!(%field, "Cleared field error on edit");
        }
        true
    }

    /// Accept a logo if it passes the upload gate.
    ///
    /// A rejected file leaves the previous selection in place and shows the
    /// reason as the logo field's error.
    pub fn select_logo(&mut self, file: LogoFile) -> Result<(), UploadError> {
        if let Err(e) = self.gate.check(&file) {
            info!(file = %file.name, mime = %file.mime_type, size = file.size, error = %e, "Logo rejected");
            self.errors.insert(CompanyField::Logo, e.to_string());
            return Err(e);
        }
        debug!(file = %file.name, size = file.size, "Logo selected");
        self.draft.logo = Some(file);
        self.errors.clear(CompanyField::Logo);
        Ok(())
    }

    /// Validate the current step, then advance or submit.
    pub fn next(&mut self) -> CompanyFormOutcome {
        self.errors = validate_with(self.step, &self.draft, &self.limits);
        if !self.errors.is_empty() {
            debug!(step = %self.step, errors = self.errors.len(), "Company step failed validation");
            return CompanyFormOutcome::Rejected(self.errors.clone());
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                CompanyFormOutcome::StepChanged(next)
            }
            None => {
                info!(company = %self.draft.company_name, "Company profile submitted");
                CompanyFormOutcome::Submitted(self.draft.clone())
            }
        }
    }

    /// Go back one step without validating. Field values are kept.
    pub fn back(&mut self) -> CompanyFormOutcome {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                CompanyFormOutcome::StepChanged(prev)
            }
            None => CompanyFormOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOUT: &str = "Acme builds precision anvils and rocket skates for discerning coyotes.";

    fn fill_step_one(form: &mut CompanyForm) {
        form.edit(CompanyField::CompanyName, "Acme");
        form.edit(CompanyField::Website, "https://acme.com");
        form.edit(CompanyField::Location, "NY");
    }

    fn png() -> LogoFile {
        LogoFile::new("logo.png", "image/png", vec![0; 16])
    }

    #[test]
    fn starts_on_first_step() {
        let form = CompanyForm::default();
        assert_eq!(form.step(), CompanyStep::BasicInfo);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_required_field_blocks_next() {
        let mut form = CompanyForm::default();
        form.edit(CompanyField::CompanyName, "Acme");
        form.edit(CompanyField::Website, "https://acme.com");

        let outcome = form.next();
        let CompanyFormOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![CompanyField::Location]);
        assert_eq!(form.step(), CompanyStep::BasicInfo);
    }

    #[test]
    fn invalid_website_stays_with_single_error() {
        let mut form = CompanyForm::default();
        form.edit(CompanyField::CompanyName, "Acme");
        form.edit(CompanyField::Website, "not-a-url");
        form.edit(CompanyField::Location, "NY");

        assert!(matches!(form.next(), CompanyFormOutcome::Rejected(_)));
        assert_eq!(form.step(), CompanyStep::BasicInfo);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().get(CompanyField::Website),
            Some("Please enter a valid website URL")
        );
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = CompanyForm::default();
        form.next();
        assert_eq!(form.errors().len(), 3);

        form.edit(CompanyField::Website, "x");
        assert!(!form.errors().contains(CompanyField::Website));
        assert!(form.errors().contains(CompanyField::CompanyName));
        assert!(form.errors().contains(CompanyField::Location));
    }

    #[test]
    fn valid_step_one_advances() {
        let mut form = CompanyForm::default();
        fill_step_one(&mut form);
        assert_eq!(
            form.next(),
            CompanyFormOutcome::StepChanged(CompanyStep::LogoAndAbout)
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn back_preserves_values_and_skips_validation() {
        let mut form = CompanyForm::default();
        fill_step_one(&mut form);
        form.next();
        form.edit(CompanyField::About, "short");

        assert_eq!(form.back(), CompanyFormOutcome::StepChanged(CompanyStep::BasicInfo));
        assert_eq!(form.draft().company_name, "Acme");
        assert_eq!(form.draft().about, "short");
        assert_eq!(form.back(), CompanyFormOutcome::Unchanged);
    }

    #[test]
    fn last_step_submits_full_draft() {
        let mut form = CompanyForm::default();
        fill_step_one(&mut form);
        form.next();
        form.select_logo(png()).unwrap();
        form.edit(CompanyField::About, ABOUT);

        let CompanyFormOutcome::Submitted(draft) = form.next() else {
            panic!("expected submission");
        };
        assert_eq!(draft.company_name, "Acme");
        assert_eq!(draft.about, ABOUT);
        assert!(draft.logo.is_some());
        // Terminal for this form: still on the last step.
        assert_eq!(form.step(), CompanyStep::LogoAndAbout);
    }

    #[test]
    fn missing_logo_blocks_submit() {
        let mut form = CompanyForm::default();
        fill_step_one(&mut form);
        form.next();
        form.edit(CompanyField::About, ABOUT);

        let CompanyFormOutcome::Rejected(errors) = form.next() else {
            panic!("expected rejection");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![CompanyField::Logo]);
    }

    #[test]
    fn rejected_upload_becomes_logo_error() {
        let config = OnboardingConfig {
            max_logo_bytes: 1024 * 1024,
            ..Default::default()
        };
        let mut form = CompanyForm::new(&config);
        let big = LogoFile::new("big.png", "image/png", vec![0; 1024 * 1024 + 1]);
        form.select_logo(big).unwrap_err();
        assert_eq!(
            form.errors().get(CompanyField::Logo),
            Some("File size must be less than 1MB")
        );
        assert!(form.draft().logo.is_none());

        let gif = LogoFile::new("a.gif", "image/gif", vec![1]);
        assert!(matches!(
            form.select_logo(gif),
            Err(UploadError::UnsupportedType { .. })
        ));
        assert_eq!(
            form.errors().get(CompanyField::Logo),
            Some("Please upload a JPG or PNG file")
        );
    }

    #[test]
    fn accepted_upload_clears_logo_error() {
        let mut form = CompanyForm::default();
        fill_step_one(&mut form);
        form.next();
        form.next();
        assert!(form.errors().contains(CompanyField::Logo));

        form.select_logo(png()).unwrap();
        assert!(!form.errors().contains(CompanyField::Logo));
        assert!(form.errors().contains(CompanyField::About));
    }

    #[test]
    fn logo_is_not_a_text_field() {
        let mut form = CompanyForm::default();
        assert!(!form.edit(CompanyField::Logo, "logo.png"));
    }
}
