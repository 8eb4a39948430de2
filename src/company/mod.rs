//! Company profile form, the validation-gated first part of onboarding.

pub mod form;
pub mod model;
pub mod state;

pub use form::{CompanyForm, CompanyFormOutcome};
pub use model::{CompanyField, CompanyProfileDraft};
pub use state::CompanyStep;
