//! Job post wizard.
//!
//! Four linear steps with no validation gate. Creation is requested on the
//! last step; the orchestrator decides when it is complete.

pub mod model;
pub mod state;
pub mod summary;
pub mod wizard;

pub use model::{
    Country, Currency, ExperienceLevel, JobField, JobPostDraft, JobStatus, JobType,
    RichTextField, WorkplaceType,
};
pub use state::JobPostStep;
pub use summary::JobSummary;
pub use wizard::{JobPostOutcome, JobPostWizard};
