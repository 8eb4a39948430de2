//! Modal sequencing: at most one modal open at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::FlowError;

/// The two modals of the onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Modal {
    /// Asks whether to continue into the job post wizard.
    CompanyCompletePrompt { company: String },
    /// Shown after "Create". Only a primary action closes it.
    JobPostSuccess,
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CompanyCompletePrompt { .. } => "Add a Job Post?",
            Self::JobPostSuccess => "Job Successfully Posted!",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Self::CompanyCompletePrompt { company } => {
                format!("Would you like to create a job post for {}?", company)
            }
            Self::JobPostSuccess => {
                "Your opening is now live and starting to attract the best candidates".to_string()
            }
        }
    }

    /// Whether a backdrop click closes the modal.
    pub fn dismissible(&self) -> bool {
        matches!(self, Self::CompanyCompletePrompt { .. })
    }
}

impl std::fmt::Display for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CompanyCompletePrompt { .. } => "company_complete_prompt",
            Self::JobPostSuccess => "job_post_success",
        };
        write!(f, "{s}")
    }
}

/// Answer to the company-complete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptChoice {
    /// Continue into the job post wizard.
    AddJobPost,
    Skip,
}

/// Actions offered by the success modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessAction {
    ViewJobPosting,
    GoToDashboard,
    /// Share to LinkedIn. Leaves the modal open.
    Share,
}

impl SuccessAction {
    pub fn closes_modal(&self) -> bool {
        !matches!(self, Self::Share)
    }
}

/// Holds the single open modal, if any.
#[derive(Debug, Clone, Default)]
pub struct ModalSequencer {
    open: Option<Modal>,
}

impl ModalSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Modal> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open a modal. Fails if another one is already showing.
    pub fn open(&mut self, modal: Modal) -> Result<(), FlowError> {
        if let Some(ref current) = self.open {
            return Err(FlowError::ModalOpen {
                action: format!("open {}", modal),
                modal: current.to_string(),
            });
        }
        info!(modal = %modal, "Modal opened");
        self.open = Some(modal);
        Ok(())
    }

    /// Resolve the company-complete prompt.
    pub fn resolve_prompt(&mut self, choice: PromptChoice) -> Result<PromptChoice, FlowError> {
        self.require_open(&format!("prompt {:?}", choice), PROMPT)?;
        info!(?choice, "Company prompt resolved");
        self.open = None;
        Ok(choice)
    }

    /// Run a success modal action. Returns whether the modal closed.
    pub fn resolve_success(&mut self, action: SuccessAction) -> Result<bool, FlowError> {
        self.require_open(&format!("success {:?}", action), SUCCESS)?;
        if !action.closes_modal() {
            info!(?action, "Share requested");
            return Ok(false);
        }
        info!(?action, "Success modal resolved");
        self.open = None;
        Ok(true)
    }

    /// Handle a click outside the open modal.
    ///
    /// The prompt treats it as [`PromptChoice::Skip`]; the success modal
    /// ignores it. Returns the prompt choice it stood for, if any.
    pub fn backdrop_click(&mut self) -> Result<Option<PromptChoice>, FlowError> {
        match self.open.as_ref().map(Modal::dismissible) {
            Some(true) => self.resolve_prompt(PromptChoice::Skip).map(Some),
            Some(false) => {
                debug!("Backdrop click ignored");
                Ok(None)
            }
            None => Err(FlowError::WrongModal {
                action: "backdrop click".to_string(),
                expected: "any".to_string(),
                open: "none".to_string(),
            }),
        }
    }

    fn require_open(&self, action: &str, expected: &str) -> Result<(), FlowError> {
        let open = self
            .open
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "none".to_string());
        if open == expected {
            return Ok(());
        }
        Err(FlowError::WrongModal {
            action: action.to_string(),
            expected: expected.to_string(),
            open,
        })
    }
}

const PROMPT: &str = "company_complete_prompt";
const SUCCESS: &str = "job_post_success";
