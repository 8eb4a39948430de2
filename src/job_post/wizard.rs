//! Job post wizard: four ungated steps over a [`JobPostDraft`].

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::model::{JobField, JobPostDraft, RichTextField};
use super::state::JobPostStep;
use super::summary::JobSummary;
use crate::config::OnboardingConfig;
use crate::editor::{EditorCommand, RichTextEditor};
use crate::error::FlowError;

/// What a navigation request did to the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPostOutcome {
    StepChanged(JobPostStep),
    /// "Create" was pressed on the review step.
    CreateRequested,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct JobPostWizard {
    step: JobPostStep,
    draft: JobPostDraft,
    editors: BTreeMap<RichTextField, RichTextEditor>,
}

impl JobPostWizard {
    /// Start a wizard for `company_name`, or the configured fallback name if
    /// it is blank.
    pub fn new(company_name: &str, config: &OnboardingConfig) -> Self {
        let company = if company_name.trim().is_empty() {
            config.fallback_company_name.clone()
        } else {
            company_name.to_string()
        };
        let editors = RichTextField::ALL
            .iter()
            .map(|f| (*f, RichTextEditor::new(config.editor_history_limit)))
            .collect();

        Self {
            step: JobPostStep::default(),
            draft: JobPostDraft::for_company(company),
            editors,
        }
    }

    pub fn step(&self) -> JobPostStep {
        self.step
    }

    pub fn draft(&self) -> &JobPostDraft {
        &self.draft
    }

    pub fn editor(&self, field: RichTextField) -> Option<&RichTextEditor> {
        self.editors.get(&field)
    }

    pub fn summary(&self) -> JobSummary {
        JobSummary::from_draft(&self.draft)
    }

    /// Set a field by name. Rich-text fields take plain text and store the
    /// resulting HTML.
    pub fn edit(&mut self, field: JobField, value: &str) -> Result<(), FlowError> {
        match field.rich_text() {
            Some(rich) => {
                let editor = self.editor_mut(rich);
                editor.replace_text(value);
                let html = editor.html();
                self.draft.set(field, &html)?;
            }
            None => self.draft.set(field, value)?,
        }
        debug!(%field, "Job post field edited");
        Ok(())
    }

    /// Run an editor command on a rich-text field and return its new HTML.
    pub fn apply_rich_text(
        &mut self,
        field: RichTextField,
        command: EditorCommand,
    ) -> Result<String, FlowError> {
        let html = self.editor_mut(field).apply(command)?;
        self.draft.set(field.job_field(), &html)?;
        Ok(html)
    }

    /// Advance. Never gated; the last step requests creation instead.
    pub fn next(&mut self) -> JobPostOutcome {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                JobPostOutcome::StepChanged(next)
            }
            None => {
                info!(
                    company = %self.draft.company,
                    title = %self.draft.job_title,
                    status = %self.draft.job_status,
                    "Job post create requested"
                );
                JobPostOutcome::CreateRequested
            }
        }
    }

    /// Go back one step. A no-op on the first step.
    pub fn back(&mut self) -> JobPostOutcome {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                JobPostOutcome::StepChanged(prev)
            }
            None => JobPostOutcome::Unchanged,
        }
    }

    fn editor_mut(&mut self, field: RichTextField) -> &mut RichTextEditor {
        self.editors.entry(field).or_default()
    }
}
