//! Onboarding orchestrator.
//!
//! Owns both forms and the modal sequencer. Step positions are always read
//! from the forms themselves; the unified index and sidebar are derived on
//! demand.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::company::{CompanyField, CompanyForm, CompanyFormOutcome, CompanyProfileDraft};
use crate::config::OnboardingConfig;
use crate::editor::EditorCommand;
use crate::error::FlowError;
use crate::job_post::{
    JobField, JobPostDraft, JobPostOutcome, JobPostStep, JobPostWizard, JobSummary,
    RichTextField,
};
use crate::modal::{Modal, ModalSequencer, PromptChoice, SuccessAction};
use crate::sidebar::{self, SidebarView};
use crate::upload::LogoFile;
use crate::validation::ValidationErrors;

/// How the flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowOutcome {
    /// The user skipped the job post.
    CompanyProfileCreated,
    JobPostCreated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    Company,
    JobPost,
    Finished(FlowOutcome),
}

impl FlowStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Company => "company",
            Self::JobPost => "job_post",
            Self::Finished(_) => "finished",
        };
        write!(f, "{s}")
    }
}

/// Something the user did.
#[derive(Debug, Clone)]
pub enum FlowAction {
    EditCompanyField { field: CompanyField, value: String },
    SelectLogo(LogoFile),
    /// Next / Complete / Continue / Create on the active form.
    Next,
    Back,
    ResolvePrompt(PromptChoice),
    EditJobField { field: JobField, value: String },
    RichText {
        field: RichTextField,
        command: EditorCommand,
    },
    Success(SuccessAction),
    BackdropClick,
}

impl FlowAction {
    /// Actions that drive a form. These are blocked while a modal is open.
    fn is_form_action(&self) -> bool {
        !matches!(
            self,
            Self::ResolvePrompt(_) | Self::Success(_) | Self::BackdropClick
        )
    }

    fn name(&self) -> &'static str {
        match self {
            Self::EditCompanyField { .. } => "edit_company_field",
            Self::SelectLogo(_) => "select_logo",
            Self::Next => "next",
            Self::Back => "back",
            Self::ResolvePrompt(_) => "resolve_prompt",
            Self::EditJobField { .. } => "edit_job_field",
            Self::RichText { .. } => "rich_text",
            Self::Success(_) => "success_action",
            Self::BackdropClick => "backdrop_click",
        }
    }
}

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FlowEvent {
    /// The unified step changed.
    StepChanged { step: usize, total: usize },
    ValidationFailed { errors: ValidationErrors },
    LogoSelected { file_id: uuid::Uuid },
    LogoRejected { message: String },
    CompanySubmitted { company: String },
    PromptOpened { title: String, body: String },
    JobPostStarted { company: String },
    /// Terminal: the job post was skipped.
    CompanyProfileCreated { profile: CompanyProfileDraft },
    SuccessOpened { title: String },
    ViewJobPostRequested,
    DashboardRequested,
    /// Terminal: the job post was confirmed.
    JobPostCreated { job_post: JobPostDraft },
    ShareRequested { network: String },
    RichTextUpdated { field: RichTextField, html: String },
}

/// Serializable view of the whole flow for hosts.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub stage: FlowStage,
    pub step: usize,
    pub total_steps: usize,
    pub step_title: String,
    pub next_label: String,
    pub sidebar: SidebarView,
    pub modal: Option<Modal>,
    pub errors: ValidationErrors,
    pub company: CompanyProfileDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_post: Option<JobPostDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JobSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// The onboarding wizard as a whole.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    config: OnboardingConfig,
    stage: FlowStage,
    company: CompanyForm,
    submitted: Option<CompanyProfileDraft>,
    job_post: Option<JobPostWizard>,
    modals: ModalSequencer,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new(OnboardingConfig::default())
    }
}

impl OnboardingFlow {
    pub fn new(config: OnboardingConfig) -> Self {
        Self {
            company: CompanyForm::new(&config),
            config,
            stage: FlowStage::Company,
            submitted: None,
            job_post: None,
            modals: ModalSequencer::new(),
            completed_at: None,
        }
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    pub fn company_form(&self) -> &CompanyForm {
        &self.company
    }

    pub fn job_post(&self) -> Option<&JobPostWizard> {
        self.job_post.as_ref()
    }

    /// The company draft as it was when the form was submitted.
    pub fn submitted_company(&self) -> Option<&CompanyProfileDraft> {
        self.submitted.as_ref()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modals.current()
    }

    pub fn is_finished(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Overall 1-based position: the company step until the job post flow
    /// is entered, then two plus the job post step.
    pub fn unified_step(&self) -> usize {
        match self.job_post {
            Some(ref wizard) => COMPANY_STEPS + wizard.step().number() as usize,
            None => self.company.step().number() as usize,
        }
    }

    /// Number of sidebar entries: two before the job post flow, six after.
    pub fn total_steps(&self) -> usize {
        match self.job_post {
            Some(_) => COMPANY_STEPS + JobPostStep::TOTAL as usize,
            None => COMPANY_STEPS,
        }
    }

    pub fn sidebar(&self) -> SidebarView {
        let steps = match self.job_post {
            Some(_) => sidebar::all_steps(),
            None => sidebar::company_steps(),
        };
        SidebarView::new(steps, self.unified_step())
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        let (step_title, next_label) = match self.job_post {
            Some(ref w) => (w.step().title(), w.step().next_label()),
            None => (self.company.step().title(), self.company.step().next_label()),
        };
        let summary = self
            .job_post
            .as_ref()
            .filter(|w| w.step() == JobPostStep::ReviewAndPublish)
            .map(JobPostWizard::summary);

        FlowSnapshot {
            stage: self.stage,
            step: self.unified_step(),
            total_steps: self.total_steps(),
            step_title: step_title.to_string(),
            next_label: next_label.to_string(),
            sidebar: self.sidebar(),
            modal: self.modals.current().cloned(),
            errors: self.company.errors().clone(),
            company: self.company.draft().clone(),
            job_post: self.job_post.as_ref().map(|w| w.draft().clone()),
            summary,
            completed_at: self.completed_at,
        }
    }

    /// Apply one user action and return what it caused.
    pub fn dispatch(&mut self, action: FlowAction) -> Result<Vec<FlowEvent>, FlowError> {
        if self.stage.is_terminal() {
            return Err(FlowError::Finished);
        }
        if action.is_form_action() {
            if let Some(modal) = self.modals.current() {
                return Err(FlowError::ModalOpen {
                    action: action.name().to_string(),
                    modal: modal.to_string(),
                });
            }
        }
        debug!(action = action.name(), stage = %self.stage, "Dispatching flow action");

        match action {
            FlowAction::EditCompanyField { field, value } => {
                self.require_stage(FlowStage::Company, "edit_company_field")?;
                // The logo only arrives through `SelectLogo`.
                if !CompanyField::TEXT_FIELDS.contains(&field) {
                    return Err(FlowError::InvalidValue {
                        field: field.to_string(),
                        value,
                    });
                }
                self.company.edit(field, value);
                Ok(Vec::new())
            }
            FlowAction::SelectLogo(file) => {
                self.require_stage(FlowStage::Company, "select_logo")?;
                let file_id = file.id;
                match self.company.select_logo(file) {
                    Ok(()) => Ok(vec![FlowEvent::LogoSelected { file_id }]),
                    Err(e) => Ok(vec![FlowEvent::LogoRejected {
                        message: e.to_string(),
                    }]),
                }
            }
            FlowAction::Next => self.next(),
            FlowAction::Back => self.back(),
            FlowAction::ResolvePrompt(choice) => {
                let choice = self.modals.resolve_prompt(choice)?;
                Ok(self.on_prompt_resolved(choice))
            }
            FlowAction::BackdropClick => match self.modals.backdrop_click()? {
                Some(choice) => Ok(self.on_prompt_resolved(choice)),
                None => Ok(Vec::new()),
            },
            FlowAction::EditJobField { field, value } => {
                self.wizard_mut("edit_job_field")?.edit(field, &value)?;
                Ok(Vec::new())
            }
            FlowAction::RichText { field, command } => {
                let html = self.wizard_mut("rich_text")?.apply_rich_text(field, command)?;
                Ok(vec![FlowEvent::RichTextUpdated { field, html }])
            }
            FlowAction::Success(action) => {
                let closed = self.modals.resolve_success(action)?;
                Ok(self.on_success_action(action, closed))
            }
        }
    }

    fn next(&mut self) -> Result<Vec<FlowEvent>, FlowError> {
        match self.stage {
            FlowStage::Company => match self.company.next() {
                CompanyFormOutcome::StepChanged(_) => Ok(vec![self.step_changed()]),
                CompanyFormOutcome::Rejected(errors) => {
                    Ok(vec![FlowEvent::ValidationFailed { errors }])
                }
                CompanyFormOutcome::Submitted(draft) => {
                    let company = draft.company_name.clone();
                    self.submitted = Some(draft);
                    let prompt = Modal::CompanyCompletePrompt {
                        company: company.clone(),
                    };
                    let opened = FlowEvent::PromptOpened {
                        title: prompt.title().to_string(),
                        body: prompt.body(),
                    };
                    self.modals.open(prompt)?;
                    Ok(vec![FlowEvent::CompanySubmitted { company }, opened])
                }
                CompanyFormOutcome::Unchanged => Ok(Vec::new()),
            },
            FlowStage::JobPost => {
                let outcome = self.wizard_mut("next")?.next();
                match outcome {
                    JobPostOutcome::StepChanged(_) => Ok(vec![self.step_changed()]),
                    JobPostOutcome::CreateRequested => {
                        self.modals.open(Modal::JobPostSuccess)?;
                        Ok(vec![FlowEvent::SuccessOpened {
                            title: Modal::JobPostSuccess.title().to_string(),
                        }])
                    }
                    JobPostOutcome::Unchanged => Ok(Vec::new()),
                }
            }
            FlowStage::Finished(_) => Err(FlowError::Finished),
        }
    }

    fn back(&mut self) -> Result<Vec<FlowEvent>, FlowError> {
        let changed = match self.stage {
            FlowStage::Company => {
                matches!(self.company.back(), CompanyFormOutcome::StepChanged(_))
            }
            FlowStage::JobPost => {
                matches!(self.wizard_mut("back")?.back(), JobPostOutcome::StepChanged(_))
            }
            FlowStage::Finished(_) => return Err(FlowError::Finished),
        };
        Ok(if changed {
            vec![self.step_changed()]
        } else {
            Vec::new()
        })
    }

    fn on_prompt_resolved(&mut self, choice: PromptChoice) -> Vec<FlowEvent> {
        let profile = self.submitted.clone().unwrap_or_default();
        match choice {
            PromptChoice::AddJobPost => {
                let wizard = JobPostWizard::new(&profile.company_name, &self.config);
                let company = wizard.draft().company.clone();
                self.job_post = Some(wizard);
                self.stage = FlowStage::JobPost;
                info!(company = %company, "Job post flow started");
                vec![FlowEvent::JobPostStarted { company }, self.step_changed()]
            }
            PromptChoice::Skip => {
                self.finish(FlowOutcome::CompanyProfileCreated);
                vec![FlowEvent::CompanyProfileCreated { profile }]
            }
        }
    }

    fn on_success_action(&mut self, action: SuccessAction, closed: bool) -> Vec<FlowEvent> {
        let mut events = match action {
            SuccessAction::ViewJobPosting => vec![FlowEvent::ViewJobPostRequested],
            SuccessAction::GoToDashboard => vec![FlowEvent::DashboardRequested],
            SuccessAction::Share => vec![FlowEvent::ShareRequested {
                network: "linkedin".to_string(),
            }],
        };
        if closed {
            let job_post = self
                .job_post
                .as_ref()
                .map(|w| w.draft().clone())
                .unwrap_or_default();
            self.finish(FlowOutcome::JobPostCreated);
            events.push(FlowEvent::JobPostCreated { job_post });
        }
        events
    }

    fn finish(&mut self, outcome: FlowOutcome) {
        let now = Utc::now();
        info!(?outcome, completed_at = %now, "Onboarding finished");
        self.stage = FlowStage::Finished(outcome);
        self.completed_at = Some(now);
    }

    fn step_changed(&self) -> FlowEvent {
        let step = self.unified_step();
        let total = self.total_steps();
        info!(step, total, "Step changed");
        FlowEvent::StepChanged { step, total }
    }

    fn require_stage(&self, stage: FlowStage, action: &str) -> Result<(), FlowError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(FlowError::WrongStage {
                action: action.to_string(),
                stage: self.stage.to_string(),
            })
        }
    }

    fn wizard_mut(&mut self, action: &str) -> Result<&mut JobPostWizard, FlowError> {
        self.require_stage(FlowStage::JobPost, action)?;
        let stage = self.stage.to_string();
        self.job_post.as_mut().ok_or_else(|| FlowError::WrongStage {
            action: action.to_string(),
            stage,
        })
    }
}

const COMPANY_STEPS: usize = crate::company::CompanyStep::TOTAL as usize;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Mark;

    const ABOUT: &str = "Acme builds precision anvils and rocket skates for discerning coyotes.";

    fn edit(flow: &mut OnboardingFlow, field: CompanyField, value: &str) {
        flow.dispatch(FlowAction::EditCompanyField {
            field,
            value: value.to_string(),
        })
        .unwrap();
    }

    fn submit_company(flow: &mut OnboardingFlow) -> Vec<FlowEvent> {
        edit(flow, CompanyField::CompanyName, "Acme");
        edit(flow, CompanyField::Website, "https://acme.com");
        edit(flow, CompanyField::Location, "NY");
        flow.dispatch(FlowAction::Next).unwrap();
        flow.dispatch(FlowAction::SelectLogo(LogoFile::new(
            "logo.png",
            "image/png",
            vec![1, 2, 3],
        )))
        .unwrap();
        edit(flow, CompanyField::About, ABOUT);
        flow.dispatch(FlowAction::Next).unwrap()
    }

    fn enter_job_post(flow: &mut OnboardingFlow) {
        submit_company(flow);
        flow.dispatch(FlowAction::ResolvePrompt(PromptChoice::AddJobPost))
            .unwrap();
    }

    #[test]
    fn starts_on_company_step_one() {
        let flow = OnboardingFlow::default();
        assert_eq!(flow.stage(), FlowStage::Company);
        assert_eq!(flow.unified_step(), 1);
        assert_eq!(flow.sidebar().total(), 2);
        assert!(flow.modal().is_none());
    }

    #[test]
    fn invalid_website_stays_on_step_one() {
        let mut flow = OnboardingFlow::default();
        edit(&mut flow, CompanyField::CompanyName, "Acme");
        edit(&mut flow, CompanyField::Website, "not-a-url");
        edit(&mut flow, CompanyField::Location, "NY");

        let events = flow.dispatch(FlowAction::Next).unwrap();
        let [FlowEvent::ValidationFailed { errors }] = events.as_slice() else {
            panic!("unexpected events: {events:?}");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(CompanyField::Website));
        assert_eq!(flow.unified_step(), 1);
    }

    #[test]
    fn company_submit_opens_prompt() {
        let mut flow = OnboardingFlow::default();
        let events = submit_company(&mut flow);
        assert_eq!(
            events,
            vec![
                FlowEvent::CompanySubmitted {
                    company: "Acme".to_string()
                },
                FlowEvent::PromptOpened {
                    title: "Add a Job Post?".to_string(),
                    body: "Would you like to create a job post for Acme?".to_string(),
                },
            ]
        );
        assert_eq!(flow.unified_step(), 2);
        assert_eq!(flow.submitted_company().unwrap().company_name, "Acme");
    }

    #[test]
    fn form_actions_blocked_while_modal_open() {
        let mut flow = OnboardingFlow::default();
        submit_company(&mut flow);
        for action in [FlowAction::Next, FlowAction::Back] {
            assert!(matches!(
                flow.dispatch(action),
                Err(FlowError::ModalOpen { .. })
            ));
        }
        assert!(matches!(
            flow.dispatch(FlowAction::Success(SuccessAction::Share)),
            Err(FlowError::WrongModal { .. })
        ));
    }

    #[test]
    fn skip_finishes_with_company_profile() {
        let mut flow = OnboardingFlow::default();
        submit_company(&mut flow);
        let events = flow
            .dispatch(FlowAction::ResolvePrompt(PromptChoice::Skip))
            .unwrap();
        assert!(matches!(
            events.as_slice(),
            [FlowEvent::CompanyProfileCreated { profile }] if profile.company_name == "Acme"
        ));
        assert_eq!(
            flow.stage(),
            FlowStage::Finished(FlowOutcome::CompanyProfileCreated)
        );
        assert_eq!(flow.sidebar().total(), 2);
        assert!(flow.snapshot().completed_at.is_some());
        assert!(matches!(
            flow.dispatch(FlowAction::Next),
            Err(FlowError::Finished)
        ));
    }

    #[test]
    fn backdrop_on_prompt_skips() {
        let mut flow = OnboardingFlow::default();
        submit_company(&mut flow);
        let events = flow.dispatch(FlowAction::BackdropClick).unwrap();
        assert!(matches!(
            events.as_slice(),
            [FlowEvent::CompanyProfileCreated { .. }]
        ));
    }

    #[test]
    fn yes_enters_job_post_at_step_three() {
        let mut flow = OnboardingFlow::default();
        submit_company(&mut flow);
        let events = flow
            .dispatch(FlowAction::ResolvePrompt(PromptChoice::AddJobPost))
            .unwrap();
        assert_eq!(
            events,
            vec![
                FlowEvent::JobPostStarted {
                    company: "Acme".to_string()
                },
                FlowEvent::StepChanged { step: 3, total: 6 },
            ]
        );
        let sidebar = flow.sidebar();
        assert_eq!(sidebar.total(), 6);
        assert_eq!(sidebar.current, 3);
        assert_eq!(flow.job_post().unwrap().draft().company, "Acme");
    }

    #[test]
    fn job_post_back_on_first_step_is_noop() {
        let mut flow = OnboardingFlow::default();
        enter_job_post(&mut flow);
        assert!(flow.dispatch(FlowAction::Back).unwrap().is_empty());
        assert_eq!(flow.unified_step(), 3);
    }

    #[test]
    fn company_field_rejected_in_job_post_stage() {
        let mut flow = OnboardingFlow::default();
        enter_job_post(&mut flow);
        assert!(matches!(
            flow.dispatch(FlowAction::EditCompanyField {
                field: CompanyField::Location,
                value: "LA".to_string(),
            }),
            Err(FlowError::WrongStage { .. })
        ));
    }

    #[test]
    fn job_fields_need_job_post_stage() {
        let mut flow = OnboardingFlow::default();
        assert!(matches!(
            flow.dispatch(FlowAction::EditJobField {
                field: JobField::JobTitle,
                value: "Welder".to_string(),
            }),
            Err(FlowError::WrongStage { .. })
        ));
    }

    #[test]
    fn create_then_dashboard_completes_once() {
        let mut flow = OnboardingFlow::default();
        enter_job_post(&mut flow);
        flow.dispatch(FlowAction::EditJobField {
            field: JobField::JobTitle,
            value: "Anvil Tester".to_string(),
        })
        .unwrap();
        for _ in 0..3 {
            flow.dispatch(FlowAction::Next).unwrap();
        }
        assert_eq!(flow.unified_step(), 6);
        assert!(flow.snapshot().summary.is_some());

        let events = flow.dispatch(FlowAction::Next).unwrap();
        assert!(matches!(events.as_slice(), [FlowEvent::SuccessOpened { .. }]));

        // Sticky: backdrop does nothing, share leaves it open.
        assert!(flow.dispatch(FlowAction::BackdropClick).unwrap().is_empty());
        let events = flow
            .dispatch(FlowAction::Success(SuccessAction::Share))
            .unwrap();
        assert!(matches!(events.as_slice(), [FlowEvent::ShareRequested { .. }]));
        assert_eq!(flow.modal(), Some(&Modal::JobPostSuccess));

        let events = flow
            .dispatch(FlowAction::Success(SuccessAction::GoToDashboard))
            .unwrap();
        let created: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, FlowEvent::JobPostCreated { .. }))
            .collect();
        assert_eq!(created.len(), 1);
        assert_eq!(events[0], FlowEvent::DashboardRequested);
        assert!(flow.modal().is_none());
        assert_eq!(flow.stage(), FlowStage::Finished(FlowOutcome::JobPostCreated));

        assert!(matches!(
            flow.dispatch(FlowAction::Success(SuccessAction::ViewJobPosting)),
            Err(FlowError::Finished)
        ));
    }

    #[test]
    fn rich_text_through_flow() {
        let mut flow = OnboardingFlow::default();
        enter_job_post(&mut flow);
        flow.dispatch(FlowAction::RichText {
            field: RichTextField::Requirements,
            command: EditorCommand::ToggleMark(Mark::Bold),
        })
        .unwrap();
        let events = flow
            .dispatch(FlowAction::RichText {
                field: RichTextField::Requirements,
                command: EditorCommand::InsertText("Strong arms".to_string()),
            })
            .unwrap();
        assert_eq!(
            events,
            vec![FlowEvent::RichTextUpdated {
                field: RichTextField::Requirements,
                html: "<p><b>Strong arms</b></p>".to_string(),
            }]
        );
        assert_eq!(
            flow.job_post().unwrap().draft().requirements,
            "<p><b>Strong arms</b></p>"
        );
    }

    #[test]
    fn rejected_logo_is_inline_error() {
        let mut flow = OnboardingFlow::default();
        let events = flow
            .dispatch(FlowAction::SelectLogo(LogoFile::new(
                "logo.gif",
                "image/gif",
                vec![0; 4],
            )))
            .unwrap();
        assert_eq!(
            events,
            vec![FlowEvent::LogoRejected {
                message: "Please upload a JPG or PNG file".to_string()
            }]
        );
        assert_eq!(
            flow.company_form().errors().get(CompanyField::Logo),
            Some("Please upload a JPG or PNG file")
        );
    }

    #[test]
    fn small_logo_limit_is_reported_in_kilobytes() {
        let config = OnboardingConfig::from_lookup(|key| {
            (key == "ONBOARDING_MAX_LOGO_BYTES").then(|| "512000".to_string())
        })
        .unwrap();
        let mut flow = OnboardingFlow::new(config);
        let events = flow
            .dispatch(FlowAction::SelectLogo(LogoFile::new(
                "logo.png",
                "image/png",
                vec![0; 600_000],
            )))
            .unwrap();
        assert_eq!(
            events,
            vec![FlowEvent::LogoRejected {
                message: "File size must be less than 500KB".to_string()
            }]
        );
    }

    #[test]
    fn unified_step_moves_by_one_across_both_forms() {
        fn step(flow: &mut OnboardingFlow, action: FlowAction, expected: usize, total: usize) {
            let events = flow.dispatch(action).unwrap();
            assert_eq!(
                events.last(),
                Some(&FlowEvent::StepChanged {
                    step: expected,
                    total
                }),
                "events: {events:?}"
            );
            assert_eq!(flow.unified_step(), expected);
        }

        let mut flow = OnboardingFlow::default();
        edit(&mut flow, CompanyField::CompanyName, "Acme");
        edit(&mut flow, CompanyField::Website, "https://acme.com");
        edit(&mut flow, CompanyField::Location, "NY");
        assert_eq!(flow.unified_step(), 1);

        step(&mut flow, FlowAction::Next, 2, 2);
        step(&mut flow, FlowAction::Back, 1, 2);
        step(&mut flow, FlowAction::Next, 2, 2);

        flow.dispatch(FlowAction::SelectLogo(LogoFile::new(
            "logo.png",
            "image/png",
            vec![1],
        )))
        .unwrap();
        edit(&mut flow, CompanyField::About, ABOUT);
        flow.dispatch(FlowAction::Next).unwrap();
        assert_eq!(flow.unified_step(), 2);

        step(
            &mut flow,
            FlowAction::ResolvePrompt(PromptChoice::AddJobPost),
            3,
            6,
        );
        for expected in [4, 5, 6] {
            step(&mut flow, FlowAction::Next, expected, 6);
        }
        for expected in [5, 4, 3] {
            step(&mut flow, FlowAction::Back, expected, 6);
        }
        assert_eq!(flow.job_post().unwrap().step(), JobPostStep::BasicInformation);
    }

    #[test]
    fn snapshot_serializes() {
        let mut flow = OnboardingFlow::default();
        enter_job_post(&mut flow);
        let json = serde_json::to_value(flow.snapshot()).unwrap();
        assert_eq!(json["stage"], "job_post");
        assert_eq!(json["step"], 3);
        assert_eq!(json["total_steps"], 6);
        assert_eq!(json["sidebar"]["compact_label"], "Step 3 of 6");
        assert!(json.get("completed_at").is_none());
    }
}
