//! Company onboarding: a two-step company profile form, an optional
//! four-step job post wizard, and the orchestration between them.

pub mod company;
pub mod config;
pub mod editor;
pub mod error;
pub mod flow;
pub mod job_post;
pub mod modal;
pub mod repl;
pub mod sidebar;
pub mod upload;
pub mod validation;

pub use flow::{FlowAction, FlowEvent, FlowOutcome, FlowSnapshot, FlowStage, OnboardingFlow};
