//! Line-oriented command language for driving the flow from a terminal.

use std::path::PathBuf;

use crate::company::CompanyField;
use crate::editor::{EditorCommand, ListKind, Mark, Position, Selection};
use crate::flow::{FlowAction, FlowEvent};
use crate::job_post::{JobField, RichTextField};
use crate::modal::{PromptChoice, SuccessAction};

pub const HELP: &str = "\
Commands:
  set <field> <value>          company field (company_name, website, location, about)
  logo <path>                  pick a logo file
  next | back                  navigate the active form
  yes | skip | outside         answer the job post prompt (outside = backdrop click)
  view | dashboard | share     success modal actions
  job <field> <value>          job post field (job_title, city, country, ...)
  rich <field> <op> [args]     bold | italic | underline | bullet | numbered |
                               link <url> | type <text> | select <b:o> <b:o> |
                               all | undo | redo
  status                       print the flow snapshot as JSON
  help | quit";

/// A parsed input line.
#[derive(Debug, Clone)]
pub enum Command {
    Action(FlowAction),
    /// Logo selection needs an async file read before it becomes an action.
    Logo(PathBuf),
    Status,
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = split_word(line);

    let action = match head {
        "" => return Err("Empty command".to_string()),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "/quit" => return Ok(Command::Quit),
        "status" => return Ok(Command::Status),
        "logo" => {
            if rest.is_empty() {
                return Err("Usage: logo <path>".to_string());
            }
            return Ok(Command::Logo(PathBuf::from(rest)));
        }
        "set" => {
            let (field, value) = split_word(rest);
            let field: CompanyField = field.parse()?;
            if !CompanyField::TEXT_FIELDS.contains(&field) {
                return Err(format!("Use 'logo <path>' to set the {}", field.label()));
            }
            FlowAction::EditCompanyField {
                field,
                value: value.to_string(),
            }
        }
        "job" => {
            let (field, value) = split_word(rest);
            let field: JobField = field.parse()?;
            FlowAction::EditJobField {
                field,
                value: value.to_string(),
            }
        }
        "rich" => {
            let (field, op) = split_word(rest);
            let field: RichTextField = field.parse()?;
            FlowAction::RichText {
                field,
                command: parse_editor_command(op)?,
            }
        }
        "next" => FlowAction::Next,
        "back" => FlowAction::Back,
        "yes" => FlowAction::ResolvePrompt(PromptChoice::AddJobPost),
        "skip" | "no" => FlowAction::ResolvePrompt(PromptChoice::Skip),
        "outside" => FlowAction::BackdropClick,
        "view" => FlowAction::Success(SuccessAction::ViewJobPosting),
        "dashboard" => FlowAction::Success(SuccessAction::GoToDashboard),
        "share" => FlowAction::Success(SuccessAction::Share),
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(Command::Action(action))
}

fn parse_editor_command(input: &str) -> Result<EditorCommand, String> {
    let (op, arg) = split_word(input);
    let command = match op {
        "bold" => EditorCommand::ToggleMark(Mark::Bold),
        "italic" => EditorCommand::ToggleMark(Mark::Italic),
        "underline" => EditorCommand::ToggleMark(Mark::Underline),
        "bullet" => EditorCommand::WrapInList(ListKind::Bullet),
        "numbered" => EditorCommand::WrapInList(ListKind::Numbered),
        "link" => EditorCommand::InsertLink(arg.to_string()),
        // Literal "\n" in typed text starts a new block.
        "type" => EditorCommand::InsertText(arg.replace("\\n", "\n")),
        "all" => EditorCommand::SelectAll,
        "undo" => EditorCommand::Undo,
        "redo" => EditorCommand::Redo,
        "select" => {
            let (a, b) = split_word(arg);
            let start = parse_position(a)?;
            let end = if b.is_empty() { start } else { parse_position(b)? };
            EditorCommand::Select(Selection::new(start, end))
        }
        "" => return Err("Missing editor operation".to_string()),
        other => return Err(format!("Unknown editor operation: {}", other)),
    };
    Ok(command)
}

/// `block:offset`, both 0-based.
fn parse_position(s: &str) -> Result<Position, String> {
    let (block, offset) = s
        .split_once(':')
        .ok_or_else(|| format!("Expected block:offset, got '{}'", s))?;
    let block = block
        .parse()
        .map_err(|_| format!("Invalid block index: {}", block))?;
    let offset = offset
        .parse()
        .map_err(|_| format!("Invalid offset: {}", offset))?;
    Ok(Position::new(block, offset))
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (s, ""),
    }
}

/// One-line description of an event for the terminal.
pub fn describe(event: &FlowEvent) -> String {
    match event {
        FlowEvent::StepChanged { step, total } => format!("Step {} of {}", step, total),
        FlowEvent::ValidationFailed { errors } => {
            let lines: Vec<String> = errors
                .iter()
                .map(|(field, msg)| format!("  {}: {}", field.label(), msg))
                .collect();
            format!("Please fix the following:\n{}", lines.join("\n"))
        }
        FlowEvent::LogoSelected { file_id } => format!("Logo selected ({})", file_id),
        FlowEvent::LogoRejected { message } => format!("Logo: {}", message),
        FlowEvent::CompanySubmitted { company } => format!("Company profile for {} submitted", company),
        FlowEvent::PromptOpened { title, body } => {
            format!("{}\n{}\n[yes] Yes, add a job post   [skip] Skip for now", title, body)
        }
        FlowEvent::JobPostStarted { company } => format!("Creating a job post for {}", company),
        FlowEvent::CompanyProfileCreated { profile } => {
            format!("Company profile created for {}", profile.company_name)
        }
        FlowEvent::SuccessOpened { title } => {
            format!("{}\n[view] View Job Posting   [dashboard] Go to Dashboard   [share] Share on LinkedIn", title)
        }
        FlowEvent::ViewJobPostRequested => "Opening job posting".to_string(),
        FlowEvent::DashboardRequested => "Opening dashboard".to_string(),
        FlowEvent::JobPostCreated { job_post } => {
            let title = if job_post.job_title.is_empty() {
                "Untitled job"
            } else {
                job_post.job_title.as_str()
            };
            format!("Job post created: {} at {}", title, job_post.company)
        }
        FlowEvent::ShareRequested { network } => format!("Sharing on {}", network),
        FlowEvent::RichTextUpdated { field, html } => {
            format!("{}: {}", field.job_field(), html)
        }
    }
}
