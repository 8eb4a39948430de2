use company_onboarding::config::OnboardingConfig;
use company_onboarding::flow::{FlowAction, FlowEvent, OnboardingFlow};
use company_onboarding::repl::{self, Command, HELP};
use company_onboarding::upload::{self, LogoFile, LogoPreview};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = OnboardingConfig::from_env()?;

    eprintln!("🏢 Company Onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Logo limit: {}, about: {}-{} chars",
        upload::format_size(config.max_logo_bytes),
        config.about_min_chars,
        config.about_max_chars
    );
    eprintln!("   Type 'help' for commands. /quit to exit.\n");

    let mut flow = OnboardingFlow::new(config);
    let preview = LogoPreview::new();

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    print_step(&flow);
    eprint!("> ");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            eprint!("> ");
            continue;
        }

        // Held back so the preview starts only once the gate accepts it.
        let mut picked: Option<LogoFile> = None;
        let action = match repl::parse_command(&line) {
            Ok(Command::Action(action)) => action,
            Ok(Command::Logo(path)) => match LogoFile::from_path(&path).await {
                Ok(file) => {
                    picked = Some(file.clone());
                    FlowAction::SelectLogo(file)
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    eprint!("> ");
                    continue;
                }
            },
            Ok(Command::Status) => {
                println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
                eprint!("> ");
                continue;
            }
            Ok(Command::Help) => {
                println!("{}", HELP);
                eprint!("> ");
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                eprintln!("❌ {}", e);
                eprint!("> ");
                continue;
            }
        };

        match flow.dispatch(action) {
            Ok(events) => {
                let mut pending_preview = None;
                for event in &events {
                    if let (FlowEvent::LogoSelected { .. }, Some(file)) = (event, picked.as_ref()) {
                        pending_preview = Some(preview.load(file));
                    }
                    println!("{}", repl::describe(event));
                }
                if let Some(handle) = pending_preview {
                    if let Err(e) = handle.await {
                        tracing::warn!("Logo preview task failed: {}", e);
                    }
                    eprintln!("   Logo button: {}", preview.button_label().await);
                }
            }
            Err(e) => eprintln!("⚠️  {}", e),
        }

        if flow.is_finished() {
            println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
            break;
        }
        print_step(&flow);
        eprint!("> ");
    }

    if let Some(image) = preview.current().await {
        tracing::debug!(file_id = %image.file_id, "Final logo preview");
    }
    Ok(())
}

fn print_step(flow: &OnboardingFlow) {
    let snapshot = flow.snapshot();
    eprintln!(
        "[{}] {} · {}",
        snapshot.sidebar.compact_label, snapshot.step_title, snapshot.next_label
    );
    if let Some(modal) = flow.modal() {
        eprintln!("   ({} is open)", modal.title());
    }
}
