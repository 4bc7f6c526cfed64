use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use jobscout_core::{Orchestrator, config};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;
mod onboard;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "jobscout - chat your way to job listings from Careerjet, Jooble and web3.career", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the language model and job board credentials
    Onboard,
    /// Ask for jobs, once with --message or interactively
    Chat {
        #[arg(short, long)]
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or_else(|| {
        if !config::config_exists() {
            Commands::Onboard
        } else {
            Commands::Chat { message: None }
        }
    });

    match command {
        Commands::Onboard => {
            let onboard_config = onboard::run_onboard().map_err(|e| {
                eprintln!("❌ Onboarding failed: {}", e);
                anyhow::anyhow!("Onboarding failed: {}", e)
            })?;
            config::save_config(&onboard_config)?;
            onboard::print_saved();
        }
        Commands::Chat { message } => {
            let config = config::Config::load_or_init()?;
            let mut orchestrator = Orchestrator::from_config(&config).inspect_err(|e| {
                eprintln!("❌ Error: {}", e);
                eprintln!("Run 'jobscout onboard' to configure a language model.");
            })?;

            if let Some(msg) = message {
                run_turn(&mut orchestrator, &msg).await;
            } else {
                run_repl(&mut orchestrator).await?;
            }
        }
    }

    Ok(())
}

async fn run_turn(orchestrator: &mut Orchestrator, message: &str) {
    let message = message.trim();
    if message.is_empty() {
        println!("{} Please enter something!", style("!").yellow());
        return;
    }

    println!("\n🔎 Searching...\n");
    let response = orchestrator.handle(message).await;
    termimad::print_text(&response);
}

async fn run_repl(orchestrator: &mut Orchestrator) -> Result<()> {
    println!("{}", style("🧑‍💻 jobscout").cyan().bold());
    println!("Hi! Ask me about jobs you are looking for (Ctrl+D to exit).\n");

    let history_path = config::get_input_history_path();
    let mut editor = DefaultEditor::new()?;
    if config::ensure_jobscout_dir().is_ok() {
        let _ = editor.load_history(&history_path);
    }

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    println!("{} Please enter something!", style("!").yellow());
                    continue;
                }
                let _ = editor.add_history_entry(input);

                run_turn(orchestrator, input).await;
                println!();
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\n👋 Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("❌ Error: {}", e);
                break;
            }
        }
    }

    if let Err(e) = editor.save_history(&history_path) {
        tracing::debug!(error = %e, "could not save input history");
    }

    Ok(())
}
