//! Interactive chat REPL for the Yojana assistant.
//!
//! Maintains a single conversation session against the in-process chat
//! service. `/new` starts a fresh session, `/quit` exits.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use yojana_application::ChatService;
use yojana_infrastructure::{InMemorySessionRepository, load_catalog_from_path};

#[derive(Parser)]
#[command(name = "yojana")]
#[command(about = "Yojana Sathi - government welfare scheme assistant", long_about = None)]
struct Cli {
    /// Path to an external scheme catalog (TOML); defaults to the embedded dataset
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let service = match &cli.catalog {
        Some(path) => {
            let catalog = load_catalog_from_path(path)?;
            ChatService::new(
                Arc::new(catalog),
                Arc::new(InMemorySessionRepository::new()),
            )
        }
        None => ChatService::in_memory()?,
    };

    println!(
        "{} covering {} schemes. Ask about schemes, or type {} for a fresh session, {} to exit.\n",
        "Yojana Sathi".bold().green(),
        service.catalog().len(),
        "/new".cyan(),
        "/quit".cyan()
    );

    let mut editor = DefaultEditor::new()?;
    let mut session_id: Option<String> = None;

    loop {
        let line = match editor.readline(&format!("{} ", "you>".cyan())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        editor.add_history_entry(query)?;

        match query {
            "/quit" | "/exit" => break,
            "/new" => {
                if let Some(id) = session_id.take() {
                    service.delete_session(&id).await?;
                }
                println!("{}\n", "Started a fresh session.".yellow());
                continue;
            }
            _ => {}
        }

        let outcome = service.handle_query(session_id.as_deref(), query).await?;
        session_id = Some(outcome.session_id);
        println!("\n{}\n", outcome.response);
    }

    println!("{}", "Bye!".green());
    Ok(())
}
