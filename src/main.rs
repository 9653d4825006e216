mod cli;

use clap::Parser;
use cli::{Cli, Command};
use dialoguer::{Input, Select};
use show_finder::{
    CatalogError, EpisodeSummary, ShowCatalog, ShowSummary, TvMazeCatalog, render_episode_list,
    render_show_card, show_choice_label,
};
use std::process;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that end a command
#[derive(Debug, Error)]
enum CliError {
    /// Talking to the catalog failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading from the terminal failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Failed to serialize results as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initializes logging to stderr
///
/// RUST_LOG takes precedence; otherwise only warnings are shown, or debug
/// output of this crate when verbose.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "show_finder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints one card per show
fn print_shows(shows: &[ShowSummary]) {
    if shows.is_empty() {
        println!("No shows found.");
        return;
    }

    for show in shows {
        println!("{}", render_show_card(show));
    }
}

/// Prints one line per episode
fn print_episodes(episodes: &[EpisodeSummary]) {
    println!("\n=== Episodes ===");
    println!("{}", render_episode_list(episodes));
}

async fn search(catalog: &impl ShowCatalog, term: &str, json: bool) -> Result<(), CliError> {
    let shows = catalog.search_shows(term).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&shows)?);
    } else {
        print_shows(&shows);
    }

    Ok(())
}

async fn episodes(catalog: &impl ShowCatalog, show_id: u64, json: bool) -> Result<(), CliError> {
    let episodes = catalog.list_episodes(show_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&episodes)?);
    } else {
        print_episodes(&episodes);
    }

    Ok(())
}

/// Interactive loop: search, then pick shows to list their episodes
///
/// Failed requests are reported and the loop carries on with what was
/// displayed before.
async fn browse(catalog: &impl ShowCatalog, first_term: Option<String>) -> Result<(), CliError> {
    let mut next_term = first_term;

    loop {
        let term = match next_term.take() {
            Some(term) => term,
            None => Input::<String>::new()
                .with_prompt("Search shows")
                .allow_empty(true)
                .interact_text()?,
        };

        let shows = match catalog.search_shows(&term).await {
            Ok(shows) => shows,
            Err(e) => {
                eprintln!("Search failed: {}", e);
                continue;
            }
        };

        println!();
        print_shows(&shows);

        let mut choices: Vec<String> = shows.iter().map(show_choice_label).collect();
        choices.push("New search".to_string());
        choices.push("Quit".to_string());

        loop {
            let choice = Select::new()
                .with_prompt("Episodes of")
                .items(&choices)
                .default(0)
                .interact()?;

            if choice == shows.len() {
                break;
            }
            if choice == shows.len() + 1 {
                return Ok(());
            }

            match catalog.list_episodes(shows[choice].id).await {
                Ok(episodes) => print_episodes(&episodes),
                Err(e) => eprintln!("Episode lookup failed: {}", e),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = TvMazeCatalog::with_base_url(&cli.api_url);
    tracing::debug!(api_url = catalog.base_url(), "Using TVMaze catalog");

    let result = match cli.command {
        Command::Search { term, json } => search(&catalog, &term, json).await,
        Command::Episodes { show_id, json } => episodes(&catalog, show_id, json).await,
        Command::Browse { term } => browse(&catalog, term).await,
    };

    if let Err(e) = result {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
