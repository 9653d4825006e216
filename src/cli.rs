//! Command line interface definition

use clap::{Parser, Subcommand};
use show_finder::DEFAULT_API_URL;

/// Search the TVMaze catalog for tv shows and list their episodes
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, env = "TVMAZE_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Log requests and results to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search shows by title
    Search {
        /// The search term
        term: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the episodes of a show
    Episodes {
        /// Show id as printed by `search`
        show_id: u64,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search interactively and pick shows to list their episodes
    Browse {
        /// Term for the first search; prompted for when omitted
        term: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["show_finder", "search", "the wire", "--json"]).unwrap();
        assert_eq!(cli.api_url, DEFAULT_API_URL);
        assert!(!cli.verbose);
        match cli.command {
            Command::Search { term, json } => {
                assert_eq!(term, "the wire");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_episodes_with_api_url() {
        let cli = Cli::try_parse_from([
            "show_finder",
            "episodes",
            "169",
            "--api-url",
            "http://localhost:9000",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://localhost:9000");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Episodes {
                show_id: 169,
                json: false
            }
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_show_id() {
        assert!(Cli::try_parse_from(["show_finder", "episodes", "batman"]).is_err());
    }
}
