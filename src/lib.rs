//! show_finder - Search the TVMaze catalog for shows and their episodes
//!
//! This library provides an async client for the TVMaze API that normalizes
//! search hits and episode listings into small fixed-shape records, plus
//! plain text rendering of those records for the command line.
//!
//! # Examples
//!
//! ```no_run
//! use show_finder::{ShowCatalog, TvMazeCatalog};
//!
//! # async fn run() -> Result<(), show_finder::CatalogError> {
//! let catalog = TvMazeCatalog::new();
//!
//! let shows = catalog.search_shows("batman").await?;
//! if let Some(show) = shows.first() {
//!     for episode in catalog.list_episodes(show.id).await? {
//!         println!("{}", show_finder::render_episode_line(&episode));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod render;

pub use catalog::{
    CatalogError, DEFAULT_API_URL, DEFAULT_IMAGE_URL, EpisodeSummary, ShowCatalog, ShowSummary,
    TvMazeCatalog,
};

pub use render::{render_episode_line, render_episode_list, render_show_card, show_choice_label};
