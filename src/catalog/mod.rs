/// Data structures and traits for querying a TV show catalog.
///
/// This module provides the normalized show and episode records handed to
/// the presentation layer, as well as the trait implemented by catalog
/// providers.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{DEFAULT_API_URL, DEFAULT_IMAGE_URL, TvMazeCatalog};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the catalog.
///
/// Every variant is a failed remote call; they only differ in how it failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The catalog answered with a non-success status
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Failed to parse the catalog's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A show matching a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// Catalog identifier, used to look up the episodes
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Summary as provided by the catalog, HTML markup included
    pub summary: Option<String>,
    /// URL of the original resolution image, or a placeholder
    pub image: String,
}

/// Represents a single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Catalog identifier of the episode
    pub id: u64,
    /// The episode title, None when the catalog has no title for it
    pub name: Option<String>,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub number: u32,
}

/// Trait for catalogs that can search shows and list their episodes.
///
/// Both operations issue a single request and return records in the order
/// the catalog delivered them.
#[async_trait::async_trait]
pub trait ShowCatalog: Send + Sync {
    /// Searches shows by free text.
    ///
    /// # Arguments
    ///
    /// * `term` - The search term, passed to the catalog unchanged
    ///
    /// # Returns
    ///
    /// One `ShowSummary` per search hit, or a CatalogError
    async fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, CatalogError>;

    /// Lists all episodes of a show.
    ///
    /// # Arguments
    ///
    /// * `show_id` - Identifier taken from a `ShowSummary`
    async fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeSummary>, CatalogError>;
}
