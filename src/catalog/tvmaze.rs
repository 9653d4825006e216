/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogError, EpisodeSummary, ShowCatalog, ShowSummary};
use serde::de::DeserializeOwned;

/// Base URL of the public TVMaze API.
pub const DEFAULT_API_URL: &str = "https://api.tvmaze.com";

/// Image used for shows that have none in the catalog.
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Catalog backed by the TVMaze API.
///
/// Uses the `/search/shows` endpoint for searching and
/// `/shows/{id}/episodes` for the episode listing.
#[derive(Debug, Clone)]
pub struct TvMazeCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a catalog talking to the public TVMaze API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a catalog talking to the given API base URL.
    ///
    /// A trailing slash is ignored.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the API base URL this catalog talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Converts a TVMaze search hit to our ShowSummary.
    ///
    /// Falls back to the placeholder image when the show has none.
    fn convert_show(result: TvMazeSearchResult) -> ShowSummary {
        let show = result.show;
        ShowSummary {
            id: show.id,
            name: show.name,
            summary: show.summary,
            image: show
                .image
                .map(|image| image.original)
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }

    fn convert_episode(episode: TvMazeEpisode) -> EpisodeSummary {
        EpisodeSummary {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number: episode.number,
        }
    }

    /// Sends a GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        tracing::debug!(url, ?query, "Requesting TVMaze");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        // Ensure request was successful
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // Read the whole body first so transport and decoding errors stay apart
        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ShowCatalog for TvMazeCatalog {
    async fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, CatalogError> {
        let url = format!("{}/search/shows", self.base_url);

        let results: Vec<TvMazeSearchResult> = self.get_json(&url, &[("q", term)]).await?;

        let shows: Vec<ShowSummary> = results.into_iter().map(Self::convert_show).collect();
        tracing::debug!(term, count = shows.len(), "Shows found");

        Ok(shows)
    }

    async fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeSummary>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let episodes: Vec<TvMazeEpisode> = self.get_json(&url, &[]).await?;

        let episodes: Vec<EpisodeSummary> =
            episodes.into_iter().map(Self::convert_episode).collect();
        tracing::debug!(show_id, count = episodes.len(), "Episodes found");

        Ok(episodes)
    }
}
