/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Fields we never read are left out; serde ignores them.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
///
/// The wrapper also carries a relevance `score`, which we discard.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as embedded in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// TVMaze show identifier
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster images, null or absent when the show has none
    #[serde(default)]
    pub image: Option<TvMazeImage>,
}

/// Image URLs of a show in the resolutions TVMaze provides.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// Full resolution image URL
    pub original: String,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// TVMaze episode identifier
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
