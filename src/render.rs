//! Plain text rendering of catalog records
//!
//! This module turns shows and episodes into the text blocks the CLI prints.
//! Summaries arrive as HTML and are converted to plain text here; the records
//! themselves keep the markup.

use crate::catalog::{EpisodeSummary, ShowSummary};

/// Renders a show as a multi-line card
///
/// The card lists the id, name, image URL and the summary as plain text.
/// The summary line is left out when the show has no summary.
///
/// # Examples
///
/// ```
/// use show_finder::{ShowSummary, render_show_card};
///
/// let show = ShowSummary {
///     id: 1,
///     name: "Batman".to_string(),
///     summary: Some("<p>The <b>Caped</b> Crusader</p>".to_string()),
///     image: "http://x/img.jpg".to_string(),
/// };
///
/// let card = render_show_card(&show);
/// assert!(card.contains("Caped"));
/// assert!(!card.contains("<b>"));
/// ```
pub fn render_show_card(show: &ShowSummary) -> String {
    let mut card = format!(
        "#{} {}\n  Image: {}\n",
        show.id, show.name, show.image
    );

    if let Some(summary) = show.summary.as_deref().map(summary_to_text) {
        if !summary.is_empty() {
            for line in summary.lines() {
                card.push_str("  ");
                card.push_str(line);
                card.push('\n');
            }
        }
    }

    card
}

/// Renders an episode as `name (season S, number N)`
///
/// Episodes without a title are shown as "Unknown".
pub fn render_episode_line(episode: &EpisodeSummary) -> String {
    format!(
        "{} (season {}, number {})",
        episode.name.as_deref().unwrap_or("Unknown"),
        episode.season,
        episode.number
    )
}

/// Renders the episode lines of a listing, one per line
pub fn render_episode_list(episodes: &[EpisodeSummary]) -> String {
    if episodes.is_empty() {
        return "No episodes found.\n".to_string();
    }

    episodes
        .iter()
        .map(|episode| render_episode_line(episode) + "\n")
        .collect()
}

/// Label used when offering a show for selection
pub fn show_choice_label(show: &ShowSummary) -> String {
    format!("{} [#{}]", show.name, show.id)
}

/// Converts an HTML summary to trimmed plain text
fn summary_to_text(summary: &str) -> String {
    nanohtml2text::html2text(summary).trim().to_string()
}
