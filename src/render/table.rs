// src/render/table.rs
// =============================================================================
// Prints the feed as a human-readable table in the terminal, followed by a
// short summary. Used by `repo-showcase show` (without --json).
// =============================================================================

use crate::feed::FeedState;

const NAME_WIDTH: usize = 30;
const LANGUAGE_WIDTH: usize = 12;
const URL_WIDTH: usize = 50;

/// Formats the settled feed as a table
pub fn format_table(state: &FeedState) -> String {
    let mut out = String::new();

    if let Some(message) = state.error_message() {
        out.push_str(&format!("⚠️  {}\n\n", message));
    }

    out.push_str(&format!(
        "{:<32} {:<14} {:>6} {:>6}  {}\n",
        "NAME", "LANGUAGE", "STARS", "FORKS", "URL"
    ));
    out.push_str(&format!("{}\n", "=".repeat(32 + 1 + 14 + 1 + 6 + 1 + 6 + 2 + URL_WIDTH)));

    for repo in state.repositories() {
        out.push_str(&format!(
            "{:<32} {:<14} {:>6} {:>6}  {}\n",
            truncate(&repo.name, NAME_WIDTH),
            truncate(&repo.language, LANGUAGE_WIDTH),
            repo.stargazers_count,
            repo.forks_count,
            truncate(&repo.html_url, URL_WIDTH),
        ));
        if repo.has_demo() {
            out.push_str(&format!("{:<32} demo: {}\n", "", repo.homepage));
        }
    }

    let stars: u64 = state.repositories().iter().map(|r| r.stargazers_count).sum();

    out.push('\n');
    out.push_str("📊 Summary:\n");
    out.push_str(&format!("   📋 Projects: {}\n", state.repositories().len()));
    out.push_str(&format!("   ⭐ Stars: {}\n", stars));
    out
}

// Shortens long values so the columns stay aligned
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let kept: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}
