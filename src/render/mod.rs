// src/render/mod.rs
// =============================================================================
// Presentation of a settled feed.
//
// Submodules:
// - html: the "My Projects" section of the portfolio page (cards grid)
// - table: a plain terminal table with a summary
//
// JSON output needs no module of its own: FeedState::snapshot() serializes
// directly with serde_json.
// =============================================================================

mod html;
mod table;

pub use html::{render_page, render_section};
pub use table::format_table;
