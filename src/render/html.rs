// src/render/html.rs
// =============================================================================
// This module renders the "My Projects" section of the portfolio page.
//
// What the section looks like in each feed state:
// - Pending: six grey skeleton cards
// - Loaded:  one card per repository
// - Failed:  the placeholder card, with the error sentence replacing the
//            normal subtitle
//
// Each card shows:
// - The name as a title ("capy-flow" -> "Capy Flow")
// - Star and fork counts
// - The description
// - A language badge plus the first two topics
// - A "Code" link, and a "Demo" link only when the repo has a homepage
//
// Everything that came from GitHub goes through escape() before it lands in
// the markup.
// =============================================================================

use crate::feed::{DisplayRepo, FeedState};

const SUBTITLE: &str = "My recent projects from GitHub";
const SKELETON_CARDS: usize = 6;
const TOPIC_BADGES: usize = 2;

/// Renders a complete standalone HTML document around the projects section
pub fn render_page(state: &FeedState, account: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} | Projects</title>\n", escape(account)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&render_section(state));
    out.push_str("</body>\n</html>\n");
    out
}

/// Renders just the `<section id="projects">` fragment
pub fn render_section(state: &FeedState) -> String {
    let subtitle = state.error_message().unwrap_or(SUBTITLE);

    let mut out = String::new();
    out.push_str("<section id=\"projects\">\n");
    out.push_str("<h2>My Projects</h2>\n");

    // The error sentence takes the subtitle's place rather than adding a banner
    let class = if state.error_message().is_some() {
        "subtitle error"
    } else {
        "subtitle"
    };
    out.push_str(&format!("<p class=\"{}\">{}</p>\n", class, escape(subtitle)));

    out.push_str("<div class=\"grid\">\n");
    if state.is_loading() {
        for _ in 0..SKELETON_CARDS {
            out.push_str(SKELETON);
        }
    } else {
        for repo in state.repositories() {
            out.push_str(&render_card(repo));
        }
    }
    out.push_str("</div>\n</section>\n");
    out
}

const SKELETON: &str = "<div class=\"card skeleton\" aria-hidden=\"true\">\
<div class=\"line title\"></div><div class=\"line\"></div>\
<div class=\"block\"></div><div class=\"line badge\"></div></div>\n";

fn render_card(repo: &DisplayRepo) -> String {
    let mut out = String::new();
    out.push_str(&format!("<article class=\"card\" data-id=\"{}\">\n", repo.id));

    out.push_str(&format!(
        "<h3 class=\"card-title\">{}</h3>\n",
        escape(&display_title(&repo.name))
    ));
    out.push_str(&format!(
        "<div class=\"stats\"><span class=\"stars\">{}</span>\
         <span class=\"forks\">{}</span></div>\n",
        repo.stargazers_count, repo.forks_count
    ));
    out.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape(&repo.description)
    ));

    out.push_str("<div class=\"badges\">");
    out.push_str(&format!(
        "<span class=\"badge language\">{}</span>",
        escape(&repo.language)
    ));
    for topic in repo.topics.iter().take(TOPIC_BADGES) {
        out.push_str(&format!("<span class=\"badge topic\">{}</span>", escape(topic)));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"links\">");
    out.push_str(&external_link("code", &repo.html_url, "Code"));
    if repo.has_demo() {
        out.push_str(&external_link("demo", &repo.homepage, "Demo"));
    }
    out.push_str("</div>\n</article>\n");
    out
}

fn external_link(class: &str, href: &str, label: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        class,
        escape(href),
        label
    )
}

/// Turns a repository name into a card title
///
/// Dashes become spaces and every word starts upper-case:
///   "capy-flow"     -> "Capy Flow"
///   "my_dotfiles"   -> "My_dotfiles"   (underscore is part of the word)
///   "api.v2-client" -> "Api.V2 Client"
pub fn display_title(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        in_word = is_word;
    }

    title
}

/// Escapes text for use in HTML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
