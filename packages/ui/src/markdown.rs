//! Markdown rendering for note content.

use dioxus::prelude::*;
use pulldown_cmark::{Options, Parser};

/// Render markdown source to HTML.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Note content rendered as markdown.
#[component]
pub fn Markdown(source: String) -> Element {
    let html = render_markdown(&source);
    rsx! {
        div {
            class: "markdown-body",
            dangerous_inner_html: "{html}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = render_markdown("# Call summary\n\nSpoke with *Ada*.");
        assert!(html.contains("<h1>Call summary</h1>"));
        assert!(html.contains("<em>Ada</em>"));
    }

    #[test]
    fn test_renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        let html = render_markdown("just text");
        assert_eq!(html.trim(), "<p>just text</p>");
    }
}
