//! Markdown rendering.
//!
//! One rendering path for both original and personalized content. Raw HTML
//! in the source is dropped rather than passed through, so backend-supplied
//! markup is never injected into the output as-is.

use pulldown_cmark::{Event, Options, Parser, html};

/// Renders markdown to HTML with raw HTML events removed.
pub fn to_sanitized_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_structure_is_rendered() {
        let html = to_sanitized_html("# Heading\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_html_blocks_are_dropped() {
        let html = to_sanitized_html("before\n\n<script>alert('x')</script>\n\nafter");
        assert!(!html.contains("script"));
        assert!(html.contains("before"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_inline_html_tags_are_dropped_but_text_kept() {
        let html = to_sanitized_html("a <b>bold</b> word");
        assert!(!html.contains("<b>"));
        assert!(html.contains("bold"));
    }

    #[test]
    fn test_tables_render() {
        let html = to_sanitized_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
