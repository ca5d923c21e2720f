//! Markdown rendering for rich-text policy paragraphs.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown fragment to HTML.
///
/// Only inline emphasis, links and paragraphs are expected in site content;
/// tables and footnotes are left disabled.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
