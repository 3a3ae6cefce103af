//! Markdown to HTML for annotation bodies.

use pulldown_cmark::{Event, Options, Parser, html};

use crate::domain::HtmlFragment;

/// Render annotation Markdown.
///
/// Raw HTML blocks and inline tags are shown as text, never passed through.
pub(super) fn render(markdown: &str) -> HtmlFragment {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });
    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    HtmlFragment::trusted(rendered)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for annotation rendering.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn renders_emphasis_and_paragraphs() {
        let html = render("**Summary**\n\nThe *main* claim holds.");
        assert_eq!(
            html.as_str(),
            "<p><strong>Summary</strong></p>\n<p>The <em>main</em> claim holds.</p>\n"
        );
    }

    #[rstest]
    #[case("<script>alert(1)</script>")]
    #[case("Inline <img src=x onerror=alert(1)> tag")]
    fn raw_html_is_escaped(#[case] markdown: &str) {
        let html = render(markdown);
        assert!(!html.as_str().contains("<script"));
        assert!(!html.as_str().contains("<img"));
        assert!(html.as_str().contains("&lt;"));
    }
}
