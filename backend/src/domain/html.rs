//! Trusted HTML fragments.
//!
//! Page content is assembled from fragments that are already safe to embed.
//! Text from the outside world enters through [`HtmlFragment::escape`] or a
//! renderer that escapes it; [`HtmlFragment::trusted`] is reserved for markup
//! produced by our own templates and sanitising adapters.

use std::fmt;

/// A piece of HTML that is safe to embed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    /// Wrap markup produced by a template or sanitiser.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escape plain text into a fragment.
    ///
    /// # Examples
    /// ```
    /// use reviewhub::domain::HtmlFragment;
    ///
    /// let fragment = HtmlFragment::escape("<b>Tom & Jerry</b>");
    /// assert_eq!(fragment.as_str(), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
    /// ```
    #[must_use]
    pub fn escape(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// An empty fragment, used when secondary content is unavailable.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Raw markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the fragment renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Visible text of the fragment with tags removed.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        strip_tags(&self.0)
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HtmlFragment> for String {
    fn from(value: HtmlFragment) -> Self {
        value.0
    }
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Drop everything between `<` and `>` and collapse whitespace.
///
/// Used for Open Graph descriptions and for publisher markup (JATS, inline
/// formatting in titles) that should be shown as text.
#[must_use]
pub fn strip_tags(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            other if !in_tag => text.push(other),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
