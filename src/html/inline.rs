//! Escaping and inline span substitution.

use std::sync::LazyLock;

use regex::Regex;

static INLINE_SPAN_RE: LazyLock<Regex> = lazy_regex!(
    r"_[^_]+_|`\([^)]+\)`",
    "inline span regex should compile",
);

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
///
/// ```
/// use wiretext::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn link_html(label: &str) -> String {
    format!(r##"<a href="#" class="wt-link">{}</a>"##, escape_html(label))
}

pub(crate) fn badge_html(label: &str) -> String {
    format!(r#"<span class="wt-badge">{}</span>"#, escape_html(label))
}

/// Render free text, turning `_label_` spans into links and `` `(x)` ``
/// spans into badges. Everything else is escaped.
pub(crate) fn inline_text_html(raw: &str) -> String {
    let text = raw.trim();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in INLINE_SPAN_RE.find_iter(text) {
        out.push_str(&escape_html(&text[last..span.start()]));
        let matched = span.as_str();
        if let Some(label) = matched.strip_prefix('_').and_then(|m| m.strip_suffix('_')) {
            out.push_str(&link_html(label));
        } else if let Some(label) = matched.strip_prefix("`(").and_then(|m| m.strip_suffix(")`")) {
            out.push_str(&badge_html(label));
        }
        last = span.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}
