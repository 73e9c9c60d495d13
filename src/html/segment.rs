//! Widget dispatch for one inline-markup segment.
//!
//! [`SEGMENT_RULES`] is evaluated top to bottom and the first rule that
//! matches builds the fragment. The order is part of the language: headings
//! win over everything, `[x]`/`( )` choices are tried before buttons, `!!`
//! before `!`, and labelled fields before bare ones. Unmatched segments fall
//! back to a paragraph with inline substitutions.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use super::inline::{badge_html, escape_html, inline_text_html, link_html};
use crate::normalize::{humanize, is_known_input_type};

static HEADING_RE: LazyLock<Regex> =
    lazy_regex!(r"^(#{1,6})\s+(.+)$", "heading regex should compile");
static BULLET_RE: LazyLock<Regex> = lazy_regex!(r"^-\s+(.+)$", "bullet regex should compile");
static ORDERED_RE: LazyLock<Regex> =
    lazy_regex!(r"^\d+\.\s+(.+)$", "ordered item regex should compile");
static CHECKBOX_RE: LazyLock<Regex> =
    lazy_regex!(r"(?i)^\[(x| )?\]\s*(.+)?$", "checkbox regex should compile");
static RADIO_RE: LazyLock<Regex> =
    lazy_regex!(r"(?i)^\((x| )?\)\s*(.+)?$", "radio regex should compile");
static PRIMARY_QUOTED_RE: LazyLock<Regex> =
    lazy_regex!(r#"^!!"([^"]+)"$"#, "primary button regex should compile");
static PRIMARY_BARE_RE: LazyLock<Regex> =
    lazy_regex!(r"^!!([^\s|]+)$", "primary button regex should compile");
static BUTTON_QUOTED_RE: LazyLock<Regex> =
    lazy_regex!(r#"^!"([^"]+)"$"#, "button regex should compile");
static BUTTON_BARE_RE: LazyLock<Regex> =
    lazy_regex!(r"^!([^\s|]+)$", "button regex should compile");
static LABELED_TEXTAREA_RE: LazyLock<Regex> = lazy_regex!(
    r#"^([^:]+):\s*\^\^\s*(?:"([^"]*)")?$"#,
    "labelled textarea regex should compile",
);
static TEXTAREA_RE: LazyLock<Regex> =
    lazy_regex!(r#"^\^\^\s*(?:"([^"]*)")?$"#, "textarea regex should compile");
static LABELED_INPUT_RE: LazyLock<Regex> = lazy_regex!(
    r#"^([^:]+):\s*\^([a-zA-Z0-9_]+)\s*(?:"([^"]*)")?$"#,
    "labelled input regex should compile",
);
static INPUT_RE: LazyLock<Regex> = lazy_regex!(
    r#"^\^([a-zA-Z0-9_]+)\s*(?:"([^"]*)")?$"#,
    "input regex should compile",
);
static ICON_RE: LazyLock<Regex> =
    lazy_regex!(r"^i:([a-zA-Z0-9_-]+)$", "icon regex should compile");
static BADGE_RE: LazyLock<Regex> = lazy_regex!(r"^`\(([^)]+)\)`$", "badge regex should compile");
static LINK_RE: LazyLock<Regex> = lazy_regex!(r"^_([^_]+)_$", "link regex should compile");

/// One entry of the dispatch table.
pub(crate) struct SegmentRule {
    pub(crate) name: &'static str,
    render: fn(&str) -> Option<String>,
}

/// Ordered widget rules; the first match wins.
pub(crate) static SEGMENT_RULES: &[SegmentRule] = &[
    SegmentRule { name: "heading", render: heading },
    SegmentRule { name: "rule", render: horizontal_rule },
    SegmentRule { name: "bullet", render: bullet },
    SegmentRule { name: "ordered", render: ordered },
    SegmentRule { name: "checkbox", render: checkbox },
    SegmentRule { name: "radio", render: radio },
    SegmentRule { name: "primary-button", render: primary_button },
    SegmentRule { name: "button", render: button },
    SegmentRule { name: "labeled-textarea", render: labeled_textarea },
    SegmentRule { name: "textarea", render: textarea },
    SegmentRule { name: "labeled-input", render: labeled_input },
    SegmentRule { name: "input", render: input },
    SegmentRule { name: "icon", render: icon },
    SegmentRule { name: "badge", render: badge },
    SegmentRule { name: "link", render: link },
];

const FALLBACK_RULE: &str = "paragraph";

fn opt_group<'a>(caps: &Captures<'a>, idx: usize) -> &'a str {
    caps.get(idx).map_or("", |m| m.as_str())
}

fn is_checked(caps: &Captures<'_>) -> bool {
    opt_group(caps, 1).eq_ignore_ascii_case("x")
}

fn heading(s: &str) -> Option<String> {
    let caps = HEADING_RE.captures(s)?;
    let level = caps[1].len();
    Some(format!("<h{level}>{}</h{level}>", inline_text_html(&caps[2])))
}

fn horizontal_rule(s: &str) -> Option<String> {
    (s == "---").then(|| "<hr />".to_string())
}

fn bullet(s: &str) -> Option<String> {
    let caps = BULLET_RE.captures(s)?;
    Some(format!("<ul><li>{}</li></ul>", inline_text_html(&caps[1])))
}

fn ordered(s: &str) -> Option<String> {
    let caps = ORDERED_RE.captures(s)?;
    Some(format!("<ol><li>{}</li></ol>", inline_text_html(&caps[1])))
}

fn choice(re: &Regex, kind: &str, s: &str) -> Option<String> {
    let caps = re.captures(s)?;
    let checked = if is_checked(&caps) { " checked" } else { "" };
    let label = caps
        .get(2)
        .map(|m| inline_text_html(m.as_str()))
        .unwrap_or_default();
    Some(format!(
        r#"<label class="wt-choice"><input type="{kind}"{checked} />{label}</label>"#
    ))
}

fn checkbox(s: &str) -> Option<String> {
    choice(&CHECKBOX_RE, "checkbox", s)
}

fn radio(s: &str) -> Option<String> {
    choice(&RADIO_RE, "radio", s)
}

fn button_html(class: &str, label: &str) -> String {
    format!(r#"<button class="{class}">{}</button>"#, escape_html(label))
}

fn primary_button(s: &str) -> Option<String> {
    let caps = PRIMARY_QUOTED_RE
        .captures(s)
        .or_else(|| PRIMARY_BARE_RE.captures(s))?;
    Some(button_html("wt-btn primary", &caps[1]))
}

fn button(s: &str) -> Option<String> {
    let caps = BUTTON_QUOTED_RE
        .captures(s)
        .or_else(|| BUTTON_BARE_RE.captures(s))?;
    Some(button_html("wt-btn", &caps[1]))
}

fn textarea_html(label: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="wt-input"><label>{}</label><textarea placeholder="{}"></textarea></div>"#,
        escape_html(label),
        escape_html(placeholder)
    )
}

fn input_html(label: &str, kind: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="wt-input"><label>{}</label><input type="{}" placeholder="{}" /></div>"#,
        escape_html(label),
        escape_html(kind),
        escape_html(placeholder)
    )
}

fn input_type(name: &str) -> &str {
    if is_known_input_type(name) { name } else { "text" }
}

fn labeled_textarea(s: &str) -> Option<String> {
    let caps = LABELED_TEXTAREA_RE.captures(s)?;
    Some(textarea_html(caps[1].trim(), opt_group(&caps, 2)))
}

fn textarea(s: &str) -> Option<String> {
    let caps = TEXTAREA_RE.captures(s)?;
    Some(textarea_html("text", opt_group(&caps, 1)))
}

fn labeled_input(s: &str) -> Option<String> {
    let caps = LABELED_INPUT_RE.captures(s)?;
    Some(input_html(
        caps[1].trim(),
        input_type(&caps[2]),
        opt_group(&caps, 3),
    ))
}

fn input(s: &str) -> Option<String> {
    let caps = INPUT_RE.captures(s)?;
    let field = &caps[1];
    let label = if is_known_input_type(field) {
        field.to_string()
    } else {
        humanize(field)
    };
    Some(input_html(&label, input_type(field), opt_group(&caps, 2)))
}

fn icon(s: &str) -> Option<String> {
    let caps = ICON_RE.captures(s)?;
    Some(format!(
        r#"<span class="wt-icon">{}</span>"#,
        escape_html(&caps[1])
    ))
}

fn badge(s: &str) -> Option<String> {
    let caps = BADGE_RE.captures(s)?;
    Some(badge_html(&caps[1]))
}

fn link(s: &str) -> Option<String> {
    let caps = LINK_RE.captures(s)?;
    Some(link_html(&caps[1]))
}

/// Pick the widget for a trimmed, non-empty segment.
///
/// Returns the name of the rule that fired alongside the fragment.
pub(crate) fn dispatch(s: &str) -> (&'static str, String) {
    SEGMENT_RULES
        .iter()
        .find_map(|rule| (rule.render)(s).map(|html| (rule.name, html)))
        .unwrap_or_else(|| (FALLBACK_RULE, format!("<p>{}</p>", inline_text_html(s))))
}

/// Render one segment of a row. Blank segments produce nothing.
pub(crate) fn segment_html(segment: &str) -> String {
    let s = segment.trim();
    if s.is_empty() {
        return String::new();
    }
    let (rule, html) = dispatch(s);
    trace!(rule, segment = s, "segment");
    html
}
