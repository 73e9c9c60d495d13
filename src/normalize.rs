//! Inline markup normalization for the ASCII renderer.
//!
//! Row markup is rewritten into a single plain-text form by a fixed,
//! order-sensitive list of substitutions. Later rules see the output of
//! earlier ones, so the order of [`RULES`] matters: for instance caret fields
//! are expanded before the bang rules run, and `!!` is tried before `!`.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::table::is_table_row;

/// Input types a caret field may name directly.
pub const KNOWN_INPUT_TYPES: &[&str] = &[
    "text", "password", "date", "time", "phone", "email", "number", "url", "search", "tel",
    "color", "file", "range",
];

/// Whether `name` is one of [`KNOWN_INPUT_TYPES`].
#[must_use]
pub fn is_known_input_type(name: &str) -> bool {
    KNOWN_INPUT_TYPES.contains(&name)
}

/// Turn a field identifier into a label by replacing underscores with spaces.
#[must_use]
pub fn humanize(name: &str) -> String {
    name.replace('_', " ")
}

enum Replacement {
    Template(&'static str),
    Field,
}

struct Rule {
    pattern: LazyLock<Regex>,
    replacement: Replacement,
}

impl Rule {
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Field => self.pattern.replace_all(text, |caps: &Captures<'_>| {
                let field = &caps[1];
                if is_known_input_type(field) {
                    format!("[{field}]")
                } else {
                    format!("{}: [text]", humanize(field))
                }
            }),
        }
    }
}

macro_rules! rule {
    ($pattern:expr, field) => {
        Rule {
            pattern: lazy_regex!($pattern, "normalizer regex should compile"),
            replacement: Replacement::Field,
        }
    };
    ($pattern:expr, $template:expr) => {
        Rule {
            pattern: lazy_regex!($pattern, "normalizer regex should compile"),
            replacement: Replacement::Template($template),
        }
    };
}

static RULES: [Rule; 13] = [
    rule!(r"^#+\s+", ""),
    rule!(r"^[-*]\s+", "- "),
    rule!(r"^\d+\.\s+", ""),
    rule!(r"`\(([^)]*)\)`", "(${1})"),
    rule!(r#"^\^\^\s+"([^"]+)"$"#, "[textarea: ${1}]"),
    rule!(r"^\^\^$", "[textarea]"),
    rule!(r"\^([a-zA-Z0-9_]+)", field),
    rule!(r#"!!"([^"]+)""#, "[! ${1}]"),
    rule!(r#"!"([^"]+)""#, "[${1}]"),
    rule!(r"!!([^\s|]+)", "[! ${1}]"),
    rule!(r"!([^\s|]+)", "[${1}]"),
    rule!(r"i:([a-zA-Z0-9_\-]+)", "<${1}>"),
    rule!(r"_([^_]+)_", "${1}"),
];

static TABLE_PIPE: Rule = rule!(r"\s*\|\s*", " | ");

static WHITESPACE_RE: LazyLock<Regex> = lazy_regex!(r"\s+", "whitespace regex should compile");

/// Rewrite one row of inline markup into the plain text shown in ASCII
/// layouts.
///
/// Pipe-delimited table rows keep their pipes, spaced as ` | `; in any other
/// row pipes only separate cells and are dropped. Whitespace is collapsed
/// and trimmed last.
///
/// # Examples
///
/// ```
/// use wiretext::normalize_row;
///
/// assert_eq!(normalize_row("^email"), "[email]");
/// assert_eq!(normalize_row("^first_name"), "first name: [text]");
/// assert_eq!(normalize_row("!Cancel | !!\"Create account\""), "[Cancel] [! Create account]");
/// ```
#[must_use]
pub fn normalize_row(text: &str) -> String {
    let trimmed = text.trim();
    let table_row = is_table_row(trimmed);

    let mut out = trimmed.to_string();
    for rule in &RULES {
        out = rule.apply(&out).into_owned();
    }

    out = if table_row {
        TABLE_PIPE.apply(&out).into_owned()
    } else {
        out.replace('|', " ")
    };
    WHITESPACE_RE.replace_all(&out, " ").trim().to_string()
}
