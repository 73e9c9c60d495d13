//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// Every pattern in the crate is a literal, so a failure here is a
/// programming error caught by the first test that touches the pattern.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static SECTION: LazyLock<Regex> = wiretext::lazy_regex!(r"^=(\S+)", "section marker");
/// assert!(SECTION.is_match("=main"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect($msg))
    };
}
