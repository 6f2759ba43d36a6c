use regex::Regex;
use std::sync::LazyLock;

/// Text between a `>` and the next `<`.
pub static MARKUP_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*([^<>]+?)\s*<").unwrap());

/// Like [`MARKUP_TEXT_RE`], but the text may not open with a brace or a
/// newline and may not contain braces at all.
pub static TEMPLATE_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*([^<>{}\n][^<>{}]*)\s*<").unwrap());

/// Double-quoted literal of at least three characters on a single line.
pub static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\n]{3,})""#).unwrap());

/// Lowercase single token such as `flex`, `gap-2` or `nav_item`.
pub static CLASS_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

/// Capture group 1 of every non-overlapping match, in document order.
pub fn captures<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
