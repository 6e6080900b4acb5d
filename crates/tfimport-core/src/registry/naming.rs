use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_ \-]").expect("valid regex"));
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

/// Normalize free text into a slug-safe snake_case fragment
///
/// `"HTMLParser-2 Test"` becomes `"html_parser_2_test"`.
pub fn to_snake_case(input: &str) -> String {
    let s = UNSAFE_CHARS.replace_all(input, "");
    let s = ACRONYM_BOUNDARY.replace_all(&s, "${1}_${2}");
    let s = CAMEL_BOUNDARY.replace_all(&s, "${1}_${2}");
    let s = WHITESPACE.replace_all(&s, "_");
    // Hyphens become underscores before collapsing so "a - b" yields "a_b"
    let s = s.replace('-', "_");
    let s = UNDERSCORES.replace_all(&s, "_");

    s.trim_end_matches('_').to_ascii_lowercase()
}
