//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

/// Rust identifier syntax: `XID_Start` or `_`, then any `XID_Continue`.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").expect("identifier pattern is valid")
});

/// Keywords that are accepted as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that can't be used as identifiers at all, not even raw.
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Checks if `name` can be emitted as a Rust identifier (possibly raw).
///
/// # Examples
///
/// ```
/// use glotgen::utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("login_title"));
/// assert!(is_valid_identifier("type"));
/// assert!(is_valid_identifier("título"));
/// assert!(!is_valid_identifier("sign-in"));
/// assert!(!is_valid_identifier("1st"));
/// assert!(!is_valid_identifier("self"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && name != "_" && !RESERVED_PATH_KEYWORDS.contains(&name)
}

/// Render `name` as an identifier, using the raw form for keywords.
pub fn render_identifier(name: &str) -> String {
    if RAW_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Render `value` as a Rust string literal, quotes included.
///
/// The `Debug` form of `str` escapes quotes, backslashes and control
/// characters with syntax the Rust lexer accepts.
pub fn rust_string_literal(value: &str) -> String {
    format!("{:?}", value)
}

/// Checks if `path` is a `::`-separated Rust path such as `glotgen::runtime`.
pub fn is_valid_module_path(path: &str) -> bool {
    let path = path.strip_prefix("::").unwrap_or(path);
    !path.is_empty()
        && path
            .split("::")
            .all(|segment| IDENTIFIER.is_match(segment) && segment != "_")
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
