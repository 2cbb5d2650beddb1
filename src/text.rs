//! String normalization helpers.
//!
//! All length arithmetic here counts *characters*, not bytes, so multi-byte
//! input is never split mid-sequence. None of these functions can fail.

/// Suffix appended by [`truncate`].
const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_length` characters, appending `"..."`
/// when truncation happens.
///
/// See [`truncate_with`] for the exact boundary rules.
pub fn truncate(text: &str, max_length: usize) -> String {
    truncate_with(text, max_length, ELLIPSIS)
}

/// Truncate `text` to at most `max_length` characters, appending `suffix`
/// when truncation happens.
///
/// - Text that already fits is returned unchanged; the suffix is never
///   added when no truncation is needed.
/// - Otherwise the result is the leading characters of `text` plus the full
///   suffix, exactly `max_length` characters long.
/// - When the suffix alone doesn't fit the budget, the suffix itself is
///   truncated to `max_length` characters and returned without any of the
///   text (so `max_length == 0` yields an empty string).
///
/// # Examples
///
/// ```
/// use neatly::text::{truncate, truncate_with};
///
/// assert_eq!(truncate("hello world", 8), "hello...");
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate_with("hello wide world", 11, " [...]"), "hello [...]");
/// ```
pub fn truncate_with(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let suffix_len = suffix.chars().count();
    if suffix_len >= max_length {
        return suffix.chars().take(max_length).collect();
    }

    let available = max_length - suffix_len;
    let mut result: String = text.chars().take(available).collect();
    result.push_str(suffix);
    result
}

/// Convert `text` to kebab-case.
///
/// Each maximal run of whitespace and underscores collapses to a single
/// hyphen, a hyphen is inserted at every lowercase→uppercase boundary
/// (camelCase and PascalCase word breaks), and the result is lowercased.
///
/// The conversion is idempotent: feeding the output back in returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use neatly::text::kebab_case;
///
/// assert_eq!(kebab_case("helloWorld"), "hello-world");
/// assert_eq!(kebab_case("hello   world"), "hello-world");
/// assert_eq!(kebab_case("some_snake_case"), "some-snake-case");
/// ```
pub fn kebab_case(text: &str) -> String {
    // Separator runs collapse first so the case-boundary pass only ever
    // sees single hyphens between words.
    let mut collapsed = String::with_capacity(text.len());
    let mut in_separator = false;
    for c in text.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator {
                collapsed.push('-');
            }
            in_separator = true;
        } else {
            collapsed.push(c);
            in_separator = false;
        }
    }

    let mut result = String::with_capacity(collapsed.len() + 4);
    let mut prev_is_lowercase = false;
    for c in collapsed.chars() {
        if prev_is_lowercase && c.is_uppercase() {
            result.push('-');
        }
        prev_is_lowercase = c.is_lowercase();
        for lower in c.to_lowercase() {
            result.push(lower);
        }
    }
    result
}
