//! Python `re` syntax on top of `fancy_regex`.
//!
//! Flake8 compiles filter patterns with Python's `re`, so an entry is
//! valid exactly when Python accepts it. The two dialects mostly overlap;
//! [`translate`] rewrites the spellings that differ and rejects the
//! extensions only `fancy_regex` understands.

use fancy_regex::Regex;

/// Letters Python accepts after a backslash outside a character class.
const ESCAPES: &str = "abBdDfnrstvwWAZxuU";

/// Letters Python accepts after a backslash inside a character class.
const CLASS_ESCAPES: &str = "abdDfnrstvwWxuU";

/// Rewrite a Python pattern into `fancy_regex` syntax.
///
/// Returns `None` for constructs Python rejects:
/// - unknown letter escapes such as `\e`, `\z`, `\p{L}` or `\k<n>`
/// - braced hex escapes like `\x{41}`
/// - `(?<name>...)` groups, which Python spells `(?P<name>...)`
///
/// `\Z` becomes `\z`. Inside a class `\b` is a backspace and `[` is a
/// literal.
pub fn translate(pattern: &str) -> Option<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    // Trailing backslash, invalid in both dialects.
                    out.push('\\');
                    break;
                };

                if escaped.is_ascii_alphabetic() {
                    let allowed = if in_class { CLASS_ESCAPES } else { ESCAPES };
                    if !allowed.contains(escaped) {
                        return None;
                    }
                    if matches!(escaped, 'x' | 'u' | 'U') && chars.peek() == Some(&'{') {
                        return None;
                    }
                }

                match escaped {
                    'Z' => out.push_str(r"\z"),
                    'b' if in_class => out.push_str(r"\x08"),
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
            }
            '[' if in_class => out.push_str(r"\["),
            '[' => {
                in_class = true;
                out.push('[');
                if chars.next_if_eq(&'^').is_some() {
                    out.push('^');
                }
                // A leading `]` is a member, not the end of the class.
                if chars.next_if_eq(&']').is_some() {
                    out.push_str(r"\]");
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '(' if !in_class => {
                out.push('(');
                if chars.next_if_eq(&'?').is_some() {
                    out.push('?');
                    if chars.next_if_eq(&'<').is_some() {
                        if !matches!(chars.peek(), Some('=' | '!')) {
                            return None;
                        }
                        out.push('<');
                    }
                }
            }
            other => out.push(other),
        }
    }

    Some(out)
}

/// Whether Python's `re` would compile `pattern`.
pub fn compiles(pattern: &str) -> bool {
    translate(pattern).is_some_and(|rust| Regex::new(&rust).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_string_anchor_is_translated() {
        assert_eq!(translate(r".*\.py\Z").as_deref(), Some(r".*\.py\z"));
        assert!(compiles(r".*\.py\Z"));
    }

    #[test]
    fn escapes_unknown_to_python_are_rejected() {
        for pattern in [r"\p{L}", r"\z", r"\e", r"\k<n>", r"\x{41}"] {
            assert!(!compiles(pattern), "{pattern} should be rejected");
        }
    }

    #[test]
    fn angle_bracket_named_groups_are_rejected() {
        assert!(!compiles("(?<n>a)"));
        assert!(compiles(r"(?P<stem>test_)\w+\.py"));
    }

    #[test]
    fn lookaround_is_accepted() {
        assert!(compiles(r"(?!test_).*\.py"));
        assert!(compiles(r"(?<=src/)\w+"));
        assert!(compiles(r"(?<!_)test"));
    }

    #[test]
    fn class_escapes_follow_python() {
        assert!(compiles(r"[\b]"));
        assert!(compiles(r"[\d_.]+"));
        assert!(!compiles(r"[\Z]"));
        assert!(!compiles(r"[\A]"));
    }

    #[test]
    fn brackets_inside_class_are_literal() {
        assert_eq!(translate("[[]").as_deref(), Some(r"[\[]"));
        assert!(compiles("[[]"));
        assert!(compiles("[]a]"));
    }

    #[test]
    fn escaped_punctuation_passes_through() {
        assert_eq!(translate(r"\(?<n>\)").as_deref(), Some(r"\(?<n>\)"));
        assert!(compiles(r"\x41\.py"));
    }

    #[test]
    fn malformed_patterns_still_fail() {
        for pattern in ["(", "[", "*invalid", "a\\"] {
            assert!(!compiles(pattern), "{pattern} should be rejected");
        }
    }
}
