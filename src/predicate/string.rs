//! String predicates
//!
//! Lengths are measured in UTF-16 code units, which is how browser form
//! controls report the length of what a user typed. For ASCII input this is
//! the same as the byte length.

use regex::Regex;

use super::combinators::Predicate;

/// Length of a string in UTF-16 code units.
#[inline]
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// ```rust
/// use formwater::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string is empty or whitespace only.
#[derive(Clone, Copy, Default, Debug)]
pub struct Blank;

impl Predicate<str> for Blank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.trim().is_empty()
    }
}

/// Create a predicate that checks if a string has no non-whitespace content.
pub fn is_blank() -> Blank {
    Blank
}

/// Predicate that checks string length is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = utf16_len(value);
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// ```rust
/// use formwater::predicate::*;
///
/// let p = len_between(3, 20);
/// assert!(!p.check("ab"));
/// assert!(p.check("abc"));
/// assert!(p.check("a_twenty_char_name_x"));
/// assert!(!p.check("a_twenty_one_chars_xy"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if string length is at least min.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Predicate that checks if all characters satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AllChars<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that checks if all characters satisfy a condition.
///
/// Vacuously true for the empty string; pair it with [`not_empty`] when at
/// least one character is required.
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// Predicate that checks if a string matches a regular expression.
#[derive(Clone, Copy, Debug)]
pub struct Matches<'r>(pub &'r Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks a string against a compiled pattern.
///
/// Anchor the pattern with `^`/`$` for whole-string matches.
pub fn matches(pattern: &Regex) -> Matches<'_> {
    Matches(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len("password"), 8);
        assert_eq!(utf16_len("héllo"), 5);
        // astral characters take two code units
        assert_eq!(utf16_len("🔒🔒🔒🔒"), 8);
    }

    #[test]
    fn test_blank() {
        assert!(is_blank().check(""));
        assert!(is_blank().check(" \t\n"));
        assert!(!is_blank().check(" x "));
    }

    #[test]
    fn test_len_bounds() {
        assert!(len_min(8).check("12345678"));
        assert!(!len_min(8).check("1234567"));
        assert!(len_max(20).check(&"a".repeat(20)));
        assert!(!len_max(20).check(&"a".repeat(21)));
        assert!(len_between(3, 3).check("abc"));
    }

    #[test]
    fn test_all_chars() {
        let word = all_chars(|c: char| c.is_ascii_alphanumeric() || c == '_');
        assert!(word.check("user_123"));
        assert!(!word.check("user@name"));
        assert!(word.check(""));
    }

    #[test]
    fn test_matches_anchored() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        assert!(matches(&pattern).check("2024"));
        assert!(!matches(&pattern).check("v2024"));
    }
}
