//! Display name rules for generated users.
//!
//! Feed rows render names verbatim, so generated names are restricted to a
//! conservative character set:
//!
//! - Length between 3 and 32 characters
//! - Letters (A-Z, a-z), digits (0-9), spaces, underscores
//! - Not whitespace-only

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 3;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 32;

/// Checks a display name against the generation rules.
///
/// # Examples
///
/// ```
/// use user_factory::is_valid_display_name;
///
/// assert!(is_valid_display_name("Ada Lovelace"));
/// assert!(is_valid_display_name("user_123"));
/// assert!(!is_valid_display_name("ab"));
/// assert!(!is_valid_display_name("O'Brien"));
/// assert!(!is_valid_display_name("   "));
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_display_name_char)
}

const fn is_valid_display_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_'
}

/// Replaces disallowed characters with underscores and trims to the maximum
/// length, preserving whole characters.
#[must_use]
pub(crate) fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if is_valid_display_name_char(c) {
                c
            } else {
                '_'
            }
        })
        .take(DISPLAY_NAME_MAX)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ada", true)]
    #[case("Ada Lovelace", true)]
    #[case("snake_case_name", true)]
    #[case("ab", false)]
    #[case("   ", false)]
    #[case("O'Brien", false)]
    #[case("Zoë Washburne", false)]
    fn validates_display_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_display_name(name), expected);
    }

    #[test]
    fn accepts_names_at_the_maximum_length() {
        let name = "a".repeat(DISPLAY_NAME_MAX);
        assert!(is_valid_display_name(&name));
        assert!(!is_valid_display_name(&format!("{name}a")));
    }

    #[rstest]
    #[case("O'Brien", "O_Brien")]
    #[case("Zoë", "Zo_")]
    #[case("plain", "plain")]
    fn sanitize_replaces_invalid_characters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_display_name(raw), expected);
    }

    #[test]
    fn sanitize_truncates_long_names() {
        let raw = "x".repeat(DISPLAY_NAME_MAX + 8);
        assert_eq!(sanitize_display_name(&raw).chars().count(), DISPLAY_NAME_MAX);
    }
}
