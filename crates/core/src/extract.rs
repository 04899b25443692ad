//! Field position lookup against a source header

/// Locate `name` in `header` by case-sensitive exact match.
///
/// Returns the position of the first matching entry. Distinct sources may
/// carry the field at different positions; the result is per-source state.
pub fn locate<S: AsRef<str>>(header: &[S], name: &str) -> Option<usize> {
    header.iter().position(|entry| entry.as_ref() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_finds_field() {
        assert_eq!(locate(&["id", "code"], "code"), Some(1));
        assert_eq!(locate(&["code", "id"], "code"), Some(0));
    }

    #[test]
    fn test_locate_missing_field() {
        assert_eq!(locate(&["id", "name"], "code"), None);
        assert_eq!(locate::<&str>(&[], "code"), None);
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        assert_eq!(locate(&["id", "Code"], "code"), None);
    }

    #[test]
    fn test_locate_returns_first_match() {
        assert_eq!(locate(&["code", "id", "code"], "code"), Some(0));
    }
}
