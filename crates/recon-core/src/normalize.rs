//! Cell normalization for key fields.
//!
//! Both functions are total: absent cells become the empty string and no
//! input is rejected.

/// Trim a cell and collapse every internal whitespace run to one space.
///
/// # Examples
///
/// ```
/// use recon_core::normalize::normalize;
///
/// assert_eq!(normalize(Some("  Pre-Examination \t Questionnaire ")), "Pre-Examination Questionnaire");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut parts = value.split_whitespace();
    let mut normalized = String::with_capacity(value.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Normalize an identifier and drop a single trailing `.0`.
///
/// Subject IDs that passed through a numeric column pick up a float suffix
/// (`1001` becomes `1001.0`). Only one suffix is removed.
///
/// # Examples
///
/// ```
/// use recon_core::normalize::normalize_identifier;
///
/// assert_eq!(normalize_identifier(Some("123.0")), "123");
/// assert_eq!(normalize_identifier(Some("123.00")), "123.0");
/// assert_eq!(normalize_identifier(Some("ABC")), "ABC");
/// ```
pub fn normalize_identifier(value: Option<&str>) -> String {
    let normalized = normalize(value);
    match normalized.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize(Some("a\u{a0}\n b")), "a b");
        assert_eq!(normalize(Some("   ")), "");
        assert_eq!(normalize(Some("V1")), "V1");
    }

    #[test]
    fn identifier_strip_runs_after_trim() {
        assert_eq!(normalize_identifier(Some(" SUBJ-001.0 ")), "SUBJ-001");
        assert_eq!(normalize_identifier(Some(".0")), "");
        assert_eq!(normalize_identifier(Some("10")), "10");
        assert_eq!(normalize_identifier(None), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(value in "\\PC*") {
            let once = normalize(Some(&value));
            prop_assert_eq!(normalize(Some(&once)), once.clone());
        }

        #[test]
        fn normalize_has_no_edge_or_double_whitespace(value in "[ \\ta-z\\n]{0,24}") {
            let normalized = normalize(Some(&value));
            prop_assert!(!normalized.starts_with(' '));
            prop_assert!(!normalized.ends_with(' '));
            prop_assert!(!normalized.contains("  "));
        }
    }
}
