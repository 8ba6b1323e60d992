//! Form figure parsing
//!
//! Form strings list a horse's recent finishing positions, oldest first:
//! digits are positions (`0` = tenth or worse) and F/U/R/P/D mark a run that
//! did not finish (fell, unseated, refused, pulled up, disqualified).
//! Separators such as `-` or `/` carry no meaning and are skipped.

/// Position code for "10th or worse" (form digit `0`)
pub const TENTH_OR_WORSE: u8 = 10;

/// Position code for any non-finish (F, U, R, P, D)
pub const NON_FINISH: u8 = 15;

/// Finishing positions, most recent last
pub type ParsedForm = Vec<u8>;

/// Parse a raw form string into position codes
///
/// # Examples
/// ```
/// use racecard::core::form::parse_form;
/// assert_eq!(parse_form("1-2-F3-0"), vec![1, 2, 15, 3, 10]);
/// assert!(parse_form("").is_empty());
/// ```
pub fn parse_form(form: &str) -> ParsedForm {
    form.chars().filter_map(position_code).collect()
}

fn position_code(c: char) -> Option<u8> {
    match c.to_ascii_uppercase() {
        '0' => Some(TENTH_OR_WORSE),
        d @ '1'..='9' => Some(d as u8 - b'0'),
        'F' | 'U' | 'R' | 'P' | 'D' => Some(NON_FINISH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_with_separators() {
        assert_eq!(parse_form("1-2-F3-0"), vec![1, 2, 15, 3, 10]);
    }

    #[test]
    fn test_parse_form_empty() {
        assert!(parse_form("").is_empty());
        assert!(parse_form("--/ ").is_empty());
    }

    #[test]
    fn test_parse_form_non_finish_letters_case_insensitive() {
        assert_eq!(parse_form("FURPD"), vec![NON_FINISH; 5]);
        assert_eq!(parse_form("furpd"), vec![NON_FINISH; 5]);
    }

    #[test]
    fn test_parse_form_skips_unknown_letters() {
        // Season breaks ("/") and unknown letters are ignored
        assert_eq!(parse_form("21/3x4B"), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_parse_form_zero_is_tenth_or_worse() {
        assert_eq!(parse_form("00"), vec![10, 10]);
    }
}
