//! Field validators for authors and posts.
//!
//! Every validator is a pure function of the candidate value: it hands the value
//! back unchanged when accepted and never touches storage. Lengths are counted in
//! characters, not bytes.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::domain::Category;
use crate::error::ValidationError;

/// Phrases of which a post title must contain at least one.
pub const TITLE_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Required length of a phone number.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Post content must be at least this many characters.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Post summary must be shorter than this many characters.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// Reject names that are empty once surrounding whitespace is ignored.
///
/// The accepted value is returned untrimmed.
pub fn validate_name(value: &str) -> Result<&str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("name", "Author name cannot be empty."));
    }
    Ok(value)
}

/// Accept an absent or empty phone number, or exactly ten decimal digits.
///
/// Digits are any Unicode `Nd` character, so full-width and Arabic-Indic numbers
/// pass. The value is returned unchanged.
pub fn validate_phone_number(value: Option<&str>) -> Result<Option<&str>, ValidationError> {
    let Some(phone) = value.filter(|p| !p.is_empty()) else {
        return Ok(value);
    };

    let ten_digits =
        phone.chars().count() == PHONE_NUMBER_LEN && phone.chars().all(is_decimal_digit);
    if !ten_digits {
        return Err(ValidationError::new(
            "phone_number",
            "Phone number must be exactly ten digits and contain only digits.",
        ));
    }
    Ok(value)
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Case-sensitive substring match against [`TITLE_PHRASES`].
pub fn validate_title(value: &str) -> Result<&str, ValidationError> {
    if !TITLE_PHRASES.iter().any(|phrase| value.contains(phrase)) {
        return Err(ValidationError::new(
            "title",
            "The title must contain at least one of the following phrases: \
             'Won't Believe', 'Secret', 'Top', 'Guess'.",
        ));
    }
    Ok(value)
}

pub fn validate_content(value: &str) -> Result<&str, ValidationError> {
    if value.chars().count() < CONTENT_MIN_CHARS {
        return Err(ValidationError::new(
            "content",
            "Post content must be at least 250 characters long.",
        ));
    }
    Ok(value)
}

/// Exact match on `Fiction` or `Non-Fiction`.
pub fn validate_category(value: &str) -> Result<Category, ValidationError> {
    match value {
        "Fiction" => Ok(Category::Fiction),
        "Non-Fiction" => Ok(Category::NonFiction),
        _ => Err(ValidationError::new(
            "category",
            "Post category must be either 'Fiction' or 'Non-Fiction'.",
        )),
    }
}

/// Accept an absent summary, or one strictly shorter than [`SUMMARY_MAX_CHARS`].
pub fn validate_summary(value: Option<&str>) -> Result<Option<&str>, ValidationError> {
    match value {
        Some(summary) if summary.chars().count() >= SUMMARY_MAX_CHARS => Err(
            ValidationError::new("summary", "Post summary must be a maximum of 250 characters."),
        ),
        other => Ok(other),
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn chars_between(min: usize, max: usize) -> impl Strategy<Value = String> {
        prop::collection::vec(any::<char>(), min..max).prop_map(|v| v.into_iter().collect())
    }

    fn phone_like() -> impl Strategy<Value = String> {
        let ch = prop_oneof![
            4 => prop::char::range('0', '9'),
            1 => prop::char::range('０', '９'),
            1 => any::<char>(),
        ];
        prop::collection::vec(ch, 0..13).prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn test_name_accepted_iff_not_blank(s in any::<String>()) {
            match validate_name(&s) {
                Ok(accepted) => {
                    prop_assert!(!s.trim().is_empty());
                    prop_assert_eq!(accepted, s.as_str());
                }
                Err(_) => prop_assert!(s.trim().is_empty()),
            }
        }

        #[test]
        fn test_ascii_phone_accepted_iff_empty_or_ten_digits(s in "[0-9a-z +-]{0,12}") {
            let expected = s.is_empty() || (s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(validate_phone_number(Some(&s)).is_ok(), expected);
        }

        #[test]
        fn test_accepted_phone_is_ten_numeric_chars(s in phone_like()) {
            if let Ok(accepted) = validate_phone_number(Some(&s)) {
                prop_assert_eq!(accepted, Some(s.as_str()));
                prop_assert!(s.is_empty() || (s.chars().count() == 10 && s.chars().all(char::is_numeric)));
            }
        }

        #[test]
        fn test_title_accepted_iff_contains_phrase(s in any::<String>()) {
            let expected = TITLE_PHRASES.iter().any(|p| s.contains(p));
            prop_assert_eq!(validate_title(&s).is_ok(), expected);
        }

        #[test]
        fn test_title_with_embedded_phrase_is_accepted(
            pre in any::<String>(),
            phrase in select(TITLE_PHRASES.to_vec()),
            post in any::<String>()
        ) {
            let title = format!("{pre}{phrase}{post}");
            prop_assert_eq!(validate_title(&title).unwrap(), title.as_str());
        }

        #[test]
        fn test_lowercase_title_is_rejected(s in "[a-z0-9' ]{0,40}") {
            prop_assert!(validate_title(&s).is_err());
        }

        #[test]
        fn test_content_accepted_iff_at_least_250_chars(c in chars_between(230, 270)) {
            prop_assert_eq!(validate_content(&c).is_ok(), c.chars().count() >= CONTENT_MIN_CHARS);
        }

        #[test]
        fn test_summary_accepted_iff_under_250_chars(s in chars_between(230, 270)) {
            prop_assert_eq!(
                validate_summary(Some(&s)).is_ok(),
                s.chars().count() < SUMMARY_MAX_CHARS
            );
        }

        #[test]
        fn test_category_accepted_iff_exact_name(
            s in prop_oneof![
                Just("Fiction".to_string()),
                Just("Non-Fiction".to_string()),
                any::<String>()
            ]
        ) {
            let expected = s == "Fiction" || s == "Non-Fiction";
            prop_assert_eq!(validate_category(&s).is_ok(), expected);
            if let Ok(category) = validate_category(&s) {
                prop_assert_eq!(category.as_str(), s.as_str());
            }
        }

        #[test]
        fn test_revalidating_accepted_values_succeeds(s in any::<String>(), c in chars_between(0, 300)) {
            if let Ok(name) = validate_name(&s) {
                prop_assert_eq!(validate_name(name).unwrap(), name);
            }
            if let Ok(title) = validate_title(&s) {
                prop_assert_eq!(validate_title(title).unwrap(), title);
            }
            if let Ok(content) = validate_content(&c) {
                prop_assert_eq!(validate_content(content).unwrap(), content);
            }
            if let Ok(summary) = validate_summary(Some(&c)) {
                prop_assert_eq!(validate_summary(summary).unwrap(), summary);
            }
            if let Ok(phone) = validate_phone_number(Some(&s)) {
                prop_assert_eq!(validate_phone_number(phone).unwrap(), phone);
            }
        }
    }
}
