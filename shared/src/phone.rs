//! International phone number formatting and validation.

/// Strips everything except digits and a single leading `+`.
pub fn clean_phone(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '+' && cleaned.is_empty() {
            cleaned.push(c);
        }
    }
    cleaned
}

/// Formats a phone number for display.
///
/// With a leading `+`, digits beyond the trailing ten are treated as the
/// country code (at most three), and the national number is grouped
/// 3/3/4. Without a country code the digits are grouped the same way.
/// Anything past the first ten national digits falls into groups of
/// three.
pub fn format_phone(raw: &str) -> String {
    let cleaned = clean_phone(raw);
    match cleaned.strip_prefix('+') {
        Some(digits) if digits.len() > 10 => {
            let cc_len = (digits.len() - 10).min(3);
            let (country_code, national) = digits.split_at(cc_len);
            format!("+{} {}", country_code, group_digits(national))
        }
        Some(digits) => format!("+{}", group_digits(digits)),
        None => group_digits(&cleaned),
    }
}

fn group_digits(digits: &str) -> String {
    match digits.len() {
        0..=3 => digits.to_string(),
        4..=6 => format!("{} {}", &digits[..3], &digits[3..]),
        7..=10 => format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => {
            let mut parts = vec![&digits[..3], &digits[3..6], &digits[6..10]];
            let mut rest = &digits[10..];
            while !rest.is_empty() {
                let take = rest.len().min(3);
                parts.push(&rest[..take]);
                rest = &rest[take..];
            }
            parts.join(" ")
        }
    }
}

/// 7 to 15 digits after cleaning, not counting the leading `+`.
pub fn is_valid_phone(raw: &str) -> bool {
    let cleaned = clean_phone(raw);
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    (7..=15).contains(&digits.len())
}

/// Control and navigation keys that always pass the keystroke filter.
const ALLOWED_CONTROL_KEYS: [&str; 9] = [
    "Backspace", "Delete", "Tab", "Escape", "Enter", "ArrowLeft", "ArrowRight", "Home", "End",
];

/// Keystroke filter for phone inputs: digits anywhere, `+` only at the
/// start of the field, plus the usual editing keys.
pub fn is_allowed_phone_key(key: &str, at_field_start: bool) -> bool {
    if ALLOWED_CONTROL_KEYS.contains(&key) {
        return true;
    }
    if key == "+" {
        return at_field_start;
    }
    key.len() == 1 && key.chars().all(|c| c.is_ascii_digit())
}

pub fn phone_placeholder() -> &'static str {
    "+1 555 123 4567"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phone_keeps_single_leading_plus() {
        assert_eq!(clean_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(clean_phone("555.123.4567"), "5551234567");
        assert_eq!(clean_phone("5+5+5"), "555");
        assert_eq!(clean_phone("++15551234567"), "+15551234567");
    }

    #[test]
    fn test_format_phone_international() {
        assert_eq!(format_phone("+15551234567"), "+1 555 123 4567");
        assert_eq!(format_phone("+442079460958"), "+44 207 946 0958");
        assert_eq!(format_phone("+1"), "+1");
        assert_eq!(format_phone("+4420794"), "+442 079 4");
    }

    #[test]
    fn test_format_phone_domestic() {
        assert_eq!(format_phone("5551234567"), "555 123 4567");
        assert_eq!(format_phone("555"), "555");
        assert_eq!(format_phone("555123"), "555 123");
        assert_eq!(format_phone("5551234"), "555 123 4");
    }

    #[test]
    fn test_format_phone_overflow_groups_of_three() {
        // Twelve national digits: 3/3/4 then a group of up to three.
        assert_eq!(format_phone("555123456789"), "555 123 4567 89");
    }

    #[test]
    fn test_format_phone_reformats_already_formatted_input() {
        assert_eq!(format_phone("+1 555 123 4567"), "+1 555 123 4567");
    }

    #[test]
    fn test_is_valid_phone_bounds() {
        assert!(is_valid_phone("+15551234567"));
        assert!(is_valid_phone("5551234"));
        assert!(!is_valid_phone("555123"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("+"));
    }

    #[test]
    fn test_phone_keystroke_filter() {
        assert!(is_allowed_phone_key("5", false));
        assert!(is_allowed_phone_key("Backspace", false));
        assert!(is_allowed_phone_key("ArrowLeft", false));
        assert!(is_allowed_phone_key("+", true));
        assert!(!is_allowed_phone_key("+", false));
        assert!(!is_allowed_phone_key("a", false));
        assert!(!is_allowed_phone_key("-", false));
    }
}
