use chrono::NaiveDate;

use crate::error::{PhonebookError, PhonebookResult};

pub const PHONE_DIGITS: usize = 10;
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> PhonebookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(PhonebookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates a phone number: exactly ten ASCII digits, nothing else.
pub fn phone_number(value: &str) -> PhonebookResult<String> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(PhonebookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

/// Parses a `DD.MM.YYYY` date. Day and month must be zero-padded and the
/// result must be a real calendar date.
pub fn birthday_date(value: &str) -> PhonebookResult<NaiveDate> {
    let invalid = || PhonebookError::InvalidDate {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
