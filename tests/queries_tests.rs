use chrono::NaiveDate;
use phonebook::model::*;
use phonebook::ops::*;
use phonebook::queries::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn directory_with(birthdays: &[(&str, Option<&str>)]) -> Directory {
    let mut directory = Directory::new();
    for (name, birthday) in birthdays {
        record_ops::add_contact(&mut directory, name, "0501234567").unwrap();
        if let Some(b) = birthday {
            record_ops::add_birthday(&mut directory, name, b).unwrap();
        }
    }
    directory
}

// ==========================================================================
// OBSERVED BIRTHDAY
// ==========================================================================

#[test]
fn observed_birthday_moves_to_given_year() {
    let birthday = Birthday::parse("15.03.1990").unwrap();
    assert_eq!(
        birthday_queries::observed_birthday(birthday, 2024),
        Some(date(2024, 3, 15))
    );
}

#[test]
fn observed_leap_day_in_leap_year() {
    let birthday = Birthday::parse("29.02.2000").unwrap();
    assert_eq!(
        birthday_queries::observed_birthday(birthday, 2024),
        Some(date(2024, 2, 29))
    );
}

#[test]
fn observed_leap_day_folds_to_feb_28() {
    let birthday = Birthday::parse("29.02.2000").unwrap();
    assert_eq!(
        birthday_queries::observed_birthday(birthday, 2023),
        Some(date(2023, 2, 28))
    );
}

// ==========================================================================
// UPCOMING BIRTHDAYS
// ==========================================================================

#[test]
fn birthday_inside_window_is_reported() {
    let directory = directory_with(&[("Alice", Some("15.03.1990"))]);
    assert_eq!(directory.upcoming_birthdays(date(2024, 3, 10)), vec!["Alice"]);
}

#[test]
fn birthday_outside_window_is_not_reported() {
    let directory = directory_with(&[("Alice", Some("20.03.1990"))]);
    assert!(directory.upcoming_birthdays(date(2024, 3, 10)).is_empty());
}

#[test]
fn window_is_inclusive_on_both_ends() {
    let directory = directory_with(&[
        ("Today", Some("10.03.1990")),
        ("LastDay", Some("17.03.1985")),
        ("DayAfter", Some("18.03.1985")),
        ("Yesterday", Some("09.03.1985")),
    ]);
    assert_eq!(
        directory.upcoming_birthdays(date(2024, 3, 10)),
        vec!["LastDay", "Today"]
    );
}

#[test]
fn leap_day_birthday_in_leap_year() {
    let directory = directory_with(&[("Leap", Some("29.02.2000"))]);
    assert_eq!(directory.upcoming_birthdays(date(2024, 2, 25)), vec!["Leap"]);
}

#[test]
fn leap_day_birthday_in_common_year() {
    let directory = directory_with(&[("Leap", Some("29.02.2000"))]);
    assert_eq!(directory.upcoming_birthdays(date(2023, 2, 25)), vec!["Leap"]);
    // Observed on 28 February, so it has passed by 1 March.
    assert!(directory.upcoming_birthdays(date(2023, 3, 1)).is_empty());
}

#[test]
fn passed_birthdays_do_not_roll_over_to_next_year() {
    let directory = directory_with(&[("NewYear", Some("01.01.1990"))]);
    assert!(directory.upcoming_birthdays(date(2024, 12, 30)).is_empty());
}

#[test]
fn window_crossing_year_end_keeps_this_year() {
    let directory = directory_with(&[
        ("Eve", Some("31.12.1990")),
        ("NewYear", Some("02.01.1990")),
    ]);
    assert_eq!(directory.upcoming_birthdays(date(2024, 12, 28)), vec!["Eve"]);
}

#[test]
fn contacts_without_birthday_are_skipped() {
    let directory = directory_with(&[("Alice", None), ("Bob", Some("12.03.1970"))]);
    assert_eq!(directory.upcoming_birthdays(date(2024, 3, 10)), vec!["Bob"]);
}

#[test]
fn results_are_sorted_by_name() {
    let directory = directory_with(&[
        ("Zed", Some("11.03.1990")),
        ("Amy", Some("12.03.1991")),
        ("Max", Some("13.03.1992")),
    ]);
    assert_eq!(
        birthday_queries::upcoming_birthdays(&directory, date(2024, 3, 10)),
        vec!["Amy", "Max", "Zed"]
    );
}

#[test]
fn empty_directory_has_no_upcoming_birthdays() {
    assert!(Directory::new().upcoming_birthdays(date(2024, 3, 10)).is_empty());
}

// ==========================================================================
// CONTACT QUERIES
// ==========================================================================

#[test]
fn phones_for_lists_in_order() {
    let mut directory = directory_with(&[("Alice", None)]);
    record_ops::add_contact(&mut directory, "Alice", "0679876543").unwrap();
    assert_eq!(
        contact_queries::phones_for(&directory, "Alice").unwrap(),
        vec!["0501234567", "0679876543"]
    );
}

#[test]
fn phones_for_unknown_name_is_not_found() {
    let directory = Directory::new();
    assert!(contact_queries::phones_for(&directory, "Ghost")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn birthday_for_unset_is_none() {
    let directory = directory_with(&[("Alice", None)]);
    assert_eq!(contact_queries::birthday_for(&directory, "Alice").unwrap(), None);
}

#[test]
fn format_record_with_birthday() {
    let directory = directory_with(&[("Alice", Some("15.03.1990"))]);
    let record = directory.lookup("Alice").unwrap();
    assert_eq!(
        contact_queries::format_record(record),
        "Contact name: Alice, phones: 0501234567, Birthday: 15.03.1990"
    );
}

#[test]
fn format_record_without_birthday() {
    let directory = directory_with(&[("Alice", None)]);
    let record = directory.lookup("Alice").unwrap();
    assert_eq!(
        contact_queries::format_record(record),
        "Contact name: Alice, phones: 0501234567, Birthday: No birthday set"
    );
}
