use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

use crate::model::{Birthday, Directory};

/// Length of the look-ahead window, inclusive of both ends.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// The date a birthday is celebrated in `year`. A 29 February birthday is
/// observed on 28 February in non-leap years; any other date that does not
/// exist in `year` yields `None`.
pub fn observed_birthday(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.is_leap_day() {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Names of contacts whose birthday, observed in `today`'s year, lies in
/// `today..=today + 7 days`. Birthdays already past this year are not rolled
/// over into next year, so a 1 January birthday is not reported on
/// 30 December. Names come back sorted.
pub fn upcoming_birthdays(directory: &Directory, today: NaiveDate) -> Vec<String> {
    let window_end = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let mut names = Vec::new();
    for record in directory.records() {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let observed = match observed_birthday(birthday, today.year()) {
            Some(d) => d,
            None => {
                warn!(name = record.name(), %birthday, "birthday has no date this year, skipping");
                continue;
            }
        };

        debug!(
            name = record.name(),
            %observed,
            %today,
            %window_end,
            "checking birthday"
        );

        if today <= observed && observed <= window_end {
            names.push(record.name().to_string());
        }
    }

    names.sort();
    names
}
