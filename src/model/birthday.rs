use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::PhonebookResult;
use crate::validation::{self, DATE_FORMAT};

/// A calendar date without a time component, entered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> PhonebookResult<Self> {
        validation::birthday_date(raw).map(Birthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
