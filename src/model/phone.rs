use std::fmt;

use crate::error::PhonebookResult;
use crate::validation;

/// A phone number. Values added to a record pass format validation; values
/// written over an existing number by a change are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> PhonebookResult<Self> {
        validation::phone_number(raw).map(Phone)
    }

    pub(crate) fn from_unchecked(raw: &str) -> Self {
        Phone(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
