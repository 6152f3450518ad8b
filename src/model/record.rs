use crate::error::{PhonebookError, PhonebookResult};
use crate::validation;

use super::birthday::Birthday;
use super::phone::Phone;

/// A single contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> PhonebookResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates `raw` and appends it. The phone list is untouched on error.
    pub fn add_phone(&mut self, raw: &str) -> PhonebookResult<Phone> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone.clone());
        Ok(phone)
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == raw)
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its
    /// position. `new` is stored as given, without format validation.
    pub fn replace_phone(&mut self, old: &str, new: &str) -> PhonebookResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| PhonebookError::PhoneNotFound {
                phone: old.to_string(),
            })?;
        *slot = Phone::from_unchecked(new);
        Ok(())
    }

    /// Parses `raw` as `DD.MM.YYYY` and stores it, overwriting any previous
    /// birthday. A previous value survives a parse failure.
    pub fn set_birthday(&mut self, raw: &str) -> PhonebookResult<Birthday> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }
}
