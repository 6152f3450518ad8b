use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::queries::birthday_queries;

use super::record::Record;

/// All contact records, keyed by name. Iteration is ordered by name.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn lookup(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of contacts whose birthday falls within the next week of `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<String> {
        birthday_queries::upcoming_birthdays(self, today)
    }
}
