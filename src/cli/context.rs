use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

use crate::model::Directory;

pub struct CLIContext {
    pub directory: Directory,
    pinned_today: Option<NaiveDate>,
}

impl CLIContext {
    pub fn new(pinned_today: Option<NaiveDate>) -> Self {
        Self {
            directory: Directory::new(),
            pinned_today,
        }
    }

    /// The date birthday queries are evaluated against: the pinned date if
    /// one was given at launch, otherwise the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Prompt and read a line. Returns None on EOF or a read error.
    pub fn read_line<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompt: &str,
    ) -> Option<String> {
        write!(output, "{}", prompt).ok();
        output.flush().ok();
        let mut buf = String::new();
        match input.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }
}
