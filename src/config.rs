use chrono::NaiveDate;

use crate::error::{PhonebookError, PhonebookResult};
use crate::validation;

pub const USAGE: &str = "\
Phonebook - console contact assistant

Usage: phonebook [OPTIONS]

Options:
  -t, --today <DD.MM.YYYY>  Evaluate 'birthdays' against this date instead of the local date
  -h, --help                Show this help

Logging goes to stderr and is controlled by RUST_LOG (default: warn).";

/// Launch options. Nothing is read from files or persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Run(Config),
    Help,
}

impl Config {
    /// Parse command-line arguments (without the program name).
    pub fn from_args<I>(args: I) -> PhonebookResult<Launch>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--today" | "-t" => {
                    let value = args.next().ok_or_else(|| {
                        PhonebookError::Other("--today requires a DD.MM.YYYY argument".into())
                    })?;
                    config.today = Some(validation::birthday_date(&value)?);
                }
                "--help" | "-h" => return Ok(Launch::Help),
                other => {
                    return Err(PhonebookError::Other(format!(
                        "Unknown argument: {}",
                        other
                    )))
                }
            }
        }

        Ok(Launch::Run(config))
    }
}
