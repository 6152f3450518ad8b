use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Phone number must contain 10 digits.")]
    InvalidPhone { value: String },

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate { value: String },

    #[error("Contact not found")]
    ContactNotFound { name: String },

    #[error("Old phone number not found")]
    PhoneNotFound { phone: String },

    #[error("Not enough arguments. Usage: {usage}")]
    NotEnoughArguments { usage: String },

    #[error("Too many arguments. Usage: {usage}")]
    TooManyArguments { usage: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl PhonebookError {
    /// True for malformed field values (phone or date format, blank names).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PhonebookError::BlankField { .. }
                | PhonebookError::InvalidPhone { .. }
                | PhonebookError::InvalidDate { .. }
        )
    }

    /// True when a name or phone lookup came up empty.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PhonebookError::ContactNotFound { .. } | PhonebookError::PhoneNotFound { .. }
        )
    }
}

pub type PhonebookResult<T> = Result<T, PhonebookError>;
