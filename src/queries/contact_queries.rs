use crate::error::{PhonebookError, PhonebookResult};
use crate::model::{Birthday, Directory, Record};

pub fn get_record<'a>(directory: &'a Directory, name: &str) -> PhonebookResult<&'a Record> {
    directory
        .lookup(name)
        .ok_or_else(|| PhonebookError::ContactNotFound {
            name: name.to_string(),
        })
}

/// Phone numbers of `name`, in the order they were added.
pub fn phones_for(directory: &Directory, name: &str) -> PhonebookResult<Vec<String>> {
    let record = get_record(directory, name)?;
    Ok(record.phones().iter().map(|p| p.to_string()).collect())
}

pub fn birthday_for(directory: &Directory, name: &str) -> PhonebookResult<Option<Birthday>> {
    Ok(get_record(directory, name)?.birthday())
}

/// One-line summary used by the `all` listing.
pub fn format_record(record: &Record) -> String {
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    let birthday = record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "No birthday set".into());
    format!(
        "Contact name: {}, phones: {}, Birthday: {}",
        record.name(),
        phones.join(", "),
        birthday
    )
}
