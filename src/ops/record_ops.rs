use tracing::info;

use crate::error::{PhonebookError, PhonebookResult};
use crate::model::{Birthday, Directory, Record};
use crate::validation;

/// Adds `phone` to the contact called `name`, creating the contact first if
/// needed. Nothing is created or changed when the phone is malformed.
pub fn add_contact<'a>(
    directory: &'a mut Directory,
    name: &str,
    phone: &str,
) -> PhonebookResult<&'a Record> {
    let name = validation::non_blank(name, "name")?;

    let added = match directory.lookup_mut(&name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(&name)?;
            let added = record.add_phone(phone)?;
            info!(name = record.name(), "created contact");
            directory.add_record(record);
            added
        }
    };
    info!(name = name.as_str(), phone = %added, "added phone");

    directory
        .lookup(&name)
        .ok_or(PhonebookError::ContactNotFound { name })
}

/// Replaces the first occurrence of `old_phone` on the contact with
/// `new_phone`. The new number is stored as given.
pub fn change_phone(
    directory: &mut Directory,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> PhonebookResult<()> {
    let record = find_record_mut(directory, name)?;
    record.replace_phone(old_phone, new_phone)?;
    info!(name, old_phone, new_phone, "changed phone");
    Ok(())
}

pub fn add_birthday(
    directory: &mut Directory,
    name: &str,
    date: &str,
) -> PhonebookResult<Birthday> {
    let record = find_record_mut(directory, name)?;
    let birthday = record.set_birthday(date)?;
    info!(name, %birthday, "set birthday");
    Ok(birthday)
}

fn find_record_mut<'a>(directory: &'a mut Directory, name: &str) -> PhonebookResult<&'a mut Record> {
    directory
        .lookup_mut(name)
        .ok_or_else(|| PhonebookError::ContactNotFound {
            name: name.to_string(),
        })
}
