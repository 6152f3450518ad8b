use crate::cli::context::CLIContext;
use crate::error::{PhonebookError, PhonebookResult};
use crate::ops::record_ops;
use crate::queries::contact_queries;

const ADD_USAGE: &str = "add [name] [phone]";
const CHANGE_USAGE: &str = "change [name] [old phone] [new phone]";
const PHONE_USAGE: &str = "phone [name]";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday [name] [date]";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday [name]";

/// Splits positional arguments into exactly `N` values.
fn expect_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> PhonebookResult<[&'a str; N]> {
    if args.len() < N {
        return Err(PhonebookError::NotEnoughArguments {
            usage: usage.to_string(),
        });
    }
    <[&str; N]>::try_from(args).map_err(|_| PhonebookError::TooManyArguments {
        usage: usage.to_string(),
    })
}

pub fn hello() -> PhonebookResult<String> {
    Ok("How can I help you?".into())
}

pub fn add(ctx: &mut CLIContext, args: &[&str]) -> PhonebookResult<String> {
    let [name, phone] = expect_args::<2>(args, ADD_USAGE)?;
    record_ops::add_contact(&mut ctx.directory, name, phone)?;
    Ok("Contact added.".into())
}

pub fn change(ctx: &mut CLIContext, args: &[&str]) -> PhonebookResult<String> {
    let [name, old_phone, new_phone] = expect_args::<3>(args, CHANGE_USAGE)?;
    record_ops::change_phone(&mut ctx.directory, name, old_phone, new_phone)?;
    Ok("Updated successfully.".into())
}

pub fn phone(ctx: &CLIContext, args: &[&str]) -> PhonebookResult<String> {
    let [name] = expect_args::<1>(args, PHONE_USAGE)?;
    let phones = contact_queries::phones_for(&ctx.directory, name)?;
    Ok(format!("Phone numbers: {}", phones.join(", ")))
}

pub fn all(ctx: &CLIContext) -> PhonebookResult<String> {
    if ctx.directory.is_empty() {
        return Ok("No contacts found".into());
    }
    let lines: Vec<String> = ctx
        .directory
        .records()
        .map(contact_queries::format_record)
        .collect();
    Ok(lines.join("\n"))
}

pub fn add_birthday(ctx: &mut CLIContext, args: &[&str]) -> PhonebookResult<String> {
    let [name, date] = expect_args::<2>(args, ADD_BIRTHDAY_USAGE)?;
    record_ops::add_birthday(&mut ctx.directory, name, date)?;
    Ok("Birthday added.".into())
}

pub fn show_birthday(ctx: &CLIContext, args: &[&str]) -> PhonebookResult<String> {
    let [name] = expect_args::<1>(args, SHOW_BIRTHDAY_USAGE)?;
    match contact_queries::birthday_for(&ctx.directory, name)? {
        Some(birthday) => Ok(format!("Birthday: {}", birthday)),
        None => Ok("Birthday not set".into()),
    }
}

pub fn birthdays(ctx: &CLIContext) -> PhonebookResult<String> {
    let names = ctx.directory.upcoming_birthdays(ctx.today());
    if names.is_empty() {
        return Ok("No upcoming birthdays.".into());
    }
    let mut out = String::from("Upcoming birthdays next week:");
    for name in &names {
        out.push('\n');
        out.push_str(name);
    }
    Ok(out)
}
