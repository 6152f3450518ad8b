pub mod context;
pub mod contact_commands;

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::Config;
use crate::error::PhonebookResult;
use context::CLIContext;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// What the loop should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Print the message and stop.
    Exit(String),
    /// Blank input; print nothing.
    Silent,
}

/// Run the interactive loop on stdin/stdout.
pub fn run(config: &Config) -> PhonebookResult<()> {
    let mut ctx = CLIContext::new(config.today);
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl_loop(&mut ctx, &mut stdin.lock(), &mut stdout.lock())
}

pub fn repl_loop<R: BufRead, W: Write>(
    ctx: &mut CLIContext,
    input: &mut R,
    output: &mut W,
) -> PhonebookResult<()> {
    writeln!(output, "{}", WELCOME)?;
    loop {
        let line = match ctx.read_line(input, output, PROMPT) {
            Some(s) => s,
            None => {
                writeln!(output)?;
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
        };

        match dispatch(ctx, &line) {
            Reply::Message(msg) => writeln!(output, "{}", msg)?,
            Reply::Exit(msg) => {
                writeln!(output, "{}", msg)?;
                break;
            }
            Reply::Silent => {}
        }
    }
    Ok(())
}

/// Runs one line of input against the directory. Every handler error is
/// turned into its display message here; none of them end the loop.
pub fn dispatch(ctx: &mut CLIContext, input: &str) -> Reply {
    let Some((command, args)) = parse_command(input) else {
        return Reply::Silent;
    };

    let result = match command {
        "close" | "exit" => return Reply::Exit(FAREWELL.into()),
        "hello" => contact_commands::hello(),
        "add" => contact_commands::add(ctx, &args),
        "change" => contact_commands::change(ctx, &args),
        "phone" => contact_commands::phone(ctx, &args),
        "all" => contact_commands::all(ctx),
        "add-birthday" => contact_commands::add_birthday(ctx, &args),
        "show-birthday" => contact_commands::show_birthday(ctx, &args),
        "birthdays" => contact_commands::birthdays(ctx),
        _ => Ok("Invalid command.".into()),
    };

    match result {
        Ok(msg) => Reply::Message(msg),
        Err(e) => {
            debug!(command, error = ?e, "command failed");
            Reply::Message(e.to_string())
        }
    }
}

/// Split input on whitespace into a command and its positional arguments.
/// Returns None for blank input.
pub fn parse_command(input: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = input.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}
