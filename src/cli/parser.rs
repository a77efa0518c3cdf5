//! Turns an input line into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// A parsed user command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Exit,
}

/// Command word, argument synopsis and description of every command.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("add", "add [name] [phone]", "Add a new contact with a phone number."),
    ("change", "change [name] [old phone] [new phone]", "Replace a contact's phone number."),
    ("phone", "phone [name]", "Show a contact's phone numbers."),
    ("all", "all", "Show every contact in the address book."),
    ("add-birthday", "add-birthday [name] [DD.MM.YYYY]", "Set a contact's birthday."),
    ("show-birthday", "show-birthday [name]", "Show a contact's birthday."),
    ("birthdays", "birthdays", "Show birthdays to celebrate in the coming days."),
    ("delete", "delete [name]", "Remove a contact."),
    ("hello", "hello", "Get a greeting from the bot."),
    ("close", "close | exit", "Exit the program."),
];

fn usage(word: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, usage, _)| *usage)
        .unwrap_or("")
}

/// Take exactly `N` arguments or report the command's usage.
fn exact<const N: usize>(word: &str, args: &[&str]) -> CommandResult<[String; N]> {
    let args: [&str; N] = args
        .try_into()
        .map_err(|_| CommandError::InvalidArguments { usage: usage(word) })?;
    Ok(args.map(str::to_string))
}

/// Parse one input line.
///
/// The command word is case-insensitive; arguments are kept verbatim.
/// Blank lines yield `Ok(None)`. Commands without arguments ignore any
/// extra tokens.
pub fn parse_command(line: &str) -> CommandResult<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    let word = word.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    let command = match word.as_str() {
        "hello" => Command::Hello,
        "all" => Command::All,
        "birthdays" => Command::Birthdays,
        "close" | "exit" => Command::Exit,
        "add" => {
            let [name, phone] = exact::<2>(&word, &args)?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old_phone, new_phone] = exact::<3>(&word, &args)?;
            Command::Change {
                name,
                old_phone,
                new_phone,
            }
        }
        "phone" => {
            let [name] = exact::<1>(&word, &args)?;
            Command::Phone { name }
        }
        "add-birthday" => {
            let [name, birthday] = exact::<2>(&word, &args)?;
            Command::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = exact::<1>(&word, &args)?;
            Command::ShowBirthday { name }
        }
        "delete" => {
            let [name] = exact::<1>(&word, &args)?;
            Command::Delete { name }
        }
        _ => return Err(CommandError::UnknownCommand(word)),
    };

    Ok(Some(command))
}
