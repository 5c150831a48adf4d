//! The command table. Maps the first word of a line to a [`Command`], checks
//! arity and calls the matching [`AssistantApi`] method.

use super::ReplOptions;
use crate::api::{AssistantApi, EditField};
use crate::commands::CmdResult;
use crate::error::{AssistantError, Result};
use crate::store::BookStore;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    AddPhone,
    Change,
    Phone,
    Search,
    Info,
    DeleteContact,
    ShowAll,
    AddEmail,
    AddAddress,
    AddBirthday,
    EditPhone,
    RemovePhone,
    Edit,
    Note,
    AddTag,
    RemoveTag,
    Tagged,
    Birthdays,
    Clean,
    Help,
}

/// How many positional arguments a command takes.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::Between(lo, hi) => (lo..=hi).contains(&n),
            Arity::AtLeast(k) => n >= k,
        }
    }
}

impl Command {
    pub const ALL: [Command; 22] = [
        Command::Hello,
        Command::Add,
        Command::AddPhone,
        Command::Change,
        Command::Phone,
        Command::Search,
        Command::Info,
        Command::DeleteContact,
        Command::ShowAll,
        Command::AddEmail,
        Command::AddAddress,
        Command::AddBirthday,
        Command::EditPhone,
        Command::RemovePhone,
        Command::Edit,
        Command::Note,
        Command::AddTag,
        Command::RemoveTag,
        Command::Tagged,
        Command::Birthdays,
        Command::Clean,
        Command::Help,
    ];

    /// Splits a tokenized line into its command and arguments.
    pub fn parse(words: &[String]) -> Option<(Command, &[String])> {
        let (first, rest) = words.split_first()?;
        Self::ALL
            .into_iter()
            .find(|command| command.name() == first.as_str())
            .map(|command| (command, rest))
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::AddPhone => "add_phone",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::Search => "search",
            Command::Info => "info",
            Command::DeleteContact => "delete_contact",
            Command::ShowAll => "show",
            Command::AddEmail => "add_email",
            Command::AddAddress => "add_address",
            Command::AddBirthday => "add_birthday",
            Command::EditPhone => "edit_phone",
            Command::RemovePhone => "remove_phone",
            Command::Edit => "edit",
            Command::Note => "note",
            Command::AddTag => "add_tag",
            Command::RemoveTag => "remove_tag",
            Command::Tagged => "tagged",
            Command::Birthdays => "birthdays",
            Command::Clean => "clean",
            Command::Help => "help",
        }
    }

    fn args(self) -> &'static str {
        match self {
            Command::Hello | Command::Help => "",
            Command::Add => "<name> [phone]",
            Command::AddPhone | Command::Change | Command::RemovePhone => "<name> <phone>",
            Command::Phone | Command::Info | Command::DeleteContact => "<name>",
            Command::Search => "<query...>",
            Command::ShowAll => "all",
            Command::AddEmail => "<name> <email>",
            Command::AddAddress => "<name> <address...>",
            Command::AddBirthday => "<name> <YYYY-MM-DD>",
            Command::EditPhone => "<name> <old> <new>",
            Command::Edit => "<name> <name|phones|email|address|birthday> <value...>",
            Command::Note => "<name> <text...> [#tag...]",
            Command::AddTag | Command::RemoveTag => "<name> <tag>",
            Command::Tagged => "<tag>",
            Command::Birthdays => "[days]",
            Command::Clean => "<dir>",
        }
    }

    fn arity(self) -> Arity {
        match self {
            Command::Hello | Command::Help => Arity::Exactly(0),
            Command::Phone | Command::Info | Command::DeleteContact => Arity::Exactly(1),
            Command::ShowAll | Command::Tagged => Arity::Exactly(1),
            Command::AddPhone | Command::Change | Command::RemovePhone => Arity::Exactly(2),
            Command::AddEmail | Command::AddBirthday => Arity::Exactly(2),
            Command::AddTag | Command::RemoveTag => Arity::Exactly(2),
            Command::EditPhone => Arity::Exactly(3),
            Command::Add => Arity::Between(1, 2),
            Command::Birthdays => Arity::Between(0, 1),
            Command::Search | Command::Clean => Arity::AtLeast(1),
            Command::AddAddress | Command::Note => Arity::AtLeast(2),
            Command::Edit => Arity::AtLeast(3),
        }
    }

    fn about(self) -> &'static str {
        match self {
            Command::Hello => "Greet the assistant",
            Command::Add => "Add a contact",
            Command::AddPhone => "Add a phone number to a contact",
            Command::Change => "Replace all phone numbers of a contact",
            Command::Phone => "Show a contact's phone number",
            Command::Search => "Search contacts",
            Command::Info => "Show a contact",
            Command::DeleteContact => "Delete a contact",
            Command::ShowAll => "List every contact",
            Command::AddEmail => "Set a contact's email",
            Command::AddAddress => "Set a contact's address",
            Command::AddBirthday => "Set a contact's birthday",
            Command::EditPhone => "Replace one phone number",
            Command::RemovePhone => "Remove a phone number",
            Command::Edit => "Edit one field of a contact",
            Command::Note => "Set a contact's note",
            Command::AddTag => "Tag a contact's note",
            Command::RemoveTag => "Untag a contact's note",
            Command::Tagged => "List contacts whose note has a tag",
            Command::Birthdays => "List upcoming birthdays",
            Command::Clean => "Sort a folder by file type",
            Command::Help => "Show this list",
        }
    }

    pub fn usage(self) -> String {
        match self.args() {
            "" => self.name().to_string(),
            args => format!("{} {}", self.name(), args),
        }
    }
}

/// What a command produced.
#[derive(Debug)]
pub enum Outcome {
    /// Plain text, printed as is.
    Text(String),
    Result(CmdResult),
}

/// The `help` listing.
pub fn help_text() -> String {
    let width = Command::ALL
        .iter()
        .map(|command| command.usage().len())
        .max()
        .unwrap_or(0);
    let mut text = String::from("Available commands:");
    for command in Command::ALL {
        text.push_str(&format!(
            "\n  {:<width$}  {}",
            command.usage(),
            command.about(),
            width = width
        ));
    }
    text.push_str("\n  good bye | close | exit  Leave the assistant");
    text
}

fn usage(command: Command) -> AssistantError {
    AssistantError::Usage(command.usage())
}

/// Runs `command`. `args` are the lowercased words after the command name;
/// `raw_args` is the same text as typed, used where case and spacing matter.
pub fn execute<S: BookStore>(
    api: &mut AssistantApi<S>,
    command: Command,
    args: &[String],
    raw_args: &str,
    options: &ReplOptions,
) -> Result<Outcome> {
    if !command.arity().accepts(args.len()) {
        return Err(usage(command));
    }

    let result = match command {
        Command::Hello => return Ok(Outcome::Text("How can I help you?".into())),
        Command::Help => return Ok(Outcome::Text(help_text())),
        Command::Add => api.add_contact(&args[0], args.get(1).map(String::as_str))?,
        Command::AddPhone => api.add_phone(&args[0], &args[1])?,
        Command::Change => api.change_phone(&args[0], &args[1])?,
        Command::Phone => api.phone(&args[0])?,
        Command::Search => api.search(&args.join(" "))?,
        Command::Info => api.info(&args[0])?,
        Command::DeleteContact => api.delete_contact(&args[0])?,
        Command::ShowAll => {
            if args[0] != "all" {
                return Err(usage(command));
            }
            api.show_all()?
        }
        Command::AddEmail => api.add_email(&args[0], &args[1])?,
        Command::AddAddress => api.add_address(&args[0], &args[1..].join(" "))?,
        Command::AddBirthday => api.add_birthday(&args[0], &args[1])?,
        Command::EditPhone => api.edit_phone(&args[0], &args[1], &args[2])?,
        Command::RemovePhone => api.remove_phone(&args[0], &args[1])?,
        Command::Edit => {
            let field: EditField = args[1].parse()?;
            api.edit_contact(&args[0], field, &args[2..])?
        }
        Command::Note => api.set_note(&args[0], &args[1..])?,
        Command::AddTag => api.add_tag(&args[0], &args[1])?,
        Command::RemoveTag => api.remove_tag(&args[0], &args[1])?,
        Command::Tagged => api.tagged(&args[0])?,
        Command::Birthdays => {
            let days = match args.first() {
                Some(days) => days.parse::<i64>().map_err(|_| usage(command))?,
                None => options.upcoming_days,
            };
            api.upcoming_birthdays(days)?
        }
        Command::Clean => api.clean_folder(Path::new(raw_args))?,
    };
    Ok(Outcome::Result(result))
}
