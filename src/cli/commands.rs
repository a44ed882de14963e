//! Interactive command vocabulary
//!
//! Splits an input line into a command token and arguments and maps the
//! token onto a known command.

/// A line split on whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// First token, lower-cased
    pub command: String,
    /// Remaining tokens, as typed
    pub args: Vec<String>,
}

/// Split a line into command and arguments; blank lines yield `None`
pub fn parse_input(line: &str) -> Option<Input> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some(Input {
        command,
        args: tokens.map(str::to_string).collect(),
    })
}

/// Commands understood by the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::RemovePhone,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Resolve an input to a command
    ///
    /// `show all` is accepted as a spelling of `all`.
    pub fn resolve(input: &Input) -> Option<Self> {
        let command = match input.command.as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "show" if input.args.first().map(|a| a.eq_ignore_ascii_case("all")) == Some(true) => {
                Self::All
            }
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Usage line shown in help and argument errors
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::Change => "change <name> <old_phone> <new_phone>",
            Self::Phone => "phone <name>",
            Self::All => "all",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays",
            Self::RemovePhone => "remove-phone <name> <phone>",
            Self::Delete => "delete <name>",
            Self::Help => "help",
            Self::Exit => "close | exit",
        }
    }

    /// One-line description for help
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hello => "Greet the assistant",
            Self::Add => "Add a contact, or another phone to an existing one",
            Self::Change => "Replace one of a contact's phone numbers",
            Self::Phone => "Show a contact's phone numbers",
            Self::All => "Show all contacts",
            Self::AddBirthday => "Set a contact's birthday",
            Self::ShowBirthday => "Show a contact's birthday",
            Self::Birthdays => "List birthdays to congratulate in the coming days",
            Self::RemovePhone => "Remove a phone number from a contact",
            Self::Delete => "Delete a contact",
            Self::Help => "Show this help message",
            Self::Exit => "Save and exit",
        }
    }
}

/// Help text listing every command
pub fn help_text() -> String {
    let width = Command::ALL
        .iter()
        .map(|c| c.usage().len())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Available commands:");
    for command in Command::ALL {
        output.push_str(&format!(
            "\n  {:<width$}  {}",
            command.usage(),
            command.description(),
            width = width
        ));
    }
    output
}
