//! Interactive command dispatcher
//!
//! Routes one input line to its handler. Handlers return `ContactResult`;
//! errors are turned into text here so that a bad line never ends the
//! session.

use chrono::NaiveDate;

use super::commands::{help_text, parse_input, Command};
use crate::display::{format_contact_list, format_phones, format_upcoming};
use crate::error::{ContactError, ContactResult};
use crate::services::{AddOutcome, ContactService};
use crate::storage::Storage;

/// What the session should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print and keep reading
    Message(String),
    /// Nothing to print
    Silent,
    /// Print and end the session
    Exit(String),
}

/// Dispatches interactive commands against the session storage
pub struct Dispatcher<'a> {
    service: ContactService<'a>,
    upcoming_days: i64,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher; `upcoming_days` is the `birthdays` window
    pub fn new(storage: &'a mut Storage, upcoming_days: i64) -> Self {
        Self {
            service: ContactService::new(storage),
            upcoming_days,
        }
    }

    /// Handle one raw input line
    pub fn handle(&mut self, line: &str, today: NaiveDate) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::Silent;
        };

        let Some(command) = Command::resolve(&input) else {
            return Reply::Message("Invalid command.".to_string());
        };

        match self.execute(command, &input.args, today) {
            Ok(reply) => reply,
            Err(err) if err.is_user_error() => Reply::Message(err.to_string()),
            Err(err) => Reply::Message(format!("Error: {}", err)),
        }
    }

    fn execute(
        &mut self,
        command: Command,
        args: &[String],
        today: NaiveDate,
    ) -> ContactResult<Reply> {
        let message = match command {
            Command::Hello => "How can I help you?".to_string(),

            Command::Add => {
                let [name, phone] = require::<2>(args, command)?;
                match self.service.add_contact(name, phone)? {
                    AddOutcome::Created => "Contact added.".to_string(),
                    AddOutcome::Updated => "Contact updated.".to_string(),
                }
            }

            Command::Change => {
                let [name, old, new] = require::<3>(args, command)?;
                self.service.change_phone(name, old, new)?;
                "Contact updated.".to_string()
            }

            Command::Phone => {
                let [name] = require::<1>(args, command)?;
                format_phones(self.service.get(name)?)
            }

            Command::All => format_contact_list(&self.service.list()),

            Command::AddBirthday => {
                let [name, date] = require::<2>(args, command)?;
                self.service.set_birthday(name, date)?;
                "Birthday added.".to_string()
            }

            Command::ShowBirthday => {
                let [name] = require::<1>(args, command)?;
                let record = self.service.get(name)?;
                match record.birthday {
                    Some(birthday) => format!("{}: {}", record.name, birthday),
                    None => format!("{} has no birthday set.", record.name),
                }
            }

            Command::Birthdays => {
                let upcoming = self.service.upcoming_birthdays(today, self.upcoming_days);
                format_upcoming(&upcoming, self.upcoming_days)
            }

            Command::RemovePhone => {
                let [name, phone] = require::<2>(args, command)?;
                if self.service.remove_phone(name, phone)? {
                    "Phone removed.".to_string()
                } else {
                    "No such phone, nothing changed.".to_string()
                }
            }

            Command::Delete => {
                let [name] = require::<1>(args, command)?;
                self.service.delete(name)?;
                "Contact deleted.".to_string()
            }

            Command::Help => help_text(),

            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Message(message))
    }
}

/// Take the first `N` arguments, ignoring extras
fn require<const N: usize>(args: &[String], command: Command) -> ContactResult<[&str; N]> {
    if args.len() < N {
        return Err(ContactError::Argument(command.usage().to_string()));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use crate::config::settings::Settings;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(m) => m,
            other => panic!("expected a message, got {:?}", other),
        }
    }

    #[test]
    fn test_add_then_find() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        assert_eq!(
            message(dispatcher.handle("add John 1234567890", today())),
            "Contact added."
        );
        drop(dispatcher);

        let record = storage.directory().find("John").unwrap();
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_add_second_phone() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        dispatcher.handle("add John 1234567890", today());
        assert_eq!(
            message(dispatcher.handle("add john 5555555555", today())),
            "Contact updated."
        );
        assert_eq!(
            message(dispatcher.handle("phone JOHN", today())),
            "John: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_change() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        dispatcher.handle("add John 1234567890", today());
        assert_eq!(
            message(dispatcher.handle("change John 1234567890 1112223333", today())),
            "Contact updated."
        );
        assert_eq!(
            message(dispatcher.handle("phone John", today())),
            "John: 1112223333"
        );
        assert_eq!(
            message(dispatcher.handle("change John 1234567890 1112223333", today())),
            "Phone not found: 1234567890"
        );
    }

    #[test]
    fn test_errors_become_messages() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        assert_eq!(
            message(dispatcher.handle("add John 12", today())),
            "phone must be 10 digits"
        );
        assert_eq!(
            message(dispatcher.handle("phone Nobody", today())),
            "Contact not found: Nobody"
        );
        assert_eq!(
            message(dispatcher.handle("add John", today())),
            "Not enough arguments. Usage: add <name> <phone>"
        );
        assert_eq!(
            message(dispatcher.handle("change", today())),
            "Not enough arguments. Usage: change <name> <old_phone> <new_phone>"
        );
        assert_eq!(
            message(dispatcher.handle("dance", today())),
            "Invalid command."
        );
    }

    #[test]
    fn test_birthdays() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        assert_eq!(
            message(dispatcher.handle("birthdays", today())),
            "No birthdays in the next 7 days."
        );

        dispatcher.handle("add Ann 1111111111", today());
        dispatcher.handle("add Bo 2222222222", today());
        dispatcher.handle("add Cy 3333333333", today());
        assert_eq!(
            message(dispatcher.handle("add-birthday Ann 12.06.1990", today())),
            "Birthday added."
        );
        dispatcher.handle("add-birthday Bo 15.06.1990", today());
        dispatcher.handle("add-birthday Cy 01.01.1990", today());
        assert_eq!(
            message(dispatcher.handle("add-birthday Cy 1990-01-01", today())),
            "invalid date format"
        );

        assert_eq!(
            message(dispatcher.handle("show-birthday ann", today())),
            "Ann: 12.06.1990"
        );
        assert_eq!(
            message(dispatcher.handle("birthdays", today())),
            "Upcoming birthdays:\n  Ann: 12.06.2024 (Wed)\n  Bo: 17.06.2024 (Mon)"
        );
    }

    #[test]
    fn test_show_birthday_unset() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        dispatcher.handle("add John 1234567890", today());
        assert_eq!(
            message(dispatcher.handle("show-birthday John", today())),
            "John has no birthday set."
        );
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        dispatcher.handle("add John 1234567890", today());
        assert_eq!(
            message(dispatcher.handle("remove-phone John 0000000000", today())),
            "No such phone, nothing changed."
        );
        assert_eq!(
            message(dispatcher.handle("remove-phone John 1234567890", today())),
            "Phone removed."
        );
        assert_eq!(
            message(dispatcher.handle("delete John", today())),
            "Contact deleted."
        );
        assert_eq!(
            message(dispatcher.handle("all", today())),
            "No contacts saved."
        );
    }

    #[test]
    fn test_blank_and_exit() {
        let (_temp, mut storage) = create_test_storage();
        let mut dispatcher = Dispatcher::new(&mut storage, 7);

        assert_eq!(dispatcher.handle("   ", today()), Reply::Silent);
        assert_eq!(
            dispatcher.handle("hello", today()),
            Reply::Message("How can I help you?".into())
        );
        assert_eq!(
            dispatcher.handle("CLOSE", today()),
            Reply::Exit("Good bye!".into())
        );
        assert_eq!(
            dispatcher.handle("exit", today()),
            Reply::Exit("Good bye!".into())
        );
    }
}
