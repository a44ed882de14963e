//! Interactive session loop
//!
//! Reads one line at a time, dispatches it, prints the reply, and saves the
//! directory when the user leaves.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use super::dispatcher::{Dispatcher, Reply};
use crate::config::settings::Settings;
use crate::error::ContactResult;
use crate::storage::Storage;

const PROMPT: &str = "Enter a command: ";

/// Run the session until `close`/`exit` or end of input, then save
///
/// `today` is asked for the current date on every line so a session left
/// open past midnight still computes birthdays correctly. The directory is
/// saved on every way out of the loop, including terminal I/O failures.
pub fn run_session<R, W, T>(
    storage: &mut Storage,
    settings: &Settings,
    input: R,
    output: &mut W,
    today: T,
) -> ContactResult<()>
where
    R: BufRead,
    W: Write,
    T: Fn() -> NaiveDate,
{
    let outcome = {
        let mut dispatcher = Dispatcher::new(storage, settings.upcoming_days);
        converse(&mut dispatcher, input, output, today)
    };

    let saved = storage.save_all();
    outcome.and(saved)
}

fn converse<R, W, T>(
    dispatcher: &mut Dispatcher<'_>,
    mut input: R,
    output: &mut W,
    today: T,
) -> ContactResult<()>
where
    R: BufRead,
    W: Write,
    T: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut buffer = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            // End of input behaves like `exit`
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD instead of ending the session
        let line = String::from_utf8_lossy(&buffer);
        match dispatcher.handle(&line, today()) {
            Reply::Message(message) => writeln!(output, "{}", message)?,
            Reply::Silent => {}
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use crate::error::ContactError;
    use tempfile::TempDir;

    fn run(temp: &TempDir, script: &str) -> String {
        run_bytes(temp, script.as_bytes())
    }

    fn run_bytes(temp: &TempDir, script: &[u8]) -> String {
        let paths = ContactPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let mut storage = Storage::open(paths, &settings).unwrap();
        let mut output = Vec::new();

        run_session(
            &mut storage,
            &settings,
            script,
            &mut output,
            || NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        )
        .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_persists_on_exit() {
        let temp = TempDir::new().unwrap();

        let out = run(&temp, "add John 1234567890\nexit\nadd Jane 9876543210\n");
        assert!(out.starts_with("Welcome to the assistant bot!"));
        assert!(out.contains("Contact added."));
        assert!(out.contains("Good bye!"));
        // Lines after exit are never read
        assert_eq!(out.matches("Contact added.").count(), 1);

        let out = run(&temp, "phone john\nclose\n");
        assert!(out.contains("John: 1234567890"));

        let out = run(&temp, "phone Jane\nclose\n");
        assert!(out.contains("Contact not found: Jane"));
    }

    #[test]
    fn test_end_of_input_saves() {
        let temp = TempDir::new().unwrap();

        let out = run(&temp, "add Ann 1111111111\nadd-birthday Ann 12.06.1990");
        assert!(out.ends_with("Good bye!\n"));

        let out = run(&temp, "birthdays\n");
        assert!(out.contains("Ann: 12.06.2024"));
    }

    #[test]
    fn test_bad_lines_do_not_end_session() {
        let temp = TempDir::new().unwrap();

        let out = run(&temp, "nonsense\n\nadd\nadd Bob abc\nhello\nexit\n");
        assert!(out.contains("Invalid command."));
        assert!(out.contains("Not enough arguments."));
        assert!(out.contains("phone must be 10 digits"));
        assert!(out.contains("How can I help you?"));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let temp = TempDir::new().unwrap();

        let out = run_bytes(
            &temp,
            b"add John 1234567890\nadd \xff\xfe 1111111111\nphone john\nexit\n",
        );
        assert!(out.contains("Contact added."));
        assert!(out.contains("John: 1234567890"));
        assert!(out.ends_with("Good bye!\n"));

        let out = run(&temp, "phone John\nclose\n");
        assert!(out.contains("John: 1234567890"));
    }

    /// Output that breaks for good once `trigger` is written
    struct FailingOutput {
        trigger: &'static str,
        tripped: bool,
    }

    impl Write for FailingOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.tripped || String::from_utf8_lossy(buf).contains(self.trigger) {
                self.tripped = true;
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_still_saves() {
        let temp = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let mut storage = Storage::open(paths.clone(), &settings).unwrap();
        let mut output = FailingOutput {
            trigger: "Contact added.",
            tripped: false,
        };

        let result = run_session(
            &mut storage,
            &settings,
            "add John 1234567890\nexit\n".as_bytes(),
            &mut output,
            || NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        );
        assert!(matches!(result, Err(ContactError::Io(_))));

        let reopened = Storage::open(paths, &settings).unwrap();
        assert!(reopened.directory().find("John").is_some());
    }
}
