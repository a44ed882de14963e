//! Contact display formatting
//!
//! Formats contacts and birthday reminders for terminal output.

use chrono::Datelike;

use crate::models::{Record, UpcomingBirthday};

/// Format a list of contacts as a table
pub fn format_contact_list(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No contacts saved.".to_string();
    }

    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let phone_width = records
        .iter()
        .map(|r| r.phones_joined().len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<phone_width$}  {}\n",
        "Name",
        "Phones",
        "Birthday",
        name_width = name_width,
        phone_width = phone_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<phone_width$}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
        phone_width = phone_width,
    ));

    for record in records {
        let birthday = record
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();

        output.push_str(
            format!(
                "{:<name_width$}  {:<phone_width$}  {}",
                record.name,
                record.phones_joined(),
                birthday,
                name_width = name_width,
                phone_width = phone_width,
            )
            .trim_end(),
        );
        output.push('\n');
    }

    output.push_str(&format!("\nTotal: {} contact(s)", records.len()));
    output
}

/// Format a contact's phone numbers on one line
pub fn format_phones(record: &Record) -> String {
    if record.phones.is_empty() {
        format!("{} has no phone numbers.", record.name)
    } else {
        format!("{}: {}", record.name, record.phones_joined())
    }
}

/// Format the upcoming birthday list
pub fn format_upcoming(upcoming: &[UpcomingBirthday], window_days: i64) -> String {
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }

    let mut output = String::from("Upcoming birthdays:");
    for entry in upcoming {
        output.push_str(&format!(
            "\n  {}: {} ({})",
            entry.name,
            entry.congratulation_date.format("%d.%m.%Y"),
            entry.congratulation_date.weekday()
        ));
    }
    output
}
