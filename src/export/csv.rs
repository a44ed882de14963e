//! CSV Export functionality
//!
//! One row per contact; phones are joined with `;` inside a single column.

use crate::error::{ContactError, ContactResult};
use crate::models::Directory;
use std::io::Write;

/// Export the directory to CSV
pub fn export_contacts_csv<W: Write>(directory: &Directory, writer: W) -> ContactResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let err = |e: csv::Error| ContactError::Export(e.to_string());

    csv_writer
        .write_record(["Name", "Phones", "Birthday"])
        .map_err(err)?;

    for record in directory.iter() {
        let phones = record
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let birthday = record.birthday.map(|b| b.to_string()).unwrap_or_default();

        csv_writer
            .write_record([record.name.as_str(), phones.as_str(), birthday.as_str()])
            .map_err(err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;
    Ok(())
}
