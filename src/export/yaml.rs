//! YAML Export functionality
//!
//! Exports the whole directory to YAML for human-readable backup.

use crate::error::{ContactError, ContactResult};
use crate::export::json::FullExport;
use crate::models::Directory;
use std::io::Write;

/// Export the directory to YAML format
pub fn export_full_yaml<W: Write>(directory: &Directory, writer: &mut W) -> ContactResult<()> {
    let export = FullExport::from_directory(directory);
    let err = |e: std::io::Error| ContactError::Export(e.to_string());

    writeln!(writer, "# Contact Book Export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_yaml_export() {
        let mut ann = Record::new("Ann");
        ann.add_phone("1111111111").unwrap();
        ann.add_birthday("12.06.1990").unwrap();
        let directory: Directory = vec![ann].into_iter().collect();

        let mut buffer = Vec::new();
        export_full_yaml(&directory, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# Contact Book Export"));
        assert!(yaml.contains("name: Ann"));
        assert!(yaml.contains("12.06.1990"));

        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.metadata.contact_count, 1);
    }
}
