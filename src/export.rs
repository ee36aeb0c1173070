//! JSON export of interview records
//!
//! The engine defines no wire format of its own; the record is a plain
//! serializable structure, and this helper writes it out as pretty JSON for
//! whatever document store the site uses.

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::record::InterviewRecord;

/// Write the record to `path` as pretty-printed JSON, creating parent
/// directories as needed.
pub fn export_json(record: &InterviewRecord, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(record)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;

    info!(session_id = %record.session_id, path = %path.display(), "record exported");
    Ok(())
}

/// Default export file name for a session
pub fn default_file_name(record: &InterviewRecord) -> String {
    format!(
        "interview-{}-{}.json",
        record.created_at.format("%Y%m%d-%H%M%S"),
        record.session_id.simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("record.json");

        let mut record = InterviewRecord::new();
        record.interviewer = Some("Nurse A".to_string());

        export_json(&record, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let back: InterviewRecord = serde_json::from_str(&contents).unwrap();
        assert_eq!(back.interviewer.as_deref(), Some("Nurse A"));
        assert_eq!(back.session_id, record.session_id);
    }

    #[test]
    fn test_default_file_name_is_unique_per_session() {
        let a = InterviewRecord::new();
        let b = InterviewRecord::new();
        assert_ne!(default_file_name(&a), default_file_name(&b));
        assert!(default_file_name(&a).starts_with("interview-"));
        assert!(default_file_name(&a).ends_with(".json"));
    }
}
