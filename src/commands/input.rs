//! Reading submissions from files or stdin.

use obsgrade::error::{ObsError, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole submission; `None` or `-` means stdin.
pub fn read_submission(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            ObsError::UserError(format!(
                "failed to read submission file '{}': {}",
                path.display(),
                e
            ))
        }),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ObsError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "He felt sad.\nTwo men stand.").unwrap();

        let text = read_submission(Some(file.path())).unwrap();
        assert_eq!(text, "He felt sad.\nTwo men stand.");
    }

    #[test]
    fn missing_file_is_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_submission(Some(dir.path().join("missing.txt").as_path())).unwrap_err();
        match err {
            ObsError::UserError(msg) => assert!(msg.contains("failed to read submission file")),
            other => panic!("Expected UserError, got {:?}", other),
        }
    }
}
