use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::AlertPayload;

/// Read the whole alert file and parse it as a single JSON document.
///
/// A missing path maps to `FileNotFound`, content that is not valid JSON
/// (invalid UTF-8 included) maps to `MalformedPayload`. Any other OS error
/// is reported as `AlertUnreadable`.
pub fn read_alert_file(path: &Path) -> Result<AlertPayload> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::AlertUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);

    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(AlertPayload::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn alert_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_reads_wazuh_style_alert() {
        let file = alert_file(
            br#"{"timestamp":"2024-05-01T10:00:00Z","rule":{"level":10,"id":"5712"},"agent":{"name":"web-01"}}"#,
        );
        let payload = read_alert_file(file.path()).unwrap();
        assert_eq!(payload.as_value()["rule"]["id"], json!("5712"));
        assert_eq!(payload.as_value()["agent"]["name"], json!("web-01"));
    }

    #[test]
    fn test_accepts_non_object_documents() {
        for (raw, expected) in [
            (&b"[1,2,3]"[..], json!([1, 2, 3])),
            (&b"\"just text\""[..], json!("just text")),
            (&b"42\n"[..], json!(42)),
            (&b"null"[..], json!(null)),
        ] {
            let file = alert_file(raw);
            assert_eq!(read_alert_file(file.path()).unwrap().into_value(), expected);
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match read_alert_file(&path) {
            Err(Error::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_json() {
        let file = alert_file(b"{\"a\":");
        assert!(matches!(
            read_alert_file(file.path()),
            Err(Error::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let file = alert_file(&[b'"', 0xff, 0xfe, b'"']);
        assert!(matches!(
            read_alert_file(file.path()),
            Err(Error::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_trailing_garbage_is_malformed() {
        let file = alert_file(b"{\"a\":1} extra");
        assert!(matches!(
            read_alert_file(file.path()),
            Err(Error::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_alert_file(dir.path()),
            Err(Error::AlertUnreadable { .. })
        ));
    }
}
