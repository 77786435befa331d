//! Shared types used across the relay.
//! Includes the positional `InvocationArgs`, the opaque `AlertPayload` and
//! the `DeliveryReceipt` returned on a successful POST.
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Positional arguments as handed over by the monitoring daemon.
#[derive(Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    pub alert_file: PathBuf,
    /// Accepted for positional compatibility only; never read, and any bytes will do.
    pub credential_token: OsString,
    pub webhook_url: String,
}

// Keep the token out of any debug output.
impl fmt::Debug for InvocationArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationArgs")
            .field("alert_file", &self.alert_file)
            .field("credential_token", &"<redacted>")
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}

/// An alert document of any JSON shape, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertPayload(serde_json::Value);

impl AlertPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for AlertPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Proof of an accepted delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_debug_output_redacts_token() {
        let args = InvocationArgs {
            alert_file: PathBuf::from("/tmp/alert.json"),
            credential_token: OsString::from("s3cr3t"),
            webhook_url: "https://hooks.example/abc".to_string(),
        };
        let rendered = format!("{:?}", args);
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("hooks.example"));
    }

    #[test]
    fn test_payload_serializes_without_wrapper() {
        let payload = AlertPayload::new(json!([1, "two", {"three": null}]));
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"[1,"two",{"three":null}]"#
        );
    }
}
