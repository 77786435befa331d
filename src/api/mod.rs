//! High-level library API: the read → send pipeline without the process
//! around it. The CLI is a thin wrapper over [`relay_alert`]; prefer these
//! entrypoints when embedding the relay.
use std::path::Path;

use crate::config::RelayConfig;
use crate::delivery::WebhookClient;
use crate::error::Result;
use crate::io::read_alert_file;
use crate::types::{AlertPayload, DeliveryReceipt};

/// POST an already loaded payload to the webhook, once.
pub fn deliver(
    webhook_url: &str,
    payload: &AlertPayload,
    config: &RelayConfig,
) -> Result<DeliveryReceipt> {
    WebhookClient::new(config)?.send(webhook_url, payload)
}

/// Read the alert file and forward it. No request is made when the file
/// cannot be read or parsed.
pub fn relay_alert(
    alert_file: &Path,
    webhook_url: &str,
    config: &RelayConfig,
) -> Result<DeliveryReceipt> {
    let payload = read_alert_file(alert_file)?;
    deliver(webhook_url, &payload, config)
}
