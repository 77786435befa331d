use reqwest::blocking::{Client, Request};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::{Error, Result};
use crate::types::{AlertPayload, DeliveryReceipt};

const JSON_MEDIA_TYPE: &str = "application/json";

/// One-shot webhook sender. Built per invocation and never pooled.
pub struct WebhookClient {
    client: Client,
    config: RelayConfig,
}

impl WebhookClient {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::DeliveryFailed(describe(&e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Assemble the POST without sending it. Only the JSON headers are set;
    /// the body is the payload re-serialized as-is.
    pub fn build_request(&self, webhook_url: &str, payload: &AlertPayload) -> Result<Request> {
        self.client
            .post(webhook_url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .json(payload)
            .build()
            .map_err(|e| self.classify_transport_error(e))
    }

    /// Send the alert exactly once.
    pub fn send(&self, webhook_url: &str, payload: &AlertPayload) -> Result<DeliveryReceipt> {
        let request = self.build_request(webhook_url, payload)?;
        debug!("Posting alert to {}", request.url());

        let response = self
            .client
            .execute(request)
            .map_err(|e| self.classify_transport_error(e))?;

        classify_status(response.status().as_u16(), &self.config)
    }

    fn classify_transport_error(&self, e: reqwest::Error) -> Error {
        // A connect timeout is both; the timeout wins.
        if e.is_timeout() {
            Error::DeliveryTimeout {
                timeout: self.config.timeout,
            }
        } else if e.is_connect() {
            Error::DeliveryConnection(describe(&e))
        } else {
            Error::DeliveryFailed(describe(&e))
        }
    }
}

/// Map a response status onto the delivery outcome.
pub fn classify_status(status: u16, config: &RelayConfig) -> Result<DeliveryReceipt> {
    if config.is_accepted(status) {
        Ok(DeliveryReceipt { status })
    } else {
        Err(Error::DeliveryRejected { status })
    }
}

/// reqwest's Display stops at the outermost layer ("error sending request");
/// walk the source chain so the log line names the real cause.
fn describe(e: &(dyn std::error::Error + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
