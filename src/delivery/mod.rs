//! Outbound side of the relay: a single JSON POST to the webhook and the
//! classification of whatever comes back into a receipt or a tagged error.
pub mod webhook;
pub use webhook::{WebhookClient, classify_status};
