use std::time::Duration;

/// Hard limit for the whole webhook request.
pub const TIMEOUT_SECONDS: u64 = 30;

/// Emit DEBUG lines for the invocation.
pub const DEBUG: bool = false;

/// Component name that prefixes every log message.
pub const COMPONENT: &str = "n8n-webhook";

/// Status codes the webhook may answer with to accept an alert.
pub const ACCEPTED_STATUSES: [u16; 3] = [200, 201, 204];

/// Runtime knobs of one relay invocation. Built from the constants above;
/// nothing is read from the environment.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub timeout: Duration,
    pub debug: bool,
    pub component: String,
    pub accepted_statuses: Vec<u16>,
}

impl RelayConfig {
    pub fn is_accepted(&self, status: u16) -> bool {
        self.accepted_statuses.contains(&status)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(TIMEOUT_SECONDS),
            debug: DEBUG,
            component: COMPONENT.to_string(),
            accepted_statuses: ACCEPTED_STATUSES.to_vec(),
        }
    }
}
