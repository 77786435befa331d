#![doc = r#"
alert-relay — forward a security monitoring alert to an HTTP webhook.

The monitoring daemon writes each alert to a JSON file and runs an integration
program with three positional arguments: the alert file path, an API key and
the hook URL. This crate reads the file, POSTs the document unchanged to the
hook (for example an n8n workflow) and reports the outcome through the exit
code and a single log line on stderr.

Every invocation is one attempt. There is no retry, no queue and no state kept
between runs.

Quick start: relay a file
-------------------------
```rust,no_run
use std::path::Path;
use alert_relay::{relay_alert, RelayConfig};

fn main() -> alert_relay::Result<()> {
    let receipt = relay_alert(
        Path::new("/tmp/alert.json"),
        "https://n8n.example.com/webhook/wazuh",
        &RelayConfig::default(),
    )?;
    println!("accepted with {}", receipt.status);
    Ok(())
}
```

Error handling
--------------
All public functions return `alert_relay::Result<T>`. Match on `alert_relay::Error`
to tell local failures (bad file, bad JSON) from delivery failures.

```rust,no_run
use std::path::Path;
use alert_relay::{relay_alert, Error, RelayConfig};

fn main() {
    match relay_alert(Path::new("/tmp/alert.json"), "http://127.0.0.1:5678/webhook", &RelayConfig::default()) {
        Ok(_) => {}
        Err(Error::DeliveryRejected { status }) => eprintln!("hook said {status}"),
        Err(e) if e.is_local() => eprintln!("alert not sent: {e}"),
        Err(other) => eprintln!("delivery failed: {other}"),
    }
}
```

Logging
-------
Log lines are rendered as `<timestamp> - <LEVEL> - n8n-webhook: <message>` by
[`logging::RelayLogLayer`] and written to a [`logging::LogSink`]. Use
[`logging::MemorySink`] to capture them in tests.

Useful modules
--------------
- [`api`] — the read → send pipeline.
- [`io`] — alert file loading.
- [`delivery`] — the webhook client and status classification.
- [`logging`] — line rendering and sinks.
- [`config`] — timeout, debug flag and accepted statuses.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod config;
pub mod delivery;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

pub use config::RelayConfig;
pub use error::{Error, Result, Severity};
pub use types::{AlertPayload, DeliveryReceipt, InvocationArgs};

pub use api::{deliver, relay_alert};
pub use delivery::WebhookClient;
pub use io::read_alert_file;
