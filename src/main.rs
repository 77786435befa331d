//! alert-relay CLI entrypoint.
//!
//! Installs the stderr logger, hands the raw arguments to the `cli` module
//! and turns its result into the process exit code. A panic anywhere in the
//! relay is logged as an unhandled fault and exits with failure.
//! For programmatic use, prefer the library API (`alert_relay::api`).

use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::sync::Arc;

use alert_relay::logging::{self, StderrSink};
use alert_relay::{Error, RelayConfig};
use tracing::error;

mod cli;

fn main() -> ExitCode {
    let config = RelayConfig::default();
    if let Err(e) = logging::init(&config, Arc::new(StderrSink)) {
        eprintln!("failed to install logger: {}", e);
    }

    panic::set_hook(Box::new(|info| {
        error!("{}", Error::unhandled(cli::errors::panic_message(info.payload())));
    }));

    match panic::catch_unwind(AssertUnwindSafe(|| cli::run(std::env::args_os(), &config))) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::from(cli::errors::EXIT_FAILURE),
    }
}
