use std::ffi::OsString;

use clap::CommandFactory;
use tracing::debug;

use alert_relay::logging::report_outcome;
use alert_relay::{DeliveryReceipt, RelayConfig, relay_alert};

use super::args::{CliArgs, Invocation};
use super::errors::{AppError, EXIT_SUCCESS};

fn process_invocation(args: CliArgs, config: &RelayConfig) -> alert_relay::Result<DeliveryReceipt> {
    debug!("Called with {} arguments", args.supplied());

    let invocation = args.into_invocation()?;
    debug!("Alert file: {}", invocation.alert_file.display());
    debug!("Webhook URL: {}", invocation.webhook_url);

    relay_alert(&invocation.alert_file, &invocation.webhook_url, config)
}

/// Run one relay invocation over `argv` (program name first) and return the
/// process exit code. Exactly one outcome line is logged.
pub fn run<I, T>(argv: I, config: &RelayConfig) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = match CliArgs::from_argv(argv) {
        Invocation::Relay(args) => args,
        Invocation::Help => {
            let _ = CliArgs::command().print_help();
            return EXIT_SUCCESS;
        }
        Invocation::Version => {
            print!("{}", CliArgs::command().render_version());
            return EXIT_SUCCESS;
        }
    };

    let outcome = process_invocation(args, config);
    report_outcome(&outcome);

    match outcome {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => AppError::from(e).exit_code(),
    }
}
