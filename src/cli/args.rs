use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use alert_relay::{Error, InvocationArgs};

/// Positional arguments the monitoring daemon passes to an integration.
const EXPECTED_ARGS: usize = 3;

// The derive only describes the positionals for `--help`. The slots themselves
// are split by hand in `from_argv`, so no value in them is ever read as a flag,
// an escape or text.
#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "alert-relay",
    version,
    about = "Forward a security alert JSON file to a webhook",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Alert JSON file written by the monitoring daemon
    #[arg(value_parser = clap::value_parser!(PathBuf))]
    pub alert_file: Option<PathBuf>,

    /// API key slot of the integration (accepted, not used; may be '-')
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub api_key: Option<OsString>,

    /// Webhook URL the alert is POSTed to
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub hook_url: Option<OsString>,

    /// Anything the caller appends after the hook URL is ignored
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub extra: Vec<OsString>,
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    Help,
    Version,
    Relay(CliArgs),
}

impl CliArgs {
    /// Split `argv` (program name first) into the positional slots.
    ///
    /// `-h`/`--help` and `-V`/`--version` are honoured only as the sole
    /// argument; anywhere else they are ordinary values.
    pub fn from_argv<I, T>(argv: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = argv.into_iter().skip(1).map(Into::into).collect();

        if let [only] = raw.as_slice() {
            match only.to_str() {
                Some("-h" | "--help") => return Invocation::Help,
                Some("-V" | "--version") => return Invocation::Version,
                _ => {}
            }
        }

        let mut slots = raw.into_iter();
        Invocation::Relay(CliArgs {
            alert_file: slots.next().map(PathBuf::from),
            api_key: slots.next(),
            hook_url: slots.next(),
            extra: slots.collect(),
        })
    }

    /// Number of positional arguments actually given.
    pub fn supplied(&self) -> usize {
        [
            self.alert_file.is_some(),
            self.api_key.is_some(),
            self.hook_url.is_some(),
        ]
        .iter()
        .filter(|given| **given)
        .count()
            + self.extra.len()
    }

    pub fn into_invocation(self) -> Result<InvocationArgs, Error> {
        let got = self.supplied();
        match (self.alert_file, self.api_key, self.hook_url) {
            (Some(alert_file), Some(credential_token), Some(hook_url)) => Ok(InvocationArgs {
                alert_file,
                credential_token,
                // A URL that is not UTF-8 cannot parse either; the send step
                // reports it as a request failure.
                webhook_url: hook_url.to_string_lossy().into_owned(),
            }),
            _ => Err(Error::InsufficientArguments {
                expected: EXPECTED_ARGS,
                got,
            }),
        }
    }
}
