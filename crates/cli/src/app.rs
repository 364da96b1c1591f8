use crate::bootstrap::{init_logging, load_config, log_config};
use crate::cli::Cli;
use crate::di::UseCases;
use crate::output::ReportFormatter;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use ferrous_dig_application::use_cases::normalize_server;
use ferrous_dig_domain::validators::{validate_domain, validate_record_type};
use ferrous_dig_domain::{ConfigError, DigError, ErrorKind};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::debug;

/// Exit code for a run cut short by SIGINT/SIGTERM.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Argument error reported by clap, reduced to its first line.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ArgumentError(String);

impl From<clap::Error> for ArgumentError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.render().to_string();
        let first = rendered.lines().next().unwrap_or_default();
        ArgumentError(first.trim_start_matches("error: ").to_string())
    }
}

/// Everything a run prints, and how the process should exit.
#[derive(Debug)]
pub struct Report {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: u8,
}

impl Report {
    fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn failure(error: &DigError) -> Self {
        let mut stderr = ReportFormatter::new().format_error(error);
        if error.kind() == ErrorKind::Input {
            stderr.push('\n');
            stderr.push_str(&Cli::command().render_help().to_string());
        }

        Self {
            stdout: String::new(),
            stderr,
            exit_code: u8::try_from(error.exit_code()).unwrap_or(1),
        }
    }

    pub fn interrupted(signal: &str) -> Self {
        let error = DigError::system(format!(
            "received signal {}, shutting down gracefully",
            signal
        ));

        Self {
            stdout: String::new(),
            stderr: ReportFormatter::new().format_error(&error),
            exit_code: EXIT_INTERRUPTED,
        }
    }

    /// Write both streams and turn the report into the process exit code.
    pub fn emit(self) -> ExitCode {
        print!("{}", self.stdout);
        eprint!("{}", self.stderr);
        ExitCode::from(self.exit_code)
    }
}

/// Parse the command line; help, version and argument errors come back
/// as a finished report.
pub fn parse_args<I, T>(args: I) -> Result<Cli, Report>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
            Report::success(err.render().to_string())
        }
        ClapErrorKind::MissingRequiredArgument => {
            Report::failure(&DigError::input("domain name is required"))
        }
        _ => Report::failure(&DigError::input_with_cause(
            "invalid command line arguments",
            ArgumentError::from(err),
        )),
    })
}

/// Load configuration, validate the request, run the lookup and render it.
pub async fn run(cli: Cli) -> Report {
    let config = match load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(err) => return Report::failure(&config_error(err)),
    };

    init_logging(&config);
    log_config(&config, cli.config.as_deref());

    let domain = cli.domain.as_str();
    let record_type = config.query.record_type.to_uppercase();
    let server = config.query.server.as_deref();

    if let Err(err) = preflight(domain, &record_type, server) {
        return Report::failure(&err);
    }

    debug!(
        domain = %domain,
        record_type = %record_type,
        server = server.unwrap_or("system"),
        "Starting lookup"
    );

    let use_cases = UseCases::new(&config);
    let result = use_cases
        .query
        .query(domain, &record_type, server.unwrap_or_default())
        .await;

    match result.into_result() {
        Ok(result) => Report::success(ReportFormatter::new().format_result(Some(&result))),
        Err(err) => Report::failure(&err),
    }
}

fn preflight(domain: &str, record_type: &str, server: Option<&str>) -> Result<(), DigError> {
    validate_domain(domain).map_err(|err| err.with_domain(domain))?;
    validate_record_type(record_type)?;
    if let Some(server) = server {
        normalize_server(server)?;
    }
    Ok(())
}

fn config_error(err: anyhow::Error) -> DigError {
    match err.downcast::<ConfigError>() {
        Ok(config_err) => config_err.into(),
        Err(other) => DigError::system(other.to_string()),
    }
}

/// Report panics as System errors and exit with the System exit code.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| info.to_string());

        let error = DigError::system(format!("application panic: {}", detail));
        eprint!("{}", ReportFormatter::new().format_error(&error));
        std::process::exit(error.exit_code());
    }));
}

/// Resolves with the signal name once SIGINT or SIGTERM arrives.
pub async fn shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => tokio::select! {
                _ = ctrl_c() => "interrupt",
                _ = terminate.recv() => "terminated",
            },
            Err(_) => {
                ctrl_c().await;
                "interrupt"
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c().await;
        "interrupt"
    }
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
