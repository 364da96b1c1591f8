//! # Ferrous Dig
//!
//! Command-line DNS lookup utility.

use ferrous_dig::app::{self, Report};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    app::install_panic_hook();

    let cli = match app::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(report) => return report.emit(),
    };

    let report = tokio::select! {
        report = app::run(cli) => report,
        signal = app::shutdown_signal() => Report::interrupted(signal),
    };

    report.emit()
}
