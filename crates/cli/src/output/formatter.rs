use chrono::Local;
use ferrous_dig_domain::{DigError, ErrorKind, QueryResult, DEFAULT_DNS_PORT};
use std::fmt::Write;
use std::time::Duration;

const WHEN_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Renders lookup results and errors as dig-style text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Report for a finished lookup. Failed lookups render as their error.
    pub fn format_result(&self, result: Option<&QueryResult>) -> String {
        let when = Local::now().format(WHEN_FORMAT).to_string();
        self.render_result(result, &when)
    }

    fn render_result(&self, result: Option<&QueryResult>, when: &str) -> String {
        let Some(result) = result else {
            return self.format_error(&DigError::system("no result to format"));
        };
        if let Some(error) = &result.error {
            return self.format_error(error);
        }

        let mut out = String::new();

        let _ = write!(
            out,
            "; <<>> ferrous-dig <<>> {} {}",
            result.domain, result.record_type
        );
        if !result.server.is_empty() {
            let default_port = format!(":{}", DEFAULT_DNS_PORT);
            let shown = result
                .server
                .strip_suffix(default_port.as_str())
                .unwrap_or(&result.server);
            let _ = write!(out, " @{}", shown);
        }
        out.push('\n');

        let _ = writeln!(out, ";; Query time: {}", format_duration(result.query_time));
        let _ = writeln!(out, ";; SERVER: {}", result.server);
        let _ = writeln!(out, ";; WHEN: {}", when);
        out.push('\n');

        match result.records.len() {
            0 => out.push_str(";; ANSWER SECTION: (empty)\n"),
            1 => out.push_str(";; ANSWER SECTION: (1 record)\n"),
            n => {
                let _ = writeln!(out, ";; ANSWER SECTION: ({} records)", n);
            }
        }

        for record in &result.records {
            let _ = writeln!(
                out,
                "{:<30}\tIN\t{}\t{}",
                result.domain,
                result.record_type,
                format_record_value(&result.record_type, record)
            );
        }

        out
    }

    /// Error text with a block of context for the error's kind.
    pub fn format_error(&self, error: &DigError) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Error: {}", error.message());

        match error.kind() {
            ErrorKind::Input => {
                out.push_str(
                    "\nThis is an input validation error. Please check your command line arguments.\n",
                );
                if let Some(domain) = error.domain() {
                    let _ = writeln!(out, "Domain: {}", domain);
                }
                out.push_str("Use 'ferrous-dig --help' for usage information.\n");
            }
            ErrorKind::Network => {
                out.push_str("\nThis is a network connectivity error.\n");
                if let Some(server) = error.server() {
                    let _ = writeln!(out, "DNS Server: {}", server);
                }
                out.push_str("Troubleshooting suggestions:\n");
                out.push_str("- Check your internet connection\n");
                out.push_str("- Try a different DNS server (e.g., -s 8.8.8.8)\n");
                out.push_str("- Verify the DNS server IP address is correct\n");
            }
            ErrorKind::Dns => {
                out.push_str("\nThis is a DNS resolution error.\n");
                if let Some(domain) = error.domain() {
                    let _ = writeln!(out, "Domain: {}", domain);
                }
                if let Some(server) = error.server() {
                    let _ = writeln!(out, "DNS Server: {}", server);
                }
                out.push_str("Troubleshooting suggestions:\n");
                out.push_str("- Verify the domain name is spelled correctly\n");
                out.push_str("- Check if the domain exists\n");
                out.push_str("- Try querying a different record type\n");
                out.push_str("- Try a different DNS server\n");
            }
            ErrorKind::System => {
                out.push_str("\nThis is a system-level error.\n");
                out.push_str("Troubleshooting suggestions:\n");
                out.push_str("- Check if you have sufficient permissions\n");
                out.push_str("- Verify system DNS configuration\n");
                out.push_str("- Try running as administrator if needed\n");
            }
        }

        if let Some(cause) = error.cause() {
            let _ = writeln!(out, "\nUnderlying cause: {}", cause);
        }

        out
    }
}

fn format_record_value(record_type: &str, value: &str) -> String {
    match record_type.to_uppercase().as_str() {
        "CNAME" if !value.ends_with('.') => format!("{}.", value),
        "TXT" if value.contains([' ', '"', '\'', '\\']) => {
            format!("\"{}\"", value.replace('"', "\\\""))
        }
        _ => value.to_string(),
    }
}

/// `N usec` under a millisecond, `N msec` otherwise.
fn format_duration(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(1) {
        format!("{} usec", elapsed.as_micros())
    } else {
        format!("{} msec", elapsed.as_millis())
    }
}
