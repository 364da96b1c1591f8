use clap::Parser;
use ferrous_dig_domain::CliOverrides;

const EXAMPLES: &str = "\
Examples:
  ferrous-dig google.com
  ferrous-dig google.com -t AAAA
  ferrous-dig google.com -s 8.8.8.8
  ferrous-dig google.com -t MX -s 1.1.1.1";

#[derive(Parser, Debug)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "DNS lookup utility")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Domain name to query
    pub domain: String,

    /// DNS record type (A, AAAA, MX, CNAME, TXT) [default: A]
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub record_type: Option<String>,

    /// DNS server to use (IP address, optionally with port) [default: system default]
    #[arg(short = 's', long, value_name = "SERVER")]
    pub server: Option<String>,

    /// Query timeout in milliseconds [default: 5000]
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Command-line values that override the configuration file.
    ///
    /// The record type is upper-cased here, as typed on the command line.
    pub fn overrides(&self) -> CliOverrides {
        let log_level = self
            .log_level
            .clone()
            .or_else(|| self.verbose.then(|| "debug".to_string()));

        CliOverrides {
            timeout_ms: self.timeout,
            server: self.server.clone(),
            record_type: self.record_type.as_ref().map(|t| t.to_uppercase()),
            log_level,
        }
    }
}
