/// Complete Query Flow Test
///
/// Drives the binary's own wiring end to end:
/// arguments → config → validation → UDP exchange → report / exit code

#[path = "../common/mod.rs"]
mod common;
use common::{args, TestDnsServer, TestDomains};

use ferrous_dig::app::{parse_args, run, Report};

async fn dig(argv: Vec<&str>) -> Report {
    let cli = parse_args(argv).expect("arguments should parse");
    run(cli).await
}

// ============================================================================
// Successful lookups
// ============================================================================

#[tokio::test]
async fn test_a_lookup_prints_report() {
    let server = TestDnsServer::start().await.expect("Failed to start server");
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &[], &addr)).await;

    assert_eq!(report.exit_code, 0, "stderr: {}", report.stderr);
    assert!(report.stderr.is_empty());
    assert!(report
        .stdout
        .starts_with(&format!("; <<>> ferrous-dig <<>> example.com A @{}\n", addr)));
    assert!(report.stdout.contains(&format!(";; SERVER: {}\n", addr)));
    assert!(report.stdout.contains(";; ANSWER SECTION: (1 record)\n"));
    assert!(report
        .stdout
        .contains(&format!("{:<30}\tIN\tA\t93.184.216.34\n", "example.com")));
    assert_eq!(server.queries(), 1);
}

#[tokio::test]
async fn test_lowercase_type_is_uppercased() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &["-t", "mx"], &addr)).await;

    assert_eq!(report.exit_code, 0, "stderr: {}", report.stderr);
    assert!(report.stdout.contains("\tIN\tMX\t10 mail.example.com.\n"));
}

#[tokio::test]
async fn test_txt_with_space_is_quoted() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &["-t", "TXT"], &addr)).await;

    assert_eq!(report.exit_code, 0, "stderr: {}", report.stderr);
    assert!(report.stdout.contains("\tIN\tTXT\t\"v=spf1 -all\"\n"));
}

#[tokio::test]
async fn test_aaaa_lookup() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &["-t", "AAAA"], &addr)).await;

    assert_eq!(report.exit_code, 0, "stderr: {}", report.stderr);
    assert!(report
        .stdout
        .contains("\tIN\tAAAA\t2606:2800:220:1:248:1893:25c8:1946\n"));
}

// ============================================================================
// DNS failures (exit 2)
// ============================================================================

#[tokio::test]
async fn test_nxdomain_exits_with_dns_code() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::nonexistent(), &[], &addr)).await;

    assert_eq!(report.exit_code, 2);
    assert!(report.stdout.is_empty());
    assert!(report
        .stderr
        .starts_with("Error: domain 'nonexistent.example' not found (NXDOMAIN)\n"));
    assert!(report.stderr.contains("This is a DNS resolution error.\n"));
    assert!(report.stderr.contains(&format!("DNS Server: {}\n", addr)));
}

#[tokio::test]
async fn test_servfail_message() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::broken(), &[], &addr)).await;

    assert_eq!(report.exit_code, 2);
    assert!(report
        .stderr
        .starts_with("Error: DNS server experienced an internal failure\n"));
}

#[tokio::test]
async fn test_no_matching_records_is_dns_error() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &["-t", "CNAME"], &addr)).await;

    assert_eq!(report.exit_code, 2);
    assert!(report
        .stderr
        .starts_with("Error: no CNAME records found for domain 'example.com'\n"));
}

// ============================================================================
// Network failures (exit 2)
// ============================================================================

#[tokio::test]
async fn test_silent_server_times_out() {
    let server = TestDnsServer::silent().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &["--timeout", "300"], &addr)).await;

    assert_eq!(report.exit_code, 2);
    assert!(report
        .stderr
        .starts_with("Error: DNS server timeout - server may be unreachable or overloaded\n"));
    assert!(report.stderr.contains("This is a network connectivity error.\n"));
    assert!(report.stderr.contains("Underlying cause: i/o timeout"));
    assert_eq!(server.queries(), 1, "exactly one attempt, no retries");
}

// ============================================================================
// Input failures (exit 1)
// ============================================================================

#[tokio::test]
async fn test_unsupported_type_never_queries() {
    let server = TestDnsServer::start().await.unwrap();
    let addr = server.server();

    let report = dig(args(TestDomains::example(), &["-t", "SRV"], &addr)).await;

    assert_eq!(report.exit_code, 1);
    assert!(report
        .stderr
        .starts_with("Error: unsupported record type 'SRV' (supported: A, AAAA, MX, CNAME, TXT)\n"));
    assert!(report.stderr.contains("Usage:"));
    assert_eq!(server.queries(), 0);
}

#[tokio::test]
async fn test_out_of_range_port_is_input_error() {
    let report = dig(args(TestDomains::example(), &[], "127.0.0.1:70000")).await;

    assert_eq!(report.exit_code, 1);
    assert!(report.stderr.contains("out of range"));
}
