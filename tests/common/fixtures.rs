/// Names the test server knows about.
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> &'static str {
        "example.com"
    }

    /// Answered with NXDOMAIN.
    pub fn nonexistent() -> &'static str {
        "nonexistent.example"
    }

    /// Answered with SERVFAIL.
    pub fn broken() -> &'static str {
        "servfail.example"
    }
}

/// Command line for a lookup against `server`.
pub fn args<'a>(domain: &'a str, extra: &[&'a str], server: &'a str) -> Vec<&'a str> {
    let mut args = vec!["ferrous-dig", domain, "-s", server];
    args.extend_from_slice(extra);
    args
}
