mod dns_server_mock;

pub use dns_server_mock::{build_response, MockAnswer, MockDnsServer, MockReply};
