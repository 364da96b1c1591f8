mod dns_exchange;
mod resolver_discovery;

pub use dns_exchange::DnsExchange;
pub use resolver_discovery::ResolverDiscovery;
