use ferrous_dig_application::ports::ResolverDiscovery;
use ferrous_dig_application::QueryUseCase;
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::WireExchange;
use std::sync::Arc;

#[cfg(unix)]
use ferrous_dig_infrastructure::system::ResolvConfDiscovery;
#[cfg(not(unix))]
use ferrous_dig_infrastructure::system::UnavailableDiscovery;

pub struct UseCases {
    pub query: QueryUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let exchange = Arc::new(WireExchange::new());

        Self {
            query: QueryUseCase::new(exchange, system_discovery())
                .with_timeout(config.query.timeout()),
        }
    }
}

#[cfg(unix)]
fn system_discovery() -> Arc<dyn ResolverDiscovery> {
    Arc::new(ResolvConfDiscovery::new())
}

#[cfg(not(unix))]
fn system_discovery() -> Arc<dyn ResolverDiscovery> {
    Arc::new(UnavailableDiscovery)
}
