pub mod query;

pub use query::{normalize_server, QueryUseCase, DEFAULT_TIMEOUT};
