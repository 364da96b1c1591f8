mod interpret;
mod lookup;
mod server_address;

pub use interpret::{extract_records, status_error};
pub use lookup::{QueryUseCase, DEFAULT_TIMEOUT};
pub use server_address::{normalize_server, split_host_port, ServerAddressError};
