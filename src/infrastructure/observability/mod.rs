mod request_id;
mod tracing_setup;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_setup::{TracingConfig, init_tracing};
