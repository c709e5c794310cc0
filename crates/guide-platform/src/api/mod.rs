mod backend;

pub use backend::{BackendClient, UNKNOWN_API_ERROR, error_detail};
