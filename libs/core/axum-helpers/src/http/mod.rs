//! HTTP middleware: CORS and security headers.

mod cors;
mod security;

pub use cors::{DEFAULT_DEV_ORIGINS, cors_layer_from_env};
pub use security::security_headers;
