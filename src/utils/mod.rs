pub mod config;
pub mod error;

pub use config::{ResolverConfig, DEFAULT_ENDPOINT, DEFAULT_ID_PATTERN};
pub use error::ResolveError;
