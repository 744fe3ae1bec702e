//! ytinfo library

pub mod cache;
pub mod resolver;
pub mod utils;

// Re-export main types for easier use
pub use cache::{MemoryCache, MetadataCache};
pub use resolver::{Envelope, ReqwestTransport, Resolver, Transport, VideoId, VideoMetadata};
pub use utils::{ResolveError, ResolverConfig};
