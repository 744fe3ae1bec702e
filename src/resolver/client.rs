//! Resolution pipeline composition

use crate::cache::MetadataCache;
use crate::resolver::id::VideoId;
use crate::resolver::models::VideoMetadata;
use crate::resolver::transport::Transport;
use crate::resolver::{envelope, models, request, transport};
use crate::utils::config::ResolverConfig;
use crate::utils::error::ResolveError;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Resolves playable video metadata from a video ID.
///
/// Runs the pipeline validate → build URL → fetch → decode envelope →
/// project JSON, short-circuiting on the first failure. Holds only
/// immutable configuration, so one instance can serve concurrent callers
/// as long as the injected transport can. Retry and timeout policy belongs
/// to the transport, never to the pipeline.
pub struct Resolver {
    endpoint: Url,
    id_pattern: Regex,
    transport: Arc<dyn Transport>,
    cache: Option<Arc<dyn MetadataCache>>,
}

impl Resolver {
    /// Create a resolver with the default endpoint and ID pattern.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(&ResolverConfig::default(), transport)
            .expect("default configuration is valid")
    }

    /// Create a resolver from explicit configuration. Fails if the endpoint
    /// or the ID pattern does not parse; both are construction-time
    /// configuration errors, never per-call ones.
    pub fn with_config(
        config: &ResolverConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ResolveError> {
        let endpoint = Url::parse(&config.endpoint)?;
        let id_pattern = Regex::new(&config.id_pattern)?;
        Ok(Self {
            endpoint,
            id_pattern,
            transport,
            cache: None,
        })
    }

    /// Attach a metadata cache, consulted before fetching and populated
    /// only after a fully successful resolution.
    pub fn with_cache(mut self, cache: Arc<dyn MetadataCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Resolve metadata for `id`.
    ///
    /// Returns a populated `VideoMetadata` or the first classified error
    /// encountered; errors are never cached and never retried here.
    pub async fn resolve(&self, id: &str) -> Result<VideoMetadata, ResolveError> {
        let id = VideoId::with_pattern(id, &self.id_pattern)?;

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(id.as_str()) {
                debug!("cache hit for {}", id);
                return Ok(hit);
            }
        }

        let url = request::info_url(&self.endpoint, &id);
        let body = transport::fetch(self.transport.as_ref(), &url).await?;
        let payload = envelope::decode(&body)?;
        let info = models::project(&payload)?;

        if let Some(cache) = &self.cache {
            cache.put(id.as_str(), &info);
        }

        debug!("resolved metadata for {}", id);
        Ok(info)
    }
}
