//! Resolver configuration

use serde::{Deserialize, Serialize};

/// Default upstream endpoint for video info requests.
pub const DEFAULT_ENDPOINT: &str = "https://youtube.com/get_video_info";

/// Default lexical shape of a video ID: 11 ASCII characters, a word
/// character first, word characters or hyphens after.
pub const DEFAULT_ID_PATTERN: &str = "^[A-Za-z0-9_][A-Za-z0-9_-]{10}$";

/// Resolver settings
///
/// Both fields are plain strings so the config can round-trip through files
/// and flags; they are parsed (and can fail) at `Resolver` construction,
/// never later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Upstream endpoint URL; extra query parameters on it are preserved
    pub endpoint: String,

    /// Regular expression a candidate video ID must match
    pub id_pattern: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.id_pattern, DEFAULT_ID_PATTERN);
    }

    #[test]
    fn test_default_endpoint_parses() {
        let url = url::Url::parse(DEFAULT_ENDPOINT).expect("default endpoint");
        assert_eq!(url.path(), "/get_video_info");
        assert_eq!(url.query(), None);
    }
}
