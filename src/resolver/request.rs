//! Request construction for the video info endpoint

use crate::resolver::id::VideoId;
use url::Url;

/// Build the outbound info request URL for a video ID.
///
/// Sets the `video_id` query parameter on the endpoint, replacing any
/// existing value and keeping every other query parameter intact. Pure;
/// endpoint parse failures are handled at resolver construction, never here.
pub fn info_url(endpoint: &Url, id: &VideoId) -> Url {
    let kept: Vec<(String, String)> = endpoint
        .query_pairs()
        .filter(|(key, _)| key != "video_id")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("video_id", id.as_str());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VideoId {
        VideoId::new(s).expect("test ID")
    }

    fn param<'a>(url: &'a Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_sets_video_id_parameter() {
        let endpoint = Url::parse("https://youtube.com/get_video_info").unwrap();
        let url = info_url(&endpoint, &id("aqz-KE-bpKQ"));
        assert_eq!(param(&url, "video_id").as_deref(), Some("aqz-KE-bpKQ"));
    }

    #[test]
    fn test_preserves_other_parameters() {
        let endpoint =
            Url::parse("https://youtube.com/get_video_info?hl=en&el=embedded").unwrap();
        let url = info_url(&endpoint, &id("abcdefghijk"));
        assert_eq!(param(&url, "hl").as_deref(), Some("en"));
        assert_eq!(param(&url, "el").as_deref(), Some("embedded"));
        assert_eq!(param(&url, "video_id").as_deref(), Some("abcdefghijk"));
    }

    #[test]
    fn test_replaces_existing_video_id() {
        let endpoint =
            Url::parse("https://youtube.com/get_video_info?video_id=stale_value").unwrap();
        let url = info_url(&endpoint, &id("abcdefghijk"));
        let values: Vec<_> = url
            .query_pairs()
            .filter(|(k, _)| k == "video_id")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(values, vec!["abcdefghijk".to_string()]);
    }

    #[test]
    fn test_endpoint_path_untouched() {
        let endpoint = Url::parse("https://upstream.test/info/v2").unwrap();
        let url = info_url(&endpoint, &id("abcdefghijk"));
        assert_eq!(url.path(), "/info/v2");
        assert_eq!(url.host_str(), Some("upstream.test"));
    }
}
