//! Data structures for resolved video metadata
//!
//! Field names and nesting mirror the upstream `player_response` document
//! exactly. Numeric-looking values the upstream sends as strings (durations,
//! view counts, content lengths) stay strings here; coercing them is a
//! presentation concern, not this model's.

use crate::utils::error::ResolveError;
use serde::{Deserialize, Serialize};

/// Everything a player can use for one video: descriptive details plus the
/// time-limited stream URLs.
///
/// Both substructures are optional in the wire format; a successful decode
/// of a sparse document keeps them absent rather than zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_details: Option<VideoDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming_data: Option<StreamingData>,
}

/// Descriptive details of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(rename = "videoId", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Duration in seconds, as text
    #[serde(default)]
    pub length_seconds: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ThumbnailSet>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub allow_ratings: bool,
    /// View count as text
    #[serde(default)]
    pub view_count: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_live_content: bool,
}

/// Thumbnail variants for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailSet {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Stream URLs and their encoding/quality attributes. The URLs are
/// time-limited; `expires_in_seconds` counts from envelope receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    #[serde(default)]
    pub expires_in_seconds: String,
    /// Muxed streams: audio and video in one file
    #[serde(default)]
    pub formats: Vec<Format>,
    /// Audio-only or video-only streams, combined client-side
    #[serde(default)]
    pub adaptive_formats: Vec<AdaptiveFormat>,
}

/// A muxed stream entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    #[serde(default)]
    pub itag: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub bitrate: i64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub quality_label: String,
    #[serde(default)]
    pub last_modified: String,
    /// Length in bytes, as text
    #[serde(default)]
    pub content_length: String,
    #[serde(default)]
    pub fps: u32,
    /// Approximate duration in milliseconds, as text
    #[serde(default)]
    pub approx_duration_ms: String,
}

/// An adaptive stream entry, with byte-range hints for the initialization
/// and index segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveFormat {
    #[serde(default)]
    pub itag: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub bitrate: i64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_range: Option<ByteRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range: Option<ByteRange>,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub content_length: String,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub fps: u32,
    #[serde(default)]
    pub quality_label: String,
    #[serde(default)]
    pub projection_type: String,
    #[serde(default)]
    pub average_bitrate: i64,
    #[serde(default)]
    pub approx_duration_ms: String,
}

/// A byte range within a stream, bounds as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByteRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Decode the inner `player_response` JSON into the metadata model.
///
/// Unknown fields are ignored so upstream schema additions don't break the
/// decode. Structural failures (syntax, type mismatch) come back as
/// `MalformedPayload` wrapping the serde error for diagnostics.
pub fn project(player_response: &str) -> Result<VideoMetadata, ResolveError> {
    Ok(serde_json::from_str(player_response)?)
}
