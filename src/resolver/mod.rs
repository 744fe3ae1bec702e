pub mod client;
pub mod envelope;
pub mod id;
pub mod models;
pub mod request;
pub mod transport;

pub use client::Resolver;
pub use id::VideoId;
pub use models::{
    AdaptiveFormat, ByteRange, Format, StreamingData, Thumbnail, ThumbnailSet, VideoDetails,
    VideoMetadata,
};
pub use transport::{Envelope, ReqwestTransport, Transport};
