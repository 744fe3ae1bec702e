//! ytinfo - YouTube video info resolver
//!
//! Resolves title, channel and playable stream URLs for a video ID and
//! prints them to stdout.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use ytinfo::{ReqwestTransport, Resolver, ResolverConfig};

#[derive(Parser)]
#[command(name = "ytinfo", about = "Resolve playable YouTube video metadata")]
struct Args {
    /// Video ID to resolve (11 characters, e.g. aqz-KE-bpKQ)
    video_id: String,

    /// Override the upstream info endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Print the full metadata document as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut config = ResolverConfig::default();
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    let resolver = Resolver::with_config(&config, Arc::new(ReqwestTransport::new()))?;
    let info = resolver.resolve(&args.video_id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    if let Some(details) = &info.video_details {
        println!("Title:    {}", details.title);
        println!("Author:   {}", details.author);
        println!("Length:   {}s", details.length_seconds);
        println!("Views:    {}", details.view_count);
    }

    if let Some(streaming) = &info.streaming_data {
        println!("Expires in {} seconds", streaming.expires_in_seconds);
        println!("Muxed formats:");
        for format in &streaming.formats {
            println!(
                "  [{}] {:>6} {}",
                format.itag, format.quality_label, format.url
            );
        }
        println!("Adaptive formats:");
        for format in &streaming.adaptive_formats {
            println!(
                "  [{}] {:>6} {}",
                format.itag, format.quality_label, format.mime_type
            );
        }
    }

    Ok(())
}
