//! # screenshotone - ScreenshotOne API Client
//!
//! A small Rust client for the [ScreenshotOne](https://screenshotone.com)
//! screenshot rendering API: build a signed take URL from a set of rendering
//! options, optionally perform the GET, and get the raw image or PDF bytes
//! back.
//!
//! ## Features
//! - Fluent [`TakeOptions`] builder covering the full wire parameter table
//! - Deterministic, byte-exact query construction with HMAC-SHA256 request
//!   signing when a secret key is configured
//! - Async, tokio compatible
//! - Injectable [`Transport`] for testing without a network
//!
//! ## Example
//! ```no_run
//! use screenshotone::{Client, Format, TakeOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), screenshotone::Error> {
//!     let client = Client::new("your-access-key")?.with_secret_key("your-secret-key");
//!
//!     let options = TakeOptions::url("https://example.com")
//!         .full_page(true)
//!         .format(Format::Png)
//!         .block_ads(true);
//!
//!     // URL generation alone is pure and synchronous.
//!     let url = client.generate_take_url(&options)?;
//!     println!("{url}");
//!
//!     // Or perform the request and get the bytes back.
//!     let bytes = client.take(&options).await?;
//!     std::fs::write("example.png", &bytes).unwrap();
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
pub mod options;

// Re-exports for convenience
pub use client::{Client, Error, SecretString};
pub use http::{HttpResponse, ReqwestTransport, Transport};
pub use options::{
    BlockResource, Format, MediaType, ResponseType, StorageClass, TakeOptions, TimeZone, WaitUntil,
};
