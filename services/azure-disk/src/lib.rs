//! Ranged, SAS-authorized byte retrieval for Azure managed disks.
//!
//! Reading a managed disk's underlying blob takes a two-step authorization
//! flow against the management plane: POST a read grant request, follow the
//! returned async operation to its result, then GET the pre-signed SAS URL
//! it yields, optionally restricted to a byte range. [`DiskAccessClient`]
//! runs the whole sequence; the individual steps are exposed for callers
//! that need to drive them separately.
//!
//! # Example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use blobgrant_azure_disk::{AccessOptions, Config, DiskAccessClient};
//! use blobgrant_core::{Context, TransportConfig};
//! use blobgrant_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Build the transport once; proxy and TLS options are fixed here.
//!     let transport = ReqwestHttpSend::from_config(&TransportConfig::default())?;
//!     let ctx = Context::new(transport);
//!
//!     // AZURE_SUBSCRIPTION_ID and AZURE_RESOURCE_GROUP from the environment
//!     let config = Config::default().from_env(&ctx);
//!     let client = DiskAccessClient::new(ctx, config)?;
//!
//!     // First KiB of the disk
//!     let opts = AccessOptions::new().with_start_byte(0).with_end_byte(1023);
//!     let resp = client.get_blob_raw("my-disk", &opts).await?;
//!     println!("read {} bytes", resp.body.len());
//!
//!     client.revoke_access("my-disk", None).await?;
//!     Ok(())
//! }
//! ```

mod constants;

mod config;
pub use config::Config;

mod options;
pub use options::AccessOptions;

mod range;
pub use range::{ByteRange, RangeSpec};

mod sas;
pub use sas::SasUrl;

mod urls;
pub use urls::UrlBuilder;

mod grant;
pub use grant::{AccessRequester, OperationHandle};

mod poll;
pub use poll::OperationPoller;

mod fetch;
pub use fetch::{BlobFetcher, RawBlobResponse};

mod client;
pub use client::DiskAccessClient;
