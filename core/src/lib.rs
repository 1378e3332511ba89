//! Core components for SAS-authorized disk byte retrieval.
//!
//! This crate provides the foundational types for the blobgrant ecosystem.
//! It defines the capability seams that the service crates build on.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending and
//!   environment access
//! - **HttpSend**: The abstract transport every network call goes through
//! - **TransportConfig**: Immutable proxy/TLS options consumed when a
//!   transport is built
//! - **Error**: The error type shared across the workspace, carrying the
//!   triggering HTTP response for diagnostics
//!
//! ## Example
//!
//! ```no_run
//! use blobgrant_core::{Context, HttpSend, Result};
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait::async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         todo!("dispatch via your http client of choice")
//!     }
//! }
//!
//! let ctx = Context::new(MyHttpSend);
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod utils;

mod context;
pub use context::Context;
mod http;
pub use http::HttpSend;
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod transport;
pub use transport::{TlsVersion, TransportConfig};

mod error;
pub use error::{Error, ErrorKind, ErrorResponse, Result};
