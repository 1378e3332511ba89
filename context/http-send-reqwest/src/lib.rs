//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use blobgrant_core::{Error, HttpSend, Result, TlsVersion, TransportConfig};
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// HTTP sender backed by a shared `reqwest::Client`.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from transport options.
    ///
    /// The config is read once here; the resulting client is immutable for
    /// its lifetime, so concurrent calls never observe a settings change.
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                Error::invalid_argument(format!("invalid proxy url: {proxy_url}")).with_source(e)
            })?;
            builder = builder.proxy(proxy);
        }

        if let Some(version) = config.min_tls_version {
            let version = match version {
                TlsVersion::Tls12 => reqwest::tls::Version::TLS_1_2,
                TlsVersion::Tls13 => reqwest::tls::Version::TLS_1_3,
            };
            builder = builder.min_tls_version(version);
        }

        if !config.verify_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::unexpected("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobgrant_core::ErrorKind;

    #[test]
    fn test_from_config_defaults() {
        let sender = ReqwestHttpSend::from_config(&TransportConfig::default());
        assert!(sender.is_ok());
    }

    #[test]
    fn test_from_config_rejects_bad_proxy() {
        let config = TransportConfig::new().with_proxy_url("not a url");
        let err = ReqwestHttpSend::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_from_config_full() {
        let config = TransportConfig::new()
            .with_proxy_url("http://proxy.internal:3128")
            .with_min_tls_version(TlsVersion::Tls12)
            .with_verify_certs(false);
        assert!(ReqwestHttpSend::from_config(&config).is_ok());
    }
}
