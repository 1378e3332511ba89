use crate::constants::X_MS_RANGE;
use crate::range::RangeSpec;
use crate::sas::SasUrl;
use blobgrant_core::{Context, Error, Result};
use bytes::Bytes;
use log::debug;

/// Raw bytes of a signed blob fetch, plus the response headers.
///
/// The body is handed over exactly as received; no decoding is applied.
#[derive(Debug)]
pub struct RawBlobResponse {
    /// Response headers, returned as metadata.
    pub headers: http::HeaderMap,
    /// Raw body bytes.
    pub body: Bytes,
}

impl RawBlobResponse {
    /// Header value as UTF-8, when present and valid.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Fetches blob bytes from a pre-signed URL.
#[derive(Debug, Default)]
pub struct BlobFetcher;

impl BlobFetcher {
    /// Create a new fetcher.
    pub fn new() -> Self {
        Self
    }

    /// GET the signed URL, restricted to `range` when explicit.
    ///
    /// The URL authorizes itself through its embedded signature: it goes out
    /// byte-for-byte as received and no Authorization header is attached.
    /// With `RangeSpec::Entire` no range header is sent; the whole blob
    /// streams back, which can be large and long-running.
    ///
    /// Status codes are not interpreted here; a non-success response is a
    /// transport failure carrying the status and body.
    pub async fn fetch_raw(
        &self,
        ctx: &Context,
        sas: &SasUrl,
        range: &RangeSpec,
    ) -> Result<RawBlobResponse> {
        let mut builder = http::Request::builder()
            .method(http::Method::GET)
            .uri(sas.as_str());
        if let Some(value) = range.header_value() {
            builder = builder.header(X_MS_RANGE, value);
        }
        let req = builder
            .body(Bytes::new())
            .map_err(|e| Error::unexpected("failed to build blob request").with_source(e))?;

        let resp = ctx.http_send(req).await?;
        let (parts, body) = resp.into_parts();
        if !parts.status.is_success() {
            return Err(Error::transport(format!(
                "signed blob fetch returned {}",
                parts.status
            ))
            .with_response(parts.status, String::from_utf8_lossy(&body)));
        }

        debug!("fetched {} bytes from signed blob url", body.len());
        Ok(RawBlobResponse {
            headers: parts.headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::ByteRange;
    use blobgrant_core::{ErrorKind, HttpSend};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct StaticHttpSend {
        status: http::StatusCode,
        requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    }

    impl StaticHttpSend {
        fn new(status: http::StatusCode) -> Self {
            Self {
                status,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl HttpSend for StaticHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            self.requests.lock().unwrap().push(req);
            Ok(http::Response::builder()
                .status(self.status)
                .header("content-type", "application/octet-stream")
                .body(Bytes::from_static(b"payload"))
                .unwrap())
        }
    }

    #[tokio::test]
    async fn test_explicit_range_sets_header() {
        let sender = StaticHttpSend::new(http::StatusCode::PARTIAL_CONTENT);
        let requests = sender.requests.clone();
        let ctx = Context::new(sender);

        let sas = SasUrl::new("https://blob/sas?sig=abc");
        let range = RangeSpec::Explicit(ByteRange::new(0, 1023));
        let resp = BlobFetcher::new().fetch_raw(&ctx, &sas, &range).await.unwrap();

        assert_eq!(resp.body.as_ref(), b"payload");
        assert_eq!(resp.header("content-type"), Some("application/octet-stream"));

        let requests = requests.lock().unwrap();
        let req = &requests[0];
        assert_eq!(req.uri().to_string(), "https://blob/sas?sig=abc");
        assert_eq!(
            req.headers().get(X_MS_RANGE).unwrap(),
            &"bytes=0-1023"
        );
    }

    #[tokio::test]
    async fn test_entire_blob_has_no_range_header() {
        let sender = StaticHttpSend::new(http::StatusCode::OK);
        let requests = sender.requests.clone();
        let ctx = Context::new(sender);

        let sas = SasUrl::new("https://blob/sas?sig=abc");
        BlobFetcher::new()
            .fetch_raw(&ctx, &sas, &RangeSpec::Entire)
            .await
            .unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0].headers().get(X_MS_RANGE).is_none());
    }

    #[tokio::test]
    async fn test_no_credential_is_attached() {
        let sender = StaticHttpSend::new(http::StatusCode::OK);
        let requests = sender.requests.clone();
        let ctx = Context::new(sender);

        let sas = SasUrl::new("https://blob/sas?sig=abc");
        BlobFetcher::new()
            .fetch_raw(&ctx, &sas, &RangeSpec::Entire)
            .await
            .unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0]
            .headers()
            .get(http::header::AUTHORIZATION)
            .is_none());
    }

    #[tokio::test]
    async fn test_failure_status_is_a_transport_error() {
        let ctx = Context::new(StaticHttpSend::new(http::StatusCode::FORBIDDEN));

        let sas = SasUrl::new("https://blob/sas?sig=expired");
        let err = BlobFetcher::new()
            .fetch_raw(&ctx, &sas, &RangeSpec::Entire)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.response().unwrap().status, http::StatusCode::FORBIDDEN);
    }
}
