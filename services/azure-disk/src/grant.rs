use crate::constants::{AZURE_ASYNCOPERATION, LOCATION};
use crate::urls::UrlBuilder;
use blobgrant_core::utils::first_header;
use blobgrant_core::{Context, Error, Result};
use bytes::Bytes;
use log::debug;
use serde::Serialize;

/// Handle to a server-side long-running operation.
///
/// Only constructed when the grant response carried a poll URL; a missing
/// URL fails at the requester, so the poller never sees an empty handle.
#[derive(Clone)]
pub struct OperationHandle {
    poll_url: String,
}

impl OperationHandle {
    /// URL to poll for the operation result.
    pub fn poll_url(&self) -> &str {
        &self.poll_url
    }

    #[cfg(test)]
    pub(crate) fn for_tests(poll_url: impl Into<String>) -> Self {
        Self {
            poll_url: poll_url.into(),
        }
    }
}

impl std::fmt::Debug for OperationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationHandle")
            .field(
                "poll_url",
                &blobgrant_core::utils::Redact::from(&self.poll_url),
            )
            .finish()
    }
}

#[derive(Serialize)]
struct GrantAccessData {
    access: &'static str,
    #[serde(rename = "durationInSeconds")]
    duration_in_seconds: u32,
}

/// Requests and revokes time-limited read grants for a disk.
#[derive(Debug)]
pub struct AccessRequester {
    urls: UrlBuilder,
}

impl AccessRequester {
    /// Create a requester building URLs with the given builder.
    pub fn new(urls: UrlBuilder) -> Self {
        Self { urls }
    }

    /// POST the begin-access action and extract the operation handle.
    ///
    /// The response headers are checked for an async operation URL,
    /// `azure-asyncoperation` first, then `location`. A response carrying
    /// neither fails here with the status code and body attached; an error
    /// status naturally lands on that path since it carries neither header.
    pub async fn request_access(
        &self,
        ctx: &Context,
        resource_group: &str,
        disk_name: &str,
        duration_secs: u32,
    ) -> Result<OperationHandle> {
        let url = self
            .urls
            .disk_action_url(resource_group, disk_name, "beginGetAccess");
        debug!("requesting read access for disk {disk_name} in {resource_group}");

        let body = serde_json::to_vec(&GrantAccessData {
            access: "read",
            duration_in_seconds: duration_secs,
        })
        .map_err(|e| Error::unexpected("failed to serialize grant request").with_source(e))?;

        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri(&url)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))
            .map_err(|e| Error::unexpected("failed to build grant request").with_source(e))?;

        let resp = ctx.http_send(req).await?;

        match first_header(resp.headers(), &[AZURE_ASYNCOPERATION, LOCATION]) {
            Some(poll_url) => Ok(OperationHandle {
                poll_url: poll_url.to_string(),
            }),
            None => {
                let (parts, body) = resp.into_parts();
                Err(Error::operation_not_found(format!(
                    "no operations URL for {disk_name}/{resource_group}"
                ))
                .with_response(parts.status, String::from_utf8_lossy(&body)))
            }
        }
    }

    /// POST the end-access action, revoking an outstanding grant.
    ///
    /// Succeeds on any 2xx; completion of the server-side revocation is not
    /// awaited.
    pub async fn revoke_access(
        &self,
        ctx: &Context,
        resource_group: &str,
        disk_name: &str,
    ) -> Result<()> {
        let url = self
            .urls
            .disk_action_url(resource_group, disk_name, "endGetAccess");
        debug!("revoking read access for disk {disk_name} in {resource_group}");

        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri(&url)
            .body(Bytes::new())
            .map_err(|e| Error::unexpected("failed to build revoke request").with_source(e))?;

        let resp = ctx.http_send(req).await?;
        if !resp.status().is_success() {
            let (parts, body) = resp.into_parts();
            return Err(Error::transport(format!(
                "revoke access returned {} for {disk_name}/{resource_group}",
                parts.status
            ))
            .with_response(parts.status, String::from_utf8_lossy(&body)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobgrant_core::{ErrorKind, HttpSend};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    /// Replies with a fixed response, recording every request.
    #[derive(Debug)]
    struct StaticHttpSend {
        status: http::StatusCode,
        headers: Vec<(&'static str, &'static str)>,
        body: &'static str,
        requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    }

    impl StaticHttpSend {
        fn new(status: http::StatusCode, headers: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                status,
                headers,
                body: "",
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl HttpSend for StaticHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            self.requests.lock().unwrap().push(req);

            let mut builder = http::Response::builder().status(self.status);
            for (name, value) in &self.headers {
                builder = builder.header(*name, *value);
            }
            Ok(builder.body(Bytes::from_static(self.body.as_bytes())).unwrap())
        }
    }

    fn requester() -> AccessRequester {
        AccessRequester::new(UrlBuilder::new(
            "https://management.azure.com",
            "sub-1",
            "2023-04-02",
        ))
    }

    #[tokio::test]
    async fn test_request_access_posts_grant_body() {
        let sender = StaticHttpSend::new(
            http::StatusCode::ACCEPTED,
            vec![("Azure-AsyncOperation", "https://op/123")],
        );
        let requests = sender.requests.clone();
        let ctx = Context::new(sender);

        requester()
            .request_access(&ctx, "rg-1", "disk-1", 3600)
            .await
            .unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(
            req.uri().to_string(),
            "https://management.azure.com/subscriptions/sub-1/resourceGroups/rg-1\
             /providers/Microsoft.Compute/disks/disk-1/beginGetAccess?api-version=2023-04-02"
        );
        let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"access": "read", "durationInSeconds": 3600})
        );
    }

    #[tokio::test]
    async fn test_async_operation_header_wins_over_location() {
        let sender = StaticHttpSend::new(
            http::StatusCode::ACCEPTED,
            vec![
                ("Location", "https://op/456"),
                ("Azure-AsyncOperation", "https://op/123"),
            ],
        );
        let ctx = Context::new(sender);

        let handle = requester()
            .request_access(&ctx, "rg-1", "disk-1", 60)
            .await
            .unwrap();
        assert_eq!(handle.poll_url(), "https://op/123");
    }

    #[tokio::test]
    async fn test_location_header_is_the_fallback() {
        let sender = StaticHttpSend::new(
            http::StatusCode::ACCEPTED,
            vec![("Location", "https://op/456")],
        );
        let ctx = Context::new(sender);

        let handle = requester()
            .request_access(&ctx, "rg-1", "disk-1", 60)
            .await
            .unwrap();
        assert_eq!(handle.poll_url(), "https://op/456");
    }

    #[tokio::test]
    async fn test_no_operation_headers_is_terminal() {
        let mut sender = StaticHttpSend::new(http::StatusCode::NOT_FOUND, vec![]);
        sender.body = r#"{"error":{"code":"NotFound"}}"#;
        let ctx = Context::new(sender);

        let err = requester()
            .request_access(&ctx, "rg-1", "disk-1", 60)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OperationNotFound);

        let resp = err.response().expect("diagnostics must be attached");
        assert_eq!(resp.status, http::StatusCode::NOT_FOUND);
        assert_eq!(resp.body, r#"{"error":{"code":"NotFound"}}"#);
    }

    #[tokio::test]
    async fn test_revoke_access_posts_end_action() {
        let sender = StaticHttpSend::new(http::StatusCode::ACCEPTED, vec![]);
        let requests = sender.requests.clone();
        let ctx = Context::new(sender);

        requester().revoke_access(&ctx, "rg-1", "disk-1").await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].uri().to_string().contains("/endGetAccess?"));
    }

    #[tokio::test]
    async fn test_revoke_access_surfaces_failure_status() {
        let sender = StaticHttpSend::new(http::StatusCode::CONFLICT, vec![]);
        let ctx = Context::new(sender);

        let err = requester()
            .revoke_access(&ctx, "rg-1", "disk-1")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(
            err.response().unwrap().status,
            http::StatusCode::CONFLICT
        );
    }
}
