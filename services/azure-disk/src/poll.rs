use crate::grant::OperationHandle;
use crate::sas::SasUrl;
use blobgrant_core::{Context, Error, Result};
use bytes::Bytes;
use log::debug;
use serde_json::Value;

/// Retrieves the result of an access-grant operation.
#[derive(Debug, Default)]
pub struct OperationPoller;

impl OperationPoller {
    /// Create a new poller.
    pub fn new() -> Self {
        Self
    }

    /// GET the operation once and extract the signed access URL.
    ///
    /// The grant operation is expected to be resolvable by the time this
    /// runs, so this is a single fetch with no wait loop; callers wanting
    /// resilience retry around the whole access flow.
    ///
    /// The URL sits at `properties.output.accessSas` in the operation body.
    /// Any absent level of that path reads as an absent leaf, which is
    /// terminal here with the status code and body attached.
    pub async fn fetch_signed_url(
        &self,
        ctx: &Context,
        handle: &OperationHandle,
        resource_group: &str,
        disk_name: &str,
    ) -> Result<SasUrl> {
        let req = http::Request::builder()
            .method(http::Method::GET)
            .uri(handle.poll_url())
            .body(Bytes::new())
            .map_err(|e| Error::unexpected("failed to build poll request").with_source(e))?;

        let resp = ctx.http_send_as_string(req).await?;
        let (parts, body) = resp.into_parts();

        let doc: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        match doc.pointer("/properties/output/accessSas").and_then(Value::as_str) {
            Some(url) => {
                debug!("operation for disk {disk_name} returned a signed url");
                Ok(SasUrl::new(url))
            }
            None => Err(Error::signed_url_not_found(format!(
                "no SAS URL for {disk_name}/{resource_group}"
            ))
            .with_response(parts.status, body)),
        }
    }
}
