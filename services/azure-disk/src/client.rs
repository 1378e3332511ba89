use crate::constants::{DEFAULT_ACCESS_DURATION_SECS, DEFAULT_MANAGEMENT_ENDPOINT, DISK_API_VERSION};
use crate::fetch::{BlobFetcher, RawBlobResponse};
use crate::grant::AccessRequester;
use crate::poll::OperationPoller;
use crate::range::RangeSpec;
use crate::urls::UrlBuilder;
use crate::{AccessOptions, Config};
use blobgrant_core::{Context, Error, Result};
use log::debug;

/// Client for ranged, SAS-authorized reads of managed disk blobs.
///
/// Every call runs the full grant, poll, fetch sequence; nothing is cached
/// between calls. The client holds no mutable state, so sharing one across
/// concurrent callers needs no coordination.
#[derive(Debug)]
pub struct DiskAccessClient {
    ctx: Context,
    config: Config,
    requester: AccessRequester,
    poller: OperationPoller,
    fetcher: BlobFetcher,
}

impl DiskAccessClient {
    /// Create a new client.
    ///
    /// `config.subscription_id` is required; endpoint and API version fall
    /// back to the public management endpoint and the current disk API.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let subscription_id = config
            .subscription_id
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::invalid_argument("subscription_id is required"))?;

        let urls = UrlBuilder::new(
            config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_MANAGEMENT_ENDPOINT.to_string()),
            subscription_id,
            config
                .api_version
                .clone()
                .unwrap_or_else(|| DISK_API_VERSION.to_string()),
        );

        Ok(Self {
            ctx,
            config,
            requester: AccessRequester::new(urls),
            poller: OperationPoller::new(),
            fetcher: BlobFetcher::new(),
        })
    }

    /// Read raw bytes of a disk's underlying blob.
    ///
    /// Steps run strictly in order and the first failure wins, surfaced
    /// unchanged: validate the resource group, resolve the byte selection,
    /// request a read grant, retrieve the signed URL, fetch the bytes.
    pub async fn get_blob_raw(
        &self,
        disk_name: &str,
        opts: &AccessOptions,
    ) -> Result<RawBlobResponse> {
        let resource_group = self
            .config
            .require_resource_group(opts.resource_group.as_deref())?;
        let range = RangeSpec::resolve(opts)?;
        debug!("resolved byte selection {range:?} for disk {disk_name}");

        let duration_secs = opts
            .duration_secs
            .or(self.config.access_duration_secs)
            .unwrap_or(DEFAULT_ACCESS_DURATION_SECS);

        let handle = self
            .requester
            .request_access(&self.ctx, resource_group, disk_name, duration_secs)
            .await?;
        let sas = self
            .poller
            .fetch_signed_url(&self.ctx, &handle, resource_group, disk_name)
            .await?;
        self.fetcher.fetch_raw(&self.ctx, &sas, &range).await
    }

    /// Revoke an outstanding read grant for a disk.
    pub async fn revoke_access(
        &self,
        disk_name: &str,
        resource_group: Option<&str>,
    ) -> Result<()> {
        let resource_group = self.config.require_resource_group(resource_group)?;
        self.requester
            .revoke_access(&self.ctx, resource_group, disk_name)
            .await
    }
}
