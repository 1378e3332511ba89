use crate::constants::*;
use blobgrant_core::{Context, Error, Result};

/// Config carries all the configuration for the disk access service.
#[derive(Clone, Debug, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// Azure subscription the disks live under. Required.
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_SUBSCRIPTION_ID`
    pub subscription_id: Option<String>,
    /// Default resource group for calls that don't override it.
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_RESOURCE_GROUP`
    pub resource_group: Option<String>,
    /// Management-plane endpoint.
    ///
    /// If not specified, `https://management.azure.com` will be used.
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_MANAGEMENT_ENDPOINT`
    pub endpoint: Option<String>,
    /// Compute API version for disk actions.
    pub api_version: Option<String>,
    /// Default duration of requested access grants, in seconds.
    ///
    /// If not specified, 3600 will be used.
    pub access_duration_secs: Option<u32>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AZURE_SUBSCRIPTION_ID) {
            self.subscription_id = Some(v);
        }

        if let Some(v) = ctx.env_var(AZURE_RESOURCE_GROUP) {
            self.resource_group = Some(v);
        }

        if let Some(v) = ctx.env_var(AZURE_MANAGEMENT_ENDPOINT) {
            self.endpoint = Some(v);
        }

        self
    }

    /// Resolve the resource group for a call.
    ///
    /// A per-call override wins over the configured default; empty strings
    /// count as absent. Runs before any network call is made.
    pub(crate) fn require_resource_group<'a>(
        &'a self,
        explicit: Option<&'a str>,
    ) -> Result<&'a str> {
        explicit
            .or(self.resource_group.as_deref())
            .filter(|rg| !rg.is_empty())
            .ok_or_else(|| {
                Error::missing_resource_group(
                    "resource group is required, set it in config or per call",
                )
            })
    }
}
