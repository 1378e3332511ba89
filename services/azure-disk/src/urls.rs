/// Builds management-plane URLs for disk actions.
///
/// Scoped to one subscription and API version at construction; per-call
/// pieces (resource group, disk name, action) are supplied at build time.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    endpoint: String,
    subscription_id: String,
    api_version: String,
}

impl UrlBuilder {
    /// Create a builder for the given endpoint, subscription and API version.
    pub fn new(
        endpoint: impl Into<String>,
        subscription_id: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            subscription_id: subscription_id.into(),
            api_version: api_version.into(),
        }
    }

    /// URL for an action on a managed disk, e.g. `beginGetAccess`.
    pub fn disk_action_url(&self, resource_group: &str, disk_name: &str, action: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/disks/{}/{}?api-version={}",
            self.endpoint, self.subscription_id, resource_group, disk_name, action, self.api_version
        )
    }
}
