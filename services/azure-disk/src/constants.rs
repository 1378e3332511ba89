// Headers checked for the async operation URL, in priority order.
pub const AZURE_ASYNCOPERATION: &str = "azure-asyncoperation";
pub const LOCATION: &str = "location";

// Byte range header on the signed blob fetch.
pub const X_MS_RANGE: &str = "x-ms-range";

pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";
pub const DISK_API_VERSION: &str = "2023-04-02";
pub const DEFAULT_ACCESS_DURATION_SECS: u32 = 3600;

pub const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const AZURE_RESOURCE_GROUP: &str = "AZURE_RESOURCE_GROUP";
pub const AZURE_MANAGEMENT_ENDPOINT: &str = "AZURE_MANAGEMENT_ENDPOINT";
