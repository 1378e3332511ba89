use anyhow::Result;
use blobgrant_azure_disk::{AccessOptions, Config, DiskAccessClient};
use blobgrant_core::{Context, TransportConfig};
use blobgrant_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Build the transport; proxy and TLS options are fixed at this point
    let transport = ReqwestHttpSend::from_config(&TransportConfig::default())?;
    let ctx = Context::new(transport);

    // Configure from environment:
    // AZURE_SUBSCRIPTION_ID, AZURE_RESOURCE_GROUP, AZURE_MANAGEMENT_ENDPOINT
    let config = Config::default().from_env(&ctx);

    if config.subscription_id.is_none() {
        println!("AZURE_SUBSCRIPTION_ID is not set, nothing to read");
        println!("Set AZURE_SUBSCRIPTION_ID and AZURE_RESOURCE_GROUP to run this example");
        return Ok(());
    }

    let client = DiskAccessClient::new(ctx, config)?;

    let disk_name = std::env::var("AZURE_DISK_NAME").unwrap_or_else(|_| "my-disk".to_string());

    // Example 1: read the first KiB of the disk blob
    println!("Example 1: ranged read");
    let opts = AccessOptions::new().with_start_byte(0).with_end_byte(1023);
    match client.get_blob_raw(&disk_name, &opts).await {
        Ok(resp) => {
            println!("read {} bytes", resp.body.len());
            if let Some(blob_type) = resp.header("x-ms-blob-type") {
                println!("blob type: {blob_type}");
            }
        }
        Err(err) => println!("ranged read failed: {err}"),
    }

    // Example 2: drop the outstanding grant
    println!("Example 2: revoke access");
    match client.revoke_access(&disk_name, None).await {
        Ok(()) => println!("access revoked"),
        Err(err) => println!("revoke failed: {err}"),
    }

    Ok(())
}
