use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is used to send http requests during the access flow.
///
/// The management-plane calls and the final signed fetch all go through this
/// trait. Implementations own everything transport-level: connection pooling,
/// proxy, TLS, and whatever management-API authentication the deployment
/// needs. This trait is designed for the disk access client, please don't use
/// it as a general http client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}
