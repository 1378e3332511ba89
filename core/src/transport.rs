/// Minimum TLS protocol version for the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsVersion {
    /// TLS 1.2
    Tls12,
    /// TLS 1.3
    Tls13,
}

/// Transport-level options shared by every call made through a [`crate::Context`].
///
/// The config is consumed once when the HTTP sender is built and must not be
/// mutated afterwards; in-flight calls never observe a change.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Proxy URL applied to all outgoing requests.
    pub proxy_url: Option<String>,
    /// Minimum accepted TLS protocol version.
    pub min_tls_version: Option<TlsVersion>,
    /// Whether to verify server certificates. Defaults to `true`.
    pub verify_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            min_tls_version: None,
            verify_certs: true,
        }
    }
}

impl TransportConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the proxy URL.
    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Set the minimum TLS protocol version.
    pub fn with_min_tls_version(mut self, version: TlsVersion) -> Self {
        self.min_tls_version = Some(version);
        self
    }

    /// Toggle server certificate verification.
    pub fn with_verify_certs(mut self, verify: bool) -> Self {
        self.verify_certs = verify;
        self
    }
}
