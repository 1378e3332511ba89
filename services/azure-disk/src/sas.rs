use blobgrant_core::utils::Redact;
use std::fmt::{Debug, Formatter};

/// A pre-signed, self-authorizing blob URL.
///
/// The signature is sensitive to the exact byte representation, so the URL
/// is carried verbatim and never re-encoded. Debug output is redacted; the
/// embedded signature must not land in logs.
#[derive(Clone)]
pub struct SasUrl {
    url: String,
}

impl SasUrl {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The exact URL to fetch.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Debug for SasUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SasUrl")
            .field(&Redact::from(&self.url))
            .finish()
    }
}
