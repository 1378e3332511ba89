use crate::range::ByteRange;

/// Options for [`crate::DiskAccessClient::get_blob_raw`].
///
/// Byte selection forms layer in a fixed order; see
/// [`crate::RangeSpec::resolve`]. Supplying none of them and not opting in
/// to `entire_image` is an error, never a silent whole-blob read.
#[derive(Debug, Clone, Default)]
pub struct AccessOptions {
    /// Explicit inclusive byte range. Wins over every other form.
    pub range: Option<ByteRange>,
    /// First byte to read, combined with `end_byte` or `length`.
    pub start_byte: Option<u64>,
    /// Last byte to read, inclusive.
    pub end_byte: Option<u64>,
    /// Number of bytes to read from `start_byte`.
    pub length: Option<u64>,
    /// Opt in to reading the whole blob without a range header.
    pub entire_image: bool,
    /// Resource group override for this call.
    pub resource_group: Option<String>,
    /// Grant duration override, in seconds.
    pub duration_secs: Option<u32>,
}

impl AccessOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit inclusive byte range.
    pub fn with_range(mut self, range: ByteRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the first byte to read.
    pub fn with_start_byte(mut self, start_byte: u64) -> Self {
        self.start_byte = Some(start_byte);
        self
    }

    /// Set the last byte to read, inclusive.
    pub fn with_end_byte(mut self, end_byte: u64) -> Self {
        self.end_byte = Some(end_byte);
        self
    }

    /// Set the number of bytes to read from `start_byte`.
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Opt in to reading the entire blob.
    pub fn with_entire_image(mut self) -> Self {
        self.entire_image = true;
        self
    }

    /// Override the resource group for this call.
    pub fn with_resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
        self
    }

    /// Override the grant duration in seconds.
    pub fn with_duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = Some(duration_secs);
        self
    }
}
