use crate::AccessOptions;
use blobgrant_core::{Error, Result};

/// An inclusive byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte of the span.
    pub start: u64,
    /// Last byte of the span, inclusive.
    pub end: u64,
}

impl ByteRange {
    /// Create a span covering `start..=end`.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Render as an HTTP byte range header value.
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

/// A resolved byte selection: a contiguous span or the whole blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    /// A contiguous inclusive span, sent as a range header.
    Explicit(ByteRange),
    /// The entire blob, fetched without a range header.
    Entire,
}

impl RangeSpec {
    /// Resolve caller options into a canonical byte selection.
    ///
    /// Input forms are layered, first match wins:
    /// 1. an explicit inclusive range,
    /// 2. start byte + end byte,
    /// 3. start byte + length,
    /// 4. the entire-image opt-in.
    ///
    /// None of the four matching is an error. Ordering of caller-supplied
    /// bounds is not checked; a reversed pair renders as given and the
    /// remote service arbitrates.
    pub fn resolve(opts: &AccessOptions) -> Result<Self> {
        if let Some(range) = opts.range {
            return Ok(RangeSpec::Explicit(range));
        }

        if let (Some(start), Some(end)) = (opts.start_byte, opts.end_byte) {
            return Ok(RangeSpec::Explicit(ByteRange::new(start, end)));
        }

        if let (Some(start), Some(length)) = (opts.start_byte, opts.length) {
            // An inclusive end cannot be derived from an empty span.
            if length == 0 {
                return Err(Error::invalid_argument("length must be at least one byte"));
            }
            return Ok(RangeSpec::Explicit(ByteRange::new(start, start + length - 1)));
        }

        if opts.entire_image {
            return Ok(RangeSpec::Entire);
        }

        Err(Error::invalid_argument(
            "must specify byte range or entire-image flag",
        ))
    }

    /// Header value for the signed fetch; absent for the whole blob.
    pub fn header_value(&self) -> Option<String> {
        match self {
            RangeSpec::Explicit(range) => Some(range.header_value()),
            RangeSpec::Entire => None,
        }
    }
}
