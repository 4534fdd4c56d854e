//! NFC error taxonomy.
//!
//! Each tag-transaction outcome the user can act on is a distinct
//! variant; none of them is retried automatically.

/// Errors from decoding text records or writing to a tag.
#[derive(Debug, thiserror::Error)]
pub enum NfcError {
    /// The record payload was empty, or shorter than its declared
    /// language code.
    #[error("text record payload is truncated")]
    TruncatedPayload,
    /// The text portion of the payload was not valid UTF-8.
    #[error("text record payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// The tag is write-protected.
    #[error("this tag is read-only")]
    TagReadOnly,
    /// The encoded message does not fit on the tag.
    #[error("message needs {needed} bytes but the tag holds {available}")]
    CapacityExceeded { needed: usize, available: usize },
    /// The tag supports neither structured records nor formatting.
    #[error("unsupported tag type")]
    UnsupportedTag,
    /// Communication with the tag failed mid-transaction.
    #[error("tag I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type NfcResult<T> = std::result::Result<T, NfcError>;
