//! Tag-write transaction over a hardware capability abstraction.
//!
//! The reader hardware is reached through one of two traits depending on
//! what the presented tag supports: [`StructuredTag`] for tags already
//! carrying structured records, [`FormattableTag`] for blank tags that
//! can be formatted with an initial message. A tag offering neither is
//! unsupported. The transaction itself never panics; every I/O fault is
//! reported as [`NfcError::Io`] and nothing is retried.

use crate::error::{NfcError, NfcResult};
use crate::record::NdefMessage;

/// A tag that already supports structured records.
pub trait StructuredTag {
    fn connect(&mut self) -> std::io::Result<()>;
    /// Whether the tag accepts writes at all.
    fn is_writable(&self) -> bool;
    /// Usable capacity in bytes.
    fn max_size(&self) -> usize;
    fn write_message(&mut self, message: &[u8]) -> std::io::Result<()>;
    fn close(&mut self) -> std::io::Result<()>;
}

/// A blank tag that can be formatted with an initial message.
pub trait FormattableTag {
    fn connect(&mut self) -> std::io::Result<()>;
    fn format(&mut self, message: &[u8]) -> std::io::Result<()>;
    fn close(&mut self) -> std::io::Result<()>;
}

/// What the presented tag is capable of.
pub enum TagCapability<'a> {
    Structured(&'a mut dyn StructuredTag),
    Formattable(&'a mut dyn FormattableTag),
    Unsupported,
}

/// How a successful write completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Written to an already-structured tag.
    Written,
    /// The tag was formatted with the message.
    Formatted,
}

/// Writes a message to a tag, choosing the path the tag supports.
///
/// Structured path: connect, verify write permission, verify capacity,
/// write, disconnect. Formattable path: connect, format with the
/// message, disconnect.
///
/// # Errors
///
/// - [`NfcError::TagReadOnly`] if the tag is write-protected.
/// - [`NfcError::CapacityExceeded`] if the encoded message does not fit.
/// - [`NfcError::UnsupportedTag`] if the tag offers neither capability.
/// - [`NfcError::Io`] for any communication fault during the
///   transaction.
pub fn write_to_tag(capability: TagCapability<'_>, message: &NdefMessage) -> NfcResult<WriteOutcome> {
    let bytes = message.to_bytes();
    match capability {
        TagCapability::Structured(tag) => {
            tag.connect()?;
            if !tag.is_writable() {
                let _ = tag.close();
                return Err(NfcError::TagReadOnly);
            }
            let available = tag.max_size();
            if available < bytes.len() {
                let _ = tag.close();
                return Err(NfcError::CapacityExceeded {
                    needed: bytes.len(),
                    available,
                });
            }
            if let Err(e) = tag.write_message(&bytes) {
                let _ = tag.close();
                return Err(NfcError::Io(e));
            }
            tag.close()?;
            tracing::info!(bytes = bytes.len(), "wrote message to tag");
            Ok(WriteOutcome::Written)
        }
        TagCapability::Formattable(tag) => {
            tag.connect()?;
            if let Err(e) = tag.format(&bytes) {
                let _ = tag.close();
                return Err(NfcError::Io(e));
            }
            tag.close()?;
            tracing::info!(bytes = bytes.len(), "formatted tag with message");
            Ok(WriteOutcome::Formatted)
        }
        TagCapability::Unsupported => Err(NfcError::UnsupportedTag),
    }
}
