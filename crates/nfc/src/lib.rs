//! # clinipass NFC
//!
//! NDEF Text-record handling for patient-code tags: payload
//! encode/decode, minimal message framing (needed for tag-capacity
//! checks), and the tag-write transaction.
//!
//! Hardware access sits behind the capability traits in [`tag`], so the
//! whole crate is exercised without a reader.

pub mod error;
pub mod record;
pub mod tag;

pub use error::{NfcError, NfcResult};
pub use record::{decode_text, encode_text, read_code, NdefMessage, NdefRecord};
pub use tag::{write_to_tag, FormattableTag, StructuredTag, TagCapability, WriteOutcome};
