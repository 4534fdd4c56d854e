//! NDEF Text-record codec and minimal message framing.
//!
//! The on-tag payload of a Text record is
//! `[status byte] ++ [language code] ++ [UTF-8 text]`, where the low six
//! bits of the status byte give the language-code length and the top two
//! bits are reserved. Encoding always writes the reserved bits as zero
//! and the fixed `"en"` language code; decoding masks them off without
//! validating them.

use crate::error::{NfcError, NfcResult};

/// Fixed language code written into every encoded record.
pub const LANGUAGE_CODE: &str = "en";

/// Mask selecting the language-code length from the status byte.
const LANG_LEN_MASK: u8 = 0x3F;

// Record-header flag bits (NDEF short/first/last record layout).
const FLAG_MESSAGE_BEGIN: u8 = 0x80;
const FLAG_MESSAGE_END: u8 = 0x40;
const FLAG_SHORT_RECORD: u8 = 0x10;
const TNF_WELL_KNOWN: u8 = 0x01;

/// Well-known record type for Text.
const RTD_TEXT: u8 = b'T';

/// Encodes a plain-text string as a Text-record payload.
pub fn encode_text(text: &str) -> Vec<u8> {
    let lang = LANGUAGE_CODE.as_bytes();
    let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
    // Reserved high bits set to zero; low bits carry the language length.
    payload.push(lang.len() as u8);
    payload.extend_from_slice(lang);
    payload.extend_from_slice(text.as_bytes());
    payload
}

/// Decodes the text out of a Text-record payload.
///
/// The two reserved high bits of the status byte are ignored, so
/// payloads written by encoders that set them decode identically.
///
/// # Errors
///
/// Returns [`NfcError::TruncatedPayload`] if the payload is empty or the
/// declared language code runs past its end, and
/// [`NfcError::InvalidUtf8`] if the text portion is not UTF-8.
pub fn decode_text(payload: &[u8]) -> NfcResult<String> {
    let status = *payload.first().ok_or(NfcError::TruncatedPayload)?;
    let lang_len = (status & LANG_LEN_MASK) as usize;
    if payload.len() < 1 + lang_len {
        return Err(NfcError::TruncatedPayload);
    }
    Ok(String::from_utf8(payload[1 + lang_len..].to_vec())?)
}

/// A single NDEF record as read from or written to a tag.
///
/// Only the pieces this application needs are modelled: a well-known
/// Text record carrying a payload, with no record ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    payload: Vec<u8>,
}

impl NdefRecord {
    /// Builds a Text record for the given string.
    pub fn text(text: &str) -> Self {
        Self {
            payload: encode_text(text),
        }
    }

    /// Wraps a raw payload as delivered by a tag-discovery event.
    pub fn from_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Serialises the record with its header, as stored on the tag.
    ///
    /// Uses the short-record form when the payload fits in one length
    /// byte, the long form otherwise.
    fn to_bytes(&self, first: bool, last: bool) -> Vec<u8> {
        let mut flags = TNF_WELL_KNOWN;
        if first {
            flags |= FLAG_MESSAGE_BEGIN;
        }
        if last {
            flags |= FLAG_MESSAGE_END;
        }
        let short = self.payload.len() < 256;
        if short {
            flags |= FLAG_SHORT_RECORD;
        }

        let mut bytes = Vec::with_capacity(4 + 1 + self.payload.len());
        bytes.push(flags);
        bytes.push(1); // type length, "T"
        if short {
            bytes.push(self.payload.len() as u8);
        } else {
            bytes.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        }
        bytes.push(RTD_TEXT);
        bytes.extend_from_slice(&self.payload);
        bytes
    }
}

/// An ordered sequence of records forming one on-tag message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    /// Builds the single-record message used for patient-code tags.
    pub fn text_message(text: &str) -> Self {
        Self {
            records: vec![NdefRecord::text(text)],
        }
    }

    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    /// Serialises the whole message as stored on the tag.
    pub fn to_bytes(&self) -> Vec<u8> {
        let last_index = self.records.len().saturating_sub(1);
        self.records
            .iter()
            .enumerate()
            .flat_map(|(i, r)| r.to_bytes(i == 0, i == last_index))
            .collect()
    }

    /// Size of the serialised message, used for tag-capacity checks.
    pub fn byte_len(&self) -> usize {
        self.to_bytes().len()
    }
}

/// Extracts the patient code from a tag-discovery event.
///
/// Only the first record of the first message is considered; anything
/// after it is ignored. Returns `Ok(None)` when the event carried no
/// records at all.
///
/// # Errors
///
/// Propagates decode failures of the first record.
pub fn read_code(messages: &[NdefMessage]) -> NfcResult<Option<String>> {
    let record = match messages.first().and_then(|m| m.records().first()) {
        Some(record) => record,
        None => return Ok(None),
    };
    decode_text(record.payload()).map(Some)
}
