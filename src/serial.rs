//! Binary serialization and deserialization of parsed rule books.
//!
//! Loading a large rule corpus from its text form re-parses every rule. This
//! module stores the parsed [`RuleBook`](crate::RuleBook) instead: a 32-byte
//! fixed header followed by a bincode-encoded payload.
//!
//! ## Wire Format
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic bytes: b"TPMR"
//! 4       2     Format version (u16, little-endian)
//! 6       2     Engine version (u16, little-endian)
//! 8       4     Flags (u32, reserved)
//! 12      4     Payload length in bytes (u32, little-endian)
//! 16      16    BLAKE3 hash of the payload (truncated to 16 bytes)
//! 32..    var   Bincode-encoded payload
//! ```
//!
//! ## Versioning
//!
//! The format version in the header must match exactly. If it does not,
//! deserialization fails immediately with [`DeserializeError::IncompatibleVersion`].
//! The engine version is informational only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CompiledRule, Operator, Postfix, PostfixToken, RuleBook};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MAGIC: &[u8; 4] = b"TPMR";
const FORMAT_VERSION: u16 = 1;
const ENGINE_VERSION: u16 = 1;
const HEADER_SIZE: usize = 32;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when serializing a [`RuleBook`](crate::RuleBook) to bytes.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode rule book: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("I/O error during serialization: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when deserializing a [`RuleBook`](crate::RuleBook) from bytes.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("not a topicmatch binary: invalid magic bytes")]
    BadMagic,

    #[error("incompatible format version: blob is v{blob}, engine supports v{supported}")]
    IncompatibleVersion { blob: u16, supported: u16 },

    #[error("integrity check failed: BLAKE3 checksum mismatch")]
    ChecksumMismatch,

    #[error("payload length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: u32, actual: usize },

    #[error("failed to decode payload: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("I/O error during deserialization: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Serialized type hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct SerializedRuleBook {
    metadata: RuleBookMetadata,
    rules: Vec<SerializedRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RuleBookMetadata {
    rule_count: usize,
    token_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedRule {
    source: String,
    tokens: Vec<SerializedToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum SerializedToken {
    Term(String),
    And,
    Or,
    Not,
}

// ---------------------------------------------------------------------------
// Token conversion
// ---------------------------------------------------------------------------

fn serialize_token(token: &PostfixToken) -> SerializedToken {
    match token {
        PostfixToken::Operand(term) => SerializedToken::Term(term.clone()),
        PostfixToken::Operator(Operator::And) => SerializedToken::And,
        PostfixToken::Operator(Operator::Or) => SerializedToken::Or,
        PostfixToken::Operator(Operator::Not) => SerializedToken::Not,
    }
}

fn deserialize_token(token: SerializedToken) -> PostfixToken {
    match token {
        SerializedToken::Term(term) => PostfixToken::Operand(term),
        SerializedToken::And => PostfixToken::Operator(Operator::And),
        SerializedToken::Or => PostfixToken::Operator(Operator::Or),
        SerializedToken::Not => PostfixToken::Operator(Operator::Not),
    }
}

// ---------------------------------------------------------------------------
// RuleBook <-> SerializedRuleBook
// ---------------------------------------------------------------------------

fn book_to_serialized(book: &RuleBook) -> SerializedRuleBook {
    let rules: Vec<SerializedRule> = book
        .rules
        .iter()
        .map(|r| SerializedRule {
            source: r.source.clone(),
            tokens: r.postfix.iter().map(serialize_token).collect(),
        })
        .collect();

    SerializedRuleBook {
        metadata: RuleBookMetadata {
            rule_count: rules.len(),
            token_count: rules.iter().map(|r| r.tokens.len()).sum(),
        },
        rules,
    }
}

fn serialized_to_book(ser: SerializedRuleBook) -> Result<RuleBook, DeserializeError> {
    validate_metadata(&ser)?;

    let rules = ser
        .rules
        .into_iter()
        .enumerate()
        .map(|(i, sr)| {
            let postfix: Postfix = sr.tokens.into_iter().map(deserialize_token).collect();
            postfix
                .validate()
                .map_err(|e| DeserializeError::Validation(format!("rule {i}: {e}")))?;
            Ok(CompiledRule {
                source: sr.source,
                postfix,
            })
        })
        .collect::<Result<Vec<_>, DeserializeError>>()?;

    Ok(RuleBook { rules })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_metadata(ser: &SerializedRuleBook) -> Result<(), DeserializeError> {
    if ser.metadata.rule_count != ser.rules.len() {
        return Err(DeserializeError::Validation(format!(
            "metadata says {} rules but payload has {}",
            ser.metadata.rule_count,
            ser.rules.len()
        )));
    }
    let token_count: usize = ser.rules.iter().map(|r| r.tokens.len()).sum();
    if ser.metadata.token_count != token_count {
        return Err(DeserializeError::Validation(format!(
            "metadata says {} tokens but payload has {}",
            ser.metadata.token_count, token_count
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Header I/O
// ---------------------------------------------------------------------------

fn write_header(buf: &mut Vec<u8>, payload: &[u8]) {
    let hash = blake3::hash(payload);
    let hash_bytes = hash.as_bytes();

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&ENGINE_VERSION.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // flags (reserved)
    #[allow(clippy::cast_possible_truncation)] // payload will never exceed 4 GiB
    let payload_len = payload.len() as u32;
    buf.extend_from_slice(&payload_len.to_le_bytes());
    buf.extend_from_slice(&hash_bytes[..16]);
}

#[allow(clippy::cast_possible_truncation)] // HEADER_SIZE is 32, always fits in u32
fn read_header(bytes: &[u8]) -> Result<(u16, u32, [u8; 16]), DeserializeError> {
    if bytes.len() < HEADER_SIZE {
        return Err(DeserializeError::LengthMismatch {
            expected: HEADER_SIZE as u32,
            actual: bytes.len(),
        });
    }

    if &bytes[0..4] != MAGIC {
        return Err(DeserializeError::BadMagic);
    }

    let format_version = u16::from_le_bytes([bytes[4], bytes[5]]);
    // bytes[6..8] is engine_version, bytes[8..12] is flags
    let payload_len = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

    let mut hash = [0u8; 16];
    hash.copy_from_slice(&bytes[16..32]);

    Ok((format_version, payload_len, hash))
}

// ---------------------------------------------------------------------------
// Public encode/decode
// ---------------------------------------------------------------------------

pub(crate) fn encode(book: &RuleBook) -> Result<Vec<u8>, SerializeError> {
    let serialized = book_to_serialized(book);
    let payload = bincode::serde::encode_to_vec(&serialized, bincode::config::standard())?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    write_header(&mut buf, &payload);
    buf.extend_from_slice(&payload);
    Ok(buf)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<RuleBook, DeserializeError> {
    let (format_version, payload_len, stored_hash) = read_header(bytes)?;

    if format_version != FORMAT_VERSION {
        return Err(DeserializeError::IncompatibleVersion {
            blob: format_version,
            supported: FORMAT_VERSION,
        });
    }

    let payload_end = HEADER_SIZE + payload_len as usize;
    if bytes.len() < payload_end {
        return Err(DeserializeError::LengthMismatch {
            expected: payload_len,
            actual: bytes.len() - HEADER_SIZE,
        });
    }
    let payload = &bytes[HEADER_SIZE..payload_end];

    let computed_hash = blake3::hash(payload);
    if computed_hash.as_bytes()[..16] != stored_hash {
        return Err(DeserializeError::ChecksumMismatch);
    }

    let (serialized, _): (SerializedRuleBook, usize) =
        bincode::serde::decode_from_slice(payload, bincode::config::standard())?;

    let book = serialized_to_book(serialized)?;
    tracing::debug!(rules = book.len(), "decoded rule book");
    Ok(book)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_tokens_round_trip() {
        for op in [Operator::And, Operator::Or, Operator::Not] {
            let token = PostfixToken::Operator(op);
            assert_eq!(deserialize_token(serialize_token(&token)), token);
        }
    }

    #[test]
    fn header_round_trip() {
        let payload = b"test payload data";
        let mut buf = Vec::new();
        write_header(&mut buf, payload);
        assert_eq!(buf.len(), HEADER_SIZE);

        let (format_version, payload_len, hash) = read_header(&buf).unwrap();
        assert_eq!(format_version, FORMAT_VERSION);
        assert_eq!(payload_len as usize, payload.len());

        let expected_hash = blake3::hash(payload);
        assert_eq!(&hash, &expected_hash.as_bytes()[..16]);
    }

    #[test]
    fn header_bad_magic() {
        let mut buf = vec![0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(b"BAAD");
        assert!(matches!(read_header(&buf), Err(DeserializeError::BadMagic)));
    }

    #[test]
    fn header_too_short() {
        let buf = vec![0u8; 10];
        assert!(matches!(
            read_header(&buf),
            Err(DeserializeError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn unbalanced_rule_rejected() {
        let ser = SerializedRuleBook {
            metadata: RuleBookMetadata {
                rule_count: 1,
                token_count: 2,
            },
            rules: vec![SerializedRule {
                source: "a AND".to_owned(),
                tokens: vec![SerializedToken::Term("a".to_owned()), SerializedToken::And],
            }],
        };
        assert!(matches!(
            serialized_to_book(ser),
            Err(DeserializeError::Validation(_))
        ));
    }

    #[test]
    fn metadata_mismatch_rejected() {
        let ser = SerializedRuleBook {
            metadata: RuleBookMetadata {
                rule_count: 2,
                token_count: 1,
            },
            rules: vec![SerializedRule {
                source: "a".to_owned(),
                tokens: vec![SerializedToken::Term("a".to_owned())],
            }],
        };
        assert!(matches!(
            serialized_to_book(ser),
            Err(DeserializeError::Validation(_))
        ));
    }
}
