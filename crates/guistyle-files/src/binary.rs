//! Binary style files (`.rgs`).
//!
//! Little-endian layout:
//!
//! | Offset | Size | Field                            |
//! |--------|------|----------------------------------|
//! | 0      | 4    | signature `"rGS "`               |
//! | 4      | 2    | version (`200`)                  |
//! | 6      | 2    | reserved                         |
//! | 8      | 4    | record count                     |
//! | 12     | 8×n  | records: `u16` control, `u16` property, `u32` value |
//!
//! Bytes after the last record (embedded font data in toolkit-generated
//! files) are ignored.

use guistyle::{StyleProperty, StyleSheet};

use crate::error::{Result, StyleFileError};

/// Leading bytes of every binary style file.
pub const SIGNATURE: &[u8; 4] = b"rGS ";

/// Version written by [`write_binary`].
pub const VERSION: u16 = 200;

const HEADER_LEN: usize = 12;
const RECORD_LEN: usize = 8;

/// Returns true if `bytes` starts with the binary signature.
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.starts_with(SIGNATURE)
}

/// Parses binary style data into a sheet named `name`.
pub fn parse_binary(name: &str, bytes: &[u8]) -> Result<StyleSheet> {
    if !is_binary(bytes) {
        return Err(StyleFileError::InvalidSignature);
    }
    if bytes.len() < HEADER_LEN {
        return Err(StyleFileError::Truncated {
            expected: HEADER_LEN,
            found: bytes.len(),
        });
    }

    let version = read_u16(bytes, 4);
    if version != VERSION {
        log::debug!("style '{}': binary version {}, reading as {}", name, version, VERSION);
    }

    let count = read_u32(bytes, 8) as usize;
    let expected = count
        .checked_mul(RECORD_LEN)
        .and_then(|len| len.checked_add(HEADER_LEN))
        .unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(StyleFileError::Truncated {
            expected,
            found: bytes.len(),
        });
    }

    let records = bytes[HEADER_LEN..expected]
        .chunks_exact(RECORD_LEN)
        .map(|chunk| {
            StyleProperty::new(read_u16(chunk, 0), read_u16(chunk, 2), read_u32(chunk, 4))
        })
        .collect();

    if bytes.len() > expected {
        log::debug!(
            "style '{}': ignoring {} trailing bytes",
            name,
            bytes.len() - expected
        );
    }

    Ok(StyleSheet::from_records(name.to_string(), records))
}

/// Encodes a sheet as binary style data, records in order.
pub fn write_binary(sheet: &StyleSheet) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + sheet.len() * RECORD_LEN);
    out.extend_from_slice(SIGNATURE);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(sheet.len() as u32).to_le_bytes());

    for record in sheet {
        out.extend_from_slice(&record.control.0.to_le_bytes());
        out.extend_from_slice(&record.property.0.to_le_bytes());
        out.extend_from_slice(&record.value.to_le_bytes());
    }
    out
}

// callers check lengths first
fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
