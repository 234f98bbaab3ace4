// libtapcard/src/protocol/tlv.rs

use log::{debug, trace, warn};

use crate::protocol::parser::{length_at, slice_at, tag_width_at};
use crate::types::HexString;
use crate::{Error, Result};

/// One decoded tag-length-value record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvRecord {
    tag: String,
    length: usize,
    value: HexString,
}

impl TlvRecord {
    /// Lowercase hex tag, one or more bytes wide.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Declared value length in bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Value span of exactly `length` bytes.
    pub fn value(&self) -> &HexString {
        &self.value
    }
}

/// Decode the record starting at `offset` and return it with the offset of
/// the next record.
pub fn read_record_at(hex: &str, offset: usize) -> Result<(TlvRecord, usize)> {
    let tag_width = tag_width_at(hex, offset)?;
    let tag = slice_at(hex, offset, tag_width)?.to_ascii_lowercase();

    let (length, length_width) = length_at(hex, offset + tag_width)?;
    let value_start = offset + tag_width + length_width;
    let declared = length * 2;
    let available = hex.len().saturating_sub(value_start);
    if declared > available {
        return Err(Error::TruncatedRecord {
            tag,
            declared,
            available,
        });
    }

    let value = HexString::try_from(slice_at(hex, value_start, declared)?)?;
    Ok((
        TlvRecord { tag, length, value },
        value_start + declared,
    ))
}

/// Offset of the first occurrence of `tag` at an even character offset.
///
/// Matches starting mid-byte are not tags and are skipped.
pub fn find_aligned(hex: &str, tag: &str) -> Option<usize> {
    if tag.is_empty() {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .find(|&i| hex.get(i..).is_some_and(|rest| rest.starts_with(tag)))
}

/// Locate the first byte-aligned occurrence of `tag` in `hex` and return the
/// value span its length field declares.
///
/// `Ok(None)` means the tag is absent. A declared span running past the end
/// of `hex` is `Error::TruncatedRecord`, never a short slice.
pub fn locate_tag(tag: &str, hex: &str) -> Result<Option<HexString>> {
    let tag = tag.to_ascii_lowercase();
    let hex = hex.to_ascii_lowercase();
    let Some(offset) = find_aligned(&hex, &tag) else {
        trace!("tag {} not found", tag);
        return Ok(None);
    };

    let length_offset = offset + tag.len();
    let (length, length_width) = match length_at(&hex, length_offset) {
        Ok(v) => v,
        Err(Error::InvalidLength { .. }) => {
            return Err(Error::TruncatedRecord {
                tag,
                declared: 2,
                available: hex.len().saturating_sub(length_offset),
            });
        }
        Err(e) => return Err(e),
    };

    let value_start = length_offset + length_width;
    let declared = length * 2;
    let available = hex.len().saturating_sub(value_start);
    if declared > available {
        return Err(Error::TruncatedRecord {
            tag,
            declared,
            available,
        });
    }

    let value = HexString::try_from(slice_at(&hex, value_start, declared)?)?;
    debug!("tag {} at offset {}: {} bytes", tag, offset, length);
    Ok(Some(value))
}

/// Tag to value lookup built from a flat record walk.
///
/// Records keep their first-occurrence order; a repeated tag keeps the value
/// seen first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvMap {
    records: Vec<TlvRecord>,
    partial: bool,
}

impl TlvMap {
    /// An empty, complete map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its tag is already present. Returns whether the
    /// record was kept.
    pub fn insert(&mut self, record: TlvRecord) -> bool {
        if self.contains(&record.tag) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Value of `tag`, compared case-insensitively.
    pub fn get(&self, tag: &str) -> Option<&HexString> {
        self.records
            .iter()
            .find(|r| r.tag.eq_ignore_ascii_case(tag))
            .map(|r| &r.value)
    }

    /// Whether `tag` was decoded.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record was decoded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tags in first-occurrence order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.tag.as_str())
    }

    /// Kept records in first-occurrence order.
    pub fn records(&self) -> &[TlvRecord] {
        &self.records
    }

    /// True when the walk stopped early on a truncated or malformed record.
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

/// Walk `payload` as a flat sequence of records from offset 0.
///
/// Stops at the first record that cannot be fully decoded and returns what was
/// accumulated so far, flagged as partial.
pub fn walk_records(payload: &str) -> TlvMap {
    let mut map = TlvMap::new();
    let mut offset = 0usize;
    while offset < payload.len() {
        match read_record_at(payload, offset) {
            Ok((record, next)) => {
                trace!(
                    "record {} len {} = {}",
                    record.tag, record.length, record.value
                );
                let tag = record.tag.clone();
                if !map.insert(record) {
                    debug!("duplicate tag {} at offset {} ignored", tag, offset);
                }
                offset = next;
            }
            Err(e) => {
                warn!("TLV walk stopped at offset {}: {}", offset, e);
                map.partial = true;
                break;
            }
        }
    }
    map
}
