//! Decoder and encoder for the `WM_NORMAL_HINTS` wire format.

use tracing::trace;

use crate::error::{CodecError, CodecResult};
use crate::layout::{Field, RECORD_SIZE, SLOT_COUNT, SLOT_SIZE, SizeHints};

/// Decode a size hints record from raw property bytes.
///
/// Slots are read in wire order; the first one that does not fit in `data`
/// is reported in the error. Values are not validated. Bytes past the end of
/// the record are ignored.
pub fn decode(data: &[u8]) -> CodecResult<SizeHints> {
    let mut slots = [0i32; SLOT_COUNT];

    for field in Field::ALL {
        let offset = field.offset();
        let bytes = data
            .get(offset..offset + SLOT_SIZE)
            .ok_or(CodecError::TruncatedInput {
                field: field.name(),
                offset,
                needed: SLOT_SIZE,
                available: data.len(),
            })?;
        // get() returned exactly SLOT_SIZE bytes
        let mut word = [0u8; SLOT_SIZE];
        word.copy_from_slice(bytes);
        slots[field.index()] = i32::from_le_bytes(word);
    }

    if data.len() > RECORD_SIZE {
        trace!(
            "Ignoring {} trailing bytes after size hints record",
            data.len() - RECORD_SIZE
        );
    }

    Ok(SizeHints::from_slots(slots))
}

/// Encode a size hints record into its 72-byte wire form.
pub fn encode(hints: &SizeHints) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    for field in Field::ALL {
        let offset = field.offset();
        out[offset..offset + SLOT_SIZE].copy_from_slice(&hints.slot(field).to_le_bytes());
    }
    out
}

impl SizeHints {
    /// See [`decode`].
    pub fn decode(data: &[u8]) -> CodecResult<Self> {
        decode(data)
    }

    /// See [`encode`].
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        encode(self)
    }
}
