//! Stream disassembly: re-derive segment boundaries from the bitstream alone.
//!
//! No chunk index is stored. Each iteration classifies the next segment from
//! its leading bits, decodes it, and advances past the consumed bits. A
//! declared length past the end of the stream is clamped (the fixed literal
//! length always over-declares for a short final chunk); a tag without enough
//! bits behind it is a fatal truncation.

use crate::bits::BitBuf;
use crate::error::BitfoldError;
use crate::segment::{decode_repetition, decode_sequence, detect_segment, SegmentKind};
use crate::PAD_FIELD_BITS;

/// Decompress a segment stream produced by [`crate::compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, BitfoldError> {
    let bits = BitBuf::from_bytes(data);
    if bits.len() < PAD_FIELD_BITS {
        return Err(BitfoldError::Truncated(
            "missing pad-length footer".into(),
        ));
    }

    let pad = bits.read_value(bits.len() - PAD_FIELD_BITS, PAD_FIELD_BITS);
    let body_len = bits.len() - PAD_FIELD_BITS;
    if pad > body_len {
        return Err(BitfoldError::Codec(format!(
            "pad length {pad} exceeds stream length {body_len}"
        )));
    }
    let stream = &bits.as_bits()[..body_len - pad];

    let mut out = BitBuf::with_capacity(stream.len());
    let mut offset = 0;
    while offset < stream.len() {
        let remaining = &stream[offset..];
        let (kind, declared) = detect_segment(remaining)?;
        let segment = &remaining[..declared.min(remaining.len())];
        match kind {
            SegmentKind::Literal => out.extend_from_slice(&segment[2..]),
            SegmentKind::Sequence => out.extend(&decode_sequence(segment)),
            SegmentKind::Repetition => out.extend(&decode_repetition(segment)),
        }
        offset += segment.len();
    }

    Ok(out.to_bytes())
}
