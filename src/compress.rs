//! Stream assembly: encode chunks in order and close the stream with the
//! pad-length footer.

use crate::bits::BitBuf;
use crate::chunk::encode_chunk;
use crate::config::Config;
use crate::error::BitfoldError;
use crate::stats::CompressionStats;
use crate::{CHUNK_SIZE, PAD_FIELD_BITS};

/// Compress `data` into the segment stream format.
///
/// The input is processed as fixed-size chunks (the final chunk may be
/// shorter); each chunk is searched and encoded independently. Segments are
/// concatenated in chunk order, zero-padded to a byte boundary, and closed
/// with the 4-bit pad-length footer.
pub fn compress(
    data: &[u8],
    cfg: &Config,
    stats: &mut CompressionStats,
) -> Result<Vec<u8>, BitfoldError> {
    cfg.validate()?;

    let total_chunks = (data.len() + CHUNK_SIZE - 1) / CHUNK_SIZE;
    let mut out = BitBuf::with_capacity(data.len() * 8 + 16);

    for (index, chunk_bytes) in data.chunks(CHUNK_SIZE).enumerate() {
        let chunk = BitBuf::from_bytes(chunk_bytes);
        let encoded = encode_chunk(&chunk, cfg);
        stats.record(&encoded, chunk.len());
        out.extend(&encoded.bits);

        if cfg.status_interval > 0 && (index as u64 + 1) % cfg.status_interval == 0 {
            eprintln!(
                "{} chunk {}/{} | {:?} | saved {} bits so far",
                stats.timestamp(),
                index + 1,
                total_chunks,
                encoded.kind,
                stats.saved_bits
            );
        }
    }

    let pad = (8 - (out.len() + PAD_FIELD_BITS) % 8) % 8;
    for _ in 0..pad {
        out.push(false);
    }
    out.extend(&BitBuf::from_value(pad as u64, PAD_FIELD_BITS));

    debug_assert_eq!(out.len() % 8, 0);
    Ok(out.to_bytes())
}
