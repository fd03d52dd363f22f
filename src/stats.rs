//! Compression progress tracking.
//!
//! Elapsed time is always computed from the `Instant` captured at
//! construction; there is no global clock state.

use crate::chunk::EncodedChunk;
use crate::segment::SegmentKind;
use serde::Serialize;
use std::time::Instant;

pub struct CompressionStats {
    start: Instant,
    pub total_chunks: u64,
    pub literal_chunks: u64,
    pub sequence_chunks: u64,
    pub repetition_chunks: u64,
    pub bits_in: u64,
    pub bits_out: u64,
    pub saved_bits: i64,
}

impl CompressionStats {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            total_chunks: 0,
            literal_chunks: 0,
            sequence_chunks: 0,
            repetition_chunks: 0,
            bits_in: 0,
            bits_out: 0,
            saved_bits: 0,
        }
    }

    pub fn record(&mut self, encoded: &EncodedChunk, chunk_bits: usize) {
        self.total_chunks += 1;
        match encoded.kind {
            SegmentKind::Literal => self.literal_chunks += 1,
            SegmentKind::Sequence => self.sequence_chunks += 1,
            SegmentKind::Repetition => self.repetition_chunks += 1,
        }
        self.bits_in += chunk_bits as u64;
        self.bits_out += encoded.bits.len() as u64;
        self.saved_bits += encoded.savings;
    }

    /// Elapsed time since construction as `[HH:MM:SS.mmm]`, saturating after
    /// 99 hours.
    pub fn timestamp(&self) -> String {
        let elapsed = self.start.elapsed();
        let total_seconds = elapsed.as_secs();
        let millis = elapsed.subsec_millis();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        if hours > 99 {
            return "[99:59:59.999]+".into();
        }
        format!("[{hours:02}:{minutes:02}:{seconds:02}.{millis:03}]")
    }

    pub fn report(&self, input_bytes: usize, output_bytes: usize) {
        let ratio = if input_bytes == 0 {
            100.0
        } else {
            output_bytes as f64 * 100.0 / input_bytes as f64
        };
        eprintln!("Compression complete!");
        eprintln!("Input: {input_bytes} bytes");
        eprintln!("Output: {output_bytes} bytes ({ratio:.2}%)");
        eprintln!(
            "Chunks: {} ({} literal, {} sequence, {} repetition)",
            self.total_chunks, self.literal_chunks, self.sequence_chunks, self.repetition_chunks
        );
        eprintln!("Saved: {} bits", self.saved_bits);
    }

    pub fn to_report(&self, input_bytes: usize, output_bytes: usize) -> CompressionReport {
        CompressionReport {
            input_bytes: input_bytes as u64,
            output_bytes: output_bytes as u64,
            ratio_percent: if input_bytes == 0 {
                100.0
            } else {
                output_bytes as f64 * 100.0 / input_bytes as f64
            },
            elapsed_ms: self.start.elapsed().as_millis() as u64,
            chunks: self.total_chunks,
            literal_chunks: self.literal_chunks,
            sequence_chunks: self.sequence_chunks,
            repetition_chunks: self.repetition_chunks,
            saved_bits: self.saved_bits,
        }
    }
}

impl Default for CompressionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Machine-readable summary for `--json` output.
#[derive(Debug, Serialize)]
pub struct CompressionReport {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub ratio_percent: f64,
    pub elapsed_ms: u64,
    pub chunks: u64,
    pub literal_chunks: u64,
    pub sequence_chunks: u64,
    pub repetition_chunks: u64,
    pub saved_bits: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitBuf;

    #[test]
    fn records_per_kind_counts() {
        let mut stats = CompressionStats::new();
        stats.record(
            &EncodedChunk {
                kind: SegmentKind::Literal,
                bits: BitBuf::repeat(false, 10),
                savings: -2,
            },
            8,
        );
        stats.record(
            &EncodedChunk {
                kind: SegmentKind::Repetition,
                bits: BitBuf::repeat(false, 11),
                savings: 245,
            },
            256,
        );
        assert_eq!(stats.total_chunks, 2);
        assert_eq!(stats.literal_chunks, 1);
        assert_eq!(stats.repetition_chunks, 1);
        assert_eq!(stats.saved_bits, 243);
        assert_eq!(stats.bits_in, 264);
        assert_eq!(stats.bits_out, 21);
    }

    #[test]
    fn timestamp_is_zero_padded() {
        let stats = CompressionStats::new();
        let ts = stats.timestamp();
        assert!(ts.starts_with("[00:00:0"));
        assert!(ts.ends_with(']'));
    }
}
