//! Per-chunk search: pick the substitution with the best verified savings.
//!
//! Every candidate is proven by decoding its own encoding and comparing
//! against the original chunk. The round trip is what rules out replacements
//! that collide with data bits or markers that get substituted more than
//! once; a candidate that fails it is simply discarded and the search moves
//! on. When nothing verifies with positive savings the chunk is emitted as a
//! literal.

use crate::bits::BitBuf;
use crate::config::Config;
use crate::scorer::{find_candidate_sequences, find_longest_run, ScoredPattern};
use crate::segment::{
    decode_repetition, decode_sequence, detect_segment, encode_literal, encode_repetition,
    encode_sequence, SegmentKind,
};

/// The encoded segment chosen for one chunk.
#[derive(Debug, Clone)]
pub struct EncodedChunk {
    pub kind: SegmentKind,
    pub bits: BitBuf,
    /// Verified bits saved relative to the raw chunk; the literal fallback
    /// reports the fixed tag overhead as -2.
    pub savings: i64,
}

fn literal_fallback(chunk: &BitBuf) -> EncodedChunk {
    EncodedChunk {
        kind: SegmentKind::Literal,
        bits: encode_literal(chunk),
        savings: -2,
    }
}

/// Search the chunk for the best verified substitution.
///
/// The repetition candidate is tried first, then for each replacement length
/// up to `cfg.max_sequence_length` every surviving pattern is paired with
/// every possible replacement bit-pattern of that length. Acceptance requires
/// strictly positive savings that strictly beat the best seen so far.
pub fn encode_chunk(chunk: &BitBuf, cfg: &Config) -> EncodedChunk {
    let buckets = find_candidate_sequences(chunk);
    if buckets.is_empty() {
        return literal_fallback(chunk);
    }

    let mut best: Option<(BitBuf, SegmentKind)> = None;
    let mut best_savings: i64 = 0;

    let (run_bit, run_length) = find_longest_run(chunk);
    if run_length > 1 {
        let encoded = encode_repetition(chunk, run_bit, run_length);
        // Segment detection consumes exactly the 11-bit marker, so a
        // repetition segment is only stream-parseable when the marker is the
        // whole segment. Anything else would leave the tail to be misread as
        // the next segment.
        let frames = matches!(
            detect_segment(encoded.as_bits()),
            Ok((SegmentKind::Repetition, len)) if len == encoded.len()
        );
        if frames && decode_repetition(encoded.as_bits()) == *chunk {
            let savings = chunk.len() as i64 - encoded.len() as i64;
            if savings > best_savings {
                best_savings = savings;
                best = Some((encoded, SegmentKind::Repetition));
            }
        }
    }

    for length in 1..=cfg.max_sequence_length {
        for bucket in buckets.iter() {
            for candidate in surviving(bucket, length, cfg.relaxation) {
                for value in 0..(1u64 << length) {
                    let replacement = BitBuf::from_value(value, length);
                    let encoded = match encode_sequence(chunk, &candidate.bits, &replacement) {
                        Ok(encoded) => encoded,
                        Err(_) => continue,
                    };
                    if decode_sequence(encoded.as_bits()) != *chunk {
                        continue;
                    }
                    let savings = chunk.len() as i64 - encoded.len() as i64;
                    if savings > best_savings {
                        best_savings = savings;
                        best = Some((encoded, SegmentKind::Sequence));
                    }
                }
            }
        }
    }

    match best {
        Some((bits, kind)) => EncodedChunk {
            kind,
            bits,
            savings: best_savings,
        },
        None => literal_fallback(chunk),
    }
}

/// Patterns from one bucket still worth trying at this replacement length:
/// longer than the replacement, and scored within the relaxation window of
/// the bucket's best remaining score.
fn surviving(bucket: &[ScoredPattern], length: usize, relaxation: f64) -> Vec<&ScoredPattern> {
    let mut filtered = bucket
        .iter()
        .filter(|p| p.bits.len() > length)
        .peekable();
    let top = match filtered.peek() {
        Some(p) => p.score as f64,
        None => return Vec::new(),
    };
    let threshold = top * (1.0 - relaxation);
    filtered.filter(|p| p.score as f64 >= threshold).collect()
}
