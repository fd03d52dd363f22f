//! Core logic for the bitfold compression system.
//!
//! bitfold is a lossless compressor built on chunk-local bit substitution:
//! each fixed-size chunk of input is searched for a repeated bit pattern (or
//! a leading run of identical bits) whose replacement by a shorter marker
//! yields a net size reduction, and the result is written as a
//! self-describing segment. Decompression re-derives segment boundaries from
//! the bitstream alone; no chunk index is stored.
//!
//! Every emitted substitution is proven by round-trip decoding before it is
//! accepted, so the compressed stream always reproduces the input exactly.

pub mod bits;
pub mod chunk;
pub mod compress;
pub mod config;
pub mod decompress;
pub mod error;
pub mod io_utils;
pub mod scorer;
pub mod segment;
pub mod stats;

pub use bits::BitBuf;
pub use chunk::{encode_chunk, EncodedChunk};
pub use compress::compress;
pub use config::Config;
pub use decompress::decompress;
pub use error::BitfoldError;
pub use segment::SegmentKind;
pub use stats::{CompressionReport, CompressionStats};

/// Fixed chunk size in bytes; the final chunk of a file may be shorter.
pub const CHUNK_SIZE: usize = 1024;
/// Chunk size in bits, and the literal segment's declared content length.
pub const CHUNK_BITS: usize = CHUNK_SIZE * 8;
/// Longest substring the scorer considers (8-bit length field).
pub const MAX_PATTERN_BITS: usize = 256;
/// Longest replacement pattern the sequence header can carry (6-bit field).
pub const MAX_REPLACEMENT_BITS: usize = 64;
/// Longest substituted content the sequence header can carry (13-bit field).
pub const MAX_SEGMENT_DATA_BITS: usize = CHUNK_BITS;
/// Sequence segment header width: 6 + 8 + 13 bits.
pub const SEQ_HEADER_BITS: usize = 27;
/// Repetition marker width: 3-bit tag plus 8-bit count.
pub const MARKER_BITS: usize = 11;
/// Width of the trailing pad-length field.
pub const PAD_FIELD_BITS: usize = 4;
/// Hard ceiling on the replacement-length search; the search is exponential
/// in this value.
pub const MAX_SEQUENCE_LENGTH_LIMIT: usize = 32;
