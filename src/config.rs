use crate::error::BitfoldError;
use crate::MAX_SEQUENCE_LENGTH_LIMIT;

/// Runtime parameters for the per-chunk substitution search.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ceiling on the replacement bit-pattern length tried by the search.
    /// Clamped to `1..=MAX_SEQUENCE_LENGTH_LIMIT`; the search cost grows as
    /// `2^max_sequence_length`.
    pub max_sequence_length: usize,
    /// Fractional tolerance for keeping near-best-scoring candidates.
    /// Must lie in `[0, 1)`.
    pub relaxation: f64,
    /// Emit a progress line every this many chunks. `0` disables progress.
    pub status_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_sequence_length: 10,
            relaxation: 0.01,
            status_interval: 0,
        }
    }
}

impl Config {
    /// Build a config, clamping `max_sequence_length` into its legal range.
    ///
    /// Returns `true` in the second tuple element when the requested length
    /// was out of range and had to be clamped, so callers can warn.
    pub fn new(max_sequence_length: usize, relaxation: f64) -> Result<(Self, bool), BitfoldError> {
        if !(0.0..1.0).contains(&relaxation) {
            return Err(BitfoldError::Config(format!(
                "relaxation must be in [0, 1), got {relaxation}"
            )));
        }
        let clamped = max_sequence_length.clamp(1, MAX_SEQUENCE_LENGTH_LIMIT);
        Ok((
            Self {
                max_sequence_length: clamped,
                relaxation,
                status_interval: 0,
            },
            clamped != max_sequence_length,
        ))
    }

    pub fn validate(&self) -> Result<(), BitfoldError> {
        if !(0.0..1.0).contains(&self.relaxation) {
            return Err(BitfoldError::Config(format!(
                "relaxation must be in [0, 1), got {}",
                self.relaxation
            )));
        }
        if !(1..=MAX_SEQUENCE_LENGTH_LIMIT).contains(&self.max_sequence_length) {
            return Err(BitfoldError::Config(format!(
                "max_sequence_length must be in [1, {MAX_SEQUENCE_LENGTH_LIMIT}], got {}",
                self.max_sequence_length
            )));
        }
        Ok(())
    }
}
