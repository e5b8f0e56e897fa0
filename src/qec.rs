//! Trinary repetition code.
//!
//! A trit in {0, 1, 2} is copied into three positions and recovered by
//! majority vote, so any single trit-flip is corrected. Ties (three distinct
//! values) resolve to the lowest trit.
//!
//! Trits outside {0, 1, 2} violate the precondition of [`decode`] and panic.

/// Three-position codeword.
pub type Codeword = [u8; 3];

/// Number of trit values.
pub const TRIT_VALUES: usize = 3;

/// Repeat `value` into every position.
pub fn encode(value: u8) -> Codeword {
    [value; 3]
}

/// Copy of `codeword` with `position` overwritten by `new_value`.
pub fn corrupt(codeword: &Codeword, position: usize, new_value: u8) -> Codeword {
    let mut corrupted = *codeword;
    corrupted[position] = new_value;
    corrupted
}

/// Majority vote; the first (lowest) trit among the most frequent wins.
pub fn decode(codeword: &Codeword) -> u8 {
    let mut counts = [0usize; TRIT_VALUES];
    for &trit in codeword {
        counts[trit as usize] += 1;
    }

    let mut best = 0;
    for trit in 1..TRIT_VALUES {
        if counts[trit] > counts[best] {
            best = trit;
        }
    }
    best as u8
}

/// Outcome of exhaustive single-error testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionStats {
    /// Number of single-error cases tried
    pub total: usize,
    /// Cases decoded back to the original trit
    pub corrected: usize,
}

impl CorrectionStats {
    /// Fraction of cases corrected, 0 to 1.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.corrected as f64 / self.total as f64
    }
}

/// Try every trit, every position, and every wrong replacement trit.
pub fn single_error_sweep() -> CorrectionStats {
    let mut stats = CorrectionStats {
        total: 0,
        corrected: 0,
    };

    for data in 0..TRIT_VALUES as u8 {
        for position in 0..3 {
            for error_trit in 0..TRIT_VALUES as u8 {
                if error_trit == data {
                    continue;
                }
                stats.total += 1;
                let corrupted = corrupt(&encode(data), position, error_trit);
                if decode(&corrupted) == data {
                    stats.corrected += 1;
                }
            }
        }
    }

    tracing::debug!(total = stats.total, corrected = stats.corrected, "single-error sweep");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_error() {
        for v in 0..3 {
            assert_eq!(decode(&encode(v)), v);
        }
    }

    #[test]
    fn test_majority() {
        assert_eq!(decode(&[1, 1, 2]), 1);
        assert_eq!(decode(&[0, 0, 0]), 0);
        assert_eq!(decode(&[2, 0, 2]), 2);
    }

    #[test]
    fn test_tie_goes_to_lowest() {
        assert_eq!(decode(&[2, 1, 0]), 0);
        assert_eq!(decode(&[2, 1, 1]), 1);
    }

    #[test]
    fn test_corrupt_copies() {
        let original = encode(1);
        let corrupted = corrupt(&original, 0, 2);
        assert_eq!(corrupted, [2, 1, 1]);
        assert_eq!(original, [1, 1, 1]);
    }

    #[test]
    fn test_single_error_correction() {
        let encoded = encode(1);
        for error_trit in [0, 2] {
            let corrupted = corrupt(&encoded, 0, error_trit);
            assert_eq!(decode(&corrupted), 1, "corrupted = {corrupted:?}");
        }
    }

    #[test]
    fn test_sweep_corrects_everything() {
        let stats = single_error_sweep();
        assert_eq!(stats.total, 18);
        assert_eq!(stats.corrected, 18);
        assert_eq!(stats.success_rate(), 1.0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_trit_panics() {
        decode(&[3, 3, 3]);
    }
}
