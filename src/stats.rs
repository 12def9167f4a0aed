use crate::encode::encode;
use crate::lyndon::lyndon_breaks;

/// Statistics about a forward transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    /// Number of input bytes
    pub input_length: usize,
    /// Number of Lyndon factors in the input
    pub num_factors: usize,
    /// Number of maximal runs of equal bytes in the input
    pub input_runs: usize,
    /// Number of maximal runs of equal bytes in the encoded output
    pub encoded_runs: usize,
}

impl TransformStats {
    /// Returns encoded runs as a percentage of input runs.
    ///
    /// Below 100% means the transform grouped equal bytes together.
    pub fn run_ratio(&self) -> f64 {
        if self.input_runs == 0 {
            0.0
        } else {
            (self.encoded_runs as f64 / self.input_runs as f64) * 100.0
        }
    }
}

/// Encodes `input` and reports how much the transform clustered its bytes.
pub fn encode_with_stats(input: &[u8]) -> (Vec<u8>, TransformStats) {
    let encoded = encode(input);
    let stats = TransformStats {
        input_length: input.len(),
        num_factors: lyndon_breaks(input).len(),
        input_runs: count_runs(input),
        encoded_runs: count_runs(&encoded),
    };
    (encoded, stats)
}

pub(crate) fn count_runs(data: &[u8]) -> usize {
    match data.first() {
        None => 0,
        Some(_) => 1 + data.windows(2).filter(|pair| pair[0] != pair[1]).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_runs() {
        assert_eq!(count_runs(b""), 0);
        assert_eq!(count_runs(b"a"), 1);
        assert_eq!(count_runs(b"aaa"), 1);
        assert_eq!(count_runs(b"abab"), 4);
        assert_eq!(count_runs(b"aabbba"), 3);
    }

    #[test]
    fn test_empty_stats() {
        let (encoded, stats) = encode_with_stats(b"");
        assert!(encoded.is_empty());
        assert_eq!(stats.input_length, 0);
        assert_eq!(stats.num_factors, 0);
        assert_eq!(stats.run_ratio(), 0.0);
    }

    #[test]
    fn test_banana_stats() {
        let (encoded, stats) = encode_with_stats(b"BANANA");
        assert_eq!(encoded, b"ANNBAA");
        assert_eq!(
            stats,
            TransformStats {
                input_length: 6,
                num_factors: 4,
                input_runs: 6,
                encoded_runs: 4,
            }
        );
    }

    #[test]
    fn test_alternating_input_groups() {
        let (encoded, stats) = encode_with_stats(b"abababab");
        assert_eq!(encoded, b"bbbbaaaa");
        assert_eq!(stats.input_runs, 8);
        assert_eq!(stats.encoded_runs, 2);
        assert_eq!(stats.run_ratio(), 25.0);
    }
}
