use crate::cyclic::cyclic_cmp;
use crate::rotation::rotations;
use std::cmp::Ordering;

/// Lyndon factorization using Duval's algorithm (O(n) time, O(1) extra space).
///
/// Returns the end offset of every factor: offsets are strictly increasing and
/// the last one equals `input.len()`. By the Chen-Fox-Lyndon theorem the
/// factorization is unique and its factors are non-increasing.
pub fn lyndon_breaks(input: &[u8]) -> Vec<usize> {
    let n = input.len();
    let mut breaks = Vec::new();
    let mut k = 0;

    while k < n {
        let mut i = k;
        let mut j = k + 1;

        while j < n && input[i] <= input[j] {
            if input[i] < input[j] {
                i = k;
            } else {
                i += 1;
            }
            j += 1;
        }

        // Emit every full period of the candidate that ends before `j`
        let period = j - i;
        loop {
            k += period;
            breaks.push(k);
            if k > i {
                break;
            }
        }
    }

    breaks
}

/// Iterator over the Lyndon factors of a byte sequence, in input order.
///
/// Yields borrowed slices; concatenated they reproduce the input exactly.
pub struct LyndonFactors<'a> {
    input: &'a [u8],
    breaks: std::vec::IntoIter<usize>,
    start: usize,
}

impl<'a> LyndonFactors<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            breaks: lyndon_breaks(input).into_iter(),
            start: 0,
        }
    }
}

impl<'a> Iterator for LyndonFactors<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.breaks.next()?;
        let factor = &self.input[self.start..end];
        self.start = end;
        Some(factor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.breaks.size_hint()
    }
}

impl ExactSizeIterator for LyndonFactors<'_> {}

/// Returns the Lyndon factors of `input`.
pub fn lyndon_factors(input: &[u8]) -> LyndonFactors<'_> {
    LyndonFactors::new(input)
}

/// Returns true if `word` is a Lyndon word: non-empty and strictly smaller
/// than every one of its proper rotations.
pub fn is_lyndon_word(word: &[u8]) -> bool {
    !word.is_empty()
        && rotations(word)
            .skip(1)
            .all(|rotation| cyclic_cmp(word, &rotation) == Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors_of(input: &[u8]) -> Vec<&[u8]> {
        lyndon_factors(input).collect()
    }

    #[test]
    fn test_empty() {
        assert!(lyndon_breaks(b"").is_empty());
        assert_eq!(lyndon_factors(b"").count(), 0);
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(lyndon_breaks(b"a"), vec![1]);
    }

    #[test]
    fn test_banana() {
        assert_eq!(lyndon_breaks(b"BANANA"), vec![1, 3, 5, 6]);
        assert_eq!(
            factors_of(b"BANANA"),
            vec![b"B".as_slice(), b"AN", b"AN", b"A"]
        );
    }

    #[test]
    fn test_whole_input_is_lyndon() {
        assert_eq!(factors_of(b"AB"), vec![b"AB".as_slice()]);
        assert_eq!(factors_of(b"aab"), vec![b"aab".as_slice()]);
    }

    #[test]
    fn test_decreasing_bytes() {
        assert_eq!(factors_of(b"CBA"), vec![b"C".as_slice(), b"B", b"A"]);
    }

    #[test]
    fn test_identical_bytes() {
        assert_eq!(lyndon_breaks(b"AAAA"), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_repeated_factor() {
        assert_eq!(factors_of(b"ABAB"), vec![b"AB".as_slice(), b"AB"]);
    }

    #[test]
    fn test_mississippi() {
        assert_eq!(
            factors_of(b"mississippi"),
            vec![b"m".as_slice(), b"iss", b"iss", b"ipp", b"i"]
        );
    }

    #[test]
    fn test_abracadabra() {
        assert_eq!(
            factors_of(b"abracadabra"),
            vec![b"abracad".as_slice(), b"abr", b"a"]
        );
    }

    #[test]
    fn test_high_bytes_are_unsigned() {
        // 0x00 < 0xff, so this is a single Lyndon word
        assert_eq!(lyndon_breaks(&[0x00, 0xff]), vec![2]);
        assert_eq!(lyndon_breaks(&[0xff, 0x00]), vec![1, 2]);
    }

    #[test]
    fn test_size_hint() {
        let factors = lyndon_factors(b"BANANA");
        assert_eq!(factors.len(), 4);
    }

    #[test]
    fn test_is_lyndon_word() {
        assert!(is_lyndon_word(b"a"));
        assert!(is_lyndon_word(b"ab"));
        assert!(is_lyndon_word(b"aab"));
        assert!(is_lyndon_word(b"abracad"));
        assert!(!is_lyndon_word(b""));
        assert!(!is_lyndon_word(b"ba"));
        assert!(!is_lyndon_word(b"aa"));
        assert!(!is_lyndon_word(b"abab"));
    }
}
