use crate::cyclic::cyclic_cmp;
use crate::lyndon::lyndon_factors;
use crate::rotation::{rotations_of_all, Rotation};

/// Bijective Burrows-Wheeler forward transform.
///
/// 1. Factorizes the input into Lyndon words (Duval)
/// 2. Collects every rotation of every factor
/// 3. Sorts the rotations by their infinite repetition
/// 4. Emits the last byte of each sorted rotation
///
/// The output has the same length and the same byte histogram as the input.
/// No primary index is needed to invert it: see [`decode`](fn@crate::decode).
///
/// The sort compares rotations in O(lcm) of their lengths, so adversarial
/// inputs can cost up to O(n² log n).
pub fn encode(input: &[u8]) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut rotations: Vec<Rotation<'_>> = rotations_of_all(lyndon_factors(input)).collect();
    debug_assert_eq!(rotations.len(), input.len());

    // Ties only happen between identical rotations, which share a last byte
    rotations.sort_by(|a, b| cyclic_cmp(a, b));

    rotations.iter().map(Rotation::last).collect()
}
