use crate::cyclic::Cyclic;

/// A cyclic rotation of a borrowed factor.
///
/// Stored as an offset view instead of a rotated copy: rotation `shift` is the
/// factor right-rotated `shift` times, so rotation 0 is the factor itself and
/// rotation 1 of `ABC` is `CAB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation<'a> {
    factor: &'a [u8],
    shift: usize,
}

impl<'a> Rotation<'a> {
    /// Creates the rotation of `factor` by `shift` positions to the right.
    ///
    /// `shift` must be smaller than the factor length.
    pub fn new(factor: &'a [u8], shift: usize) -> Self {
        assert!(
            shift < factor.len(),
            "Rotation shift {} out of range for factor of length {}",
            shift,
            factor.len()
        );
        Self { factor, shift }
    }

    /// Returns the factor this rotation was taken from.
    pub fn factor(&self) -> &'a [u8] {
        self.factor
    }

    /// Returns how many times the factor was rotated right.
    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn len(&self) -> usize {
        self.factor.len()
    }

    /// Always false; rotations are only built from non-empty factors.
    pub fn is_empty(&self) -> bool {
        self.factor.is_empty()
    }

    /// Returns the last byte of the rotation.
    pub fn last(&self) -> u8 {
        self.byte_at(self.len() - 1)
    }

    /// Iterates over the bytes of the rotation in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        let (head, tail) = self.factor.split_at(self.len() - self.shift);
        tail.iter().chain(head).copied()
    }

    /// Copies the rotation into an owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl Cyclic for Rotation<'_> {
    fn cycle_len(&self) -> usize {
        self.factor.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        let len = self.factor.len();
        self.factor[(index + len - self.shift) % len]
    }
}

/// Iterator over all rotations of a single factor, by increasing shift.
pub struct Rotations<'a> {
    factor: &'a [u8],
    next_shift: usize,
}

impl<'a> Iterator for Rotations<'a> {
    type Item = Rotation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_shift >= self.factor.len() {
            return None;
        }
        let rotation = Rotation::new(self.factor, self.next_shift);
        self.next_shift += 1;
        Some(rotation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.factor.len() - self.next_shift;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rotations<'_> {}

/// Returns the `factor.len()` rotations of `factor`. An empty factor has none.
pub fn rotations(factor: &[u8]) -> Rotations<'_> {
    Rotations {
        factor,
        next_shift: 0,
    }
}

/// Returns the rotations of every factor, factor by factor.
///
/// Rotations never cross factor boundaries, so the total count is the sum of
/// the factor lengths.
pub fn rotations_of_all<'a, I>(factors: I) -> impl Iterator<Item = Rotation<'a>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    factors.into_iter().flat_map(rotations)
}
