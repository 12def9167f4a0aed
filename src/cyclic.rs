use std::cmp::Ordering;

/// Random access to a byte sequence that is read as if repeated forever.
///
/// Implementors only expose one period; [`cyclic_cmp`] takes care of the
/// wrap-around.
pub trait Cyclic {
    /// Length of one period.
    fn cycle_len(&self) -> usize;

    /// Byte at `index` within one period. `index` is always `< cycle_len()`.
    fn byte_at(&self, index: usize) -> u8;
}

impl Cyclic for [u8] {
    fn cycle_len(&self) -> usize {
        self.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<const N: usize> Cyclic for [u8; N] {
    fn cycle_len(&self) -> usize {
        N
    }

    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl Cyclic for Vec<u8> {
    fn cycle_len(&self) -> usize {
        self.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

/// Compares `a` and `b` as infinite repetitions of themselves.
///
/// Both cursors wrap independently. The comparison ends with `Equal` only once
/// both cursors complete a period on the same step, i.e. after
/// `lcm(a.cycle_len(), b.cycle_len())` byte comparisons. Runs in
/// O(lcm) time with O(1) extra space and keeps all state on the stack, so it
/// is safe to call from any number of threads.
///
/// An empty operand has no period to repeat: in that case the lengths are
/// compared instead, so an empty cycle sorts before any non-empty one.
pub fn cyclic_cmp<A, B>(a: &A, b: &B) -> Ordering
where
    A: Cyclic + ?Sized,
    B: Cyclic + ?Sized,
{
    let a_len = a.cycle_len();
    let b_len = b.cycle_len();
    if a_len == 0 || b_len == 0 {
        return a_len.cmp(&b_len);
    }

    let mut x = 0;
    let mut y = 0;
    loop {
        match a.byte_at(x).cmp(&b.byte_at(y)) {
            Ordering::Equal => {}
            other => return other,
        }

        x += 1;
        y += 1;

        // Only a simultaneous wrap means the lcm has been reached
        if x == a_len && y == b_len {
            return Ordering::Equal;
        }
        if x == a_len {
            x = 0;
        }
        if y == b_len {
            y = 0;
        }
    }
}
