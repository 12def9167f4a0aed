/// Bijective Burrows-Wheeler inverse transform.
///
/// Recovers the original bytes from the output of [`encode`](fn@crate::encode)
/// alone:
/// 1. Counting-sort the input to get the first column of the sorted rotations.
/// 2. Rank every input byte (first occurrence in the first column plus the
///    number of equal bytes before it) and invert that into a permutation.
/// 3. Walk the cycles of the permutation, smallest unvisited rank first. Each
///    closed cycle spells one Lyndon factor, and factors are placed from the
///    back of the output towards the front.
///
/// Runs in O(n) time. Every byte sequence is the encoding of exactly one
/// sequence of the same length, so this never fails; the input is not checked
/// for having come from `encode`.
pub fn decode(encoded: &[u8]) -> Vec<u8> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let counts = histogram(encoded);
    let first_column = first_column(&counts, encoded.len());
    let map = rank_map(encoded, &counts);

    CycleWalker::new(&first_column, &map).run()
}

fn histogram(data: &[u8]) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
}

/// Sorted copy of the input, rebuilt from its histogram.
fn first_column(counts: &[usize; 256], len: usize) -> Vec<u8> {
    let mut column = Vec::with_capacity(len);
    for (byte, &count) in counts.iter().enumerate() {
        column.extend(std::iter::repeat(byte as u8).take(count));
    }
    column
}

/// Builds `map[rank] = position`, where `rank` is the row a byte of the
/// encoded sequence lands in once sorted (ties broken by position).
fn rank_map(encoded: &[u8], counts: &[usize; 256]) -> Vec<usize> {
    // Starting row of each byte value in the first column
    let mut next_rank = [0usize; 256];
    let mut total = 0;
    for (slot, &count) in next_rank.iter_mut().zip(counts.iter()) {
        *slot = total;
        total += count;
    }

    let mut map = vec![0usize; encoded.len()];
    for (position, &byte) in encoded.iter().enumerate() {
        map[next_rank[byte as usize]] = position;
        next_rank[byte as usize] += 1;
    }
    map
}

/// States of the cycle walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// Following the permutation from `start`; `row` is the next row to emit.
    Walking { start: usize, row: usize },
    /// The current cycle has closed and its bytes need to be put in order.
    Flush,
    /// Looking for the smallest unvisited row.
    Scan,
    Done,
}

/// Reconstructs the output one permutation cycle at a time.
///
/// Bytes of the current cycle are written right to left just below the
/// already placed factors, then reversed in place when the cycle closes.
struct CycleWalker<'a> {
    first_column: &'a [u8],
    map: &'a [usize],
    visited: Vec<bool>,
    output: Vec<u8>,
    /// Index of the last byte written for the current cycle.
    write: usize,
    /// Start of the region holding completed factors.
    placed: usize,
    /// No row below this one is unvisited.
    scan_from: usize,
}

impl<'a> CycleWalker<'a> {
    fn new(first_column: &'a [u8], map: &'a [usize]) -> Self {
        let n = map.len();
        Self {
            first_column,
            map,
            visited: vec![false; n],
            output: vec![0; n],
            write: n,
            placed: n,
            scan_from: 0,
        }
    }

    fn run(mut self) -> Vec<u8> {
        let mut state = WalkState::Scan;
        while state != WalkState::Done {
            state = self.step(state);
        }

        debug_assert_eq!(self.placed, 0, "Every row should have been placed");
        self.output
    }

    fn step(&mut self, state: WalkState) -> WalkState {
        match state {
            WalkState::Walking { start, row } => {
                self.visited[row] = true;
                self.write -= 1;
                self.output[self.write] = self.first_column[row];

                let next = self.map[row];
                if next == start {
                    WalkState::Flush
                } else {
                    WalkState::Walking { start, row: next }
                }
            }

            WalkState::Flush => {
                self.output[self.write..self.placed].reverse();
                self.placed = self.write;
                WalkState::Scan
            }

            WalkState::Scan => {
                while self.scan_from < self.visited.len() && self.visited[self.scan_from] {
                    self.scan_from += 1;
                }

                if self.scan_from == self.visited.len() {
                    WalkState::Done
                } else {
                    WalkState::Walking {
                        start: self.scan_from,
                        row: self.scan_from,
                    }
                }
            }

            WalkState::Done => unreachable!("step should not be called after Done"),
        }
    }
}
