/*!
An iterator over the k-element subsets of 0..n, in lexicographic order.

Used by the minimal cause search to sweep candidate variable sets in
increasing size order. A sweep over every size is a power set, exponential
in n. This is inherent to the search, and the reason it runs smallest-first
with pruning.
*/

/// The k-element subsets of `0..n`, lexicographically.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    /// The k-element subsets of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            k,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();

        // Advance: bump the rightmost index with room, reset those after it.
        let mut position = self.k;
        loop {
            if position == 0 {
                self.exhausted = true;
                break;
            }
            position -= 1;
            if self.indices[position] < position + self.n - self.k {
                self.indices[position] += 1;
                for following in position + 1..self.k {
                    self.indices[following] = self.indices[following - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
