//! Bos–Coster combination of many `(scalar, point)` pairs.
//!
//! The pairs live in flat arrays; the max-heap orders indices into them. Each
//! step takes the two largest scalars `s1 >= s2` and rewrites
//! `s1*P1 + s2*P2` as `(s1 - s2)*P1 + s2*(P2 + P1)`, which keeps the weighted
//! sum unchanged while shrinking `s1`. When only one nonzero scalar is left,
//! the sum is that scalar times its point.

use core::cmp::Ordering;

use halfsize::limbs::{compare, is_zero, sub_lshift};

use crate::constants::WIDE_GAP_BITS;
use crate::group::Group;

pub struct ScalarHeap<G, const N: usize> {
    scalars: Vec<[u64; N]>,
    points: Vec<G>,
    heap: Vec<usize>,
    /// Highest limb that can still be nonzero in any scalar.
    window: usize,
}

impl<G: Group, const N: usize> ScalarHeap<G, N> {
    /// Builds the heap, padding an even number of pairs with `(0, identity)`.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ([u64; N], G)>,
    {
        let (mut scalars, mut points): (Vec<[u64; N]>, Vec<G>) = entries.into_iter().unzip();
        if scalars.len() % 2 == 0 {
            scalars.push([0; N]);
            points.push(G::identity());
        }

        let window = scalars
            .iter()
            .filter_map(|s| s.iter().rposition(|&limb| limb != 0))
            .max()
            .unwrap_or(0);

        let mut heap = Self {
            heap: Vec::with_capacity(scalars.len()),
            scalars,
            points,
            window,
        };
        for node in 0..heap.scalars.len() {
            heap.heap.push(node);
            heap.sift_up(node);
        }
        heap
    }

    /// Number of pairs held, including the padding entry.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Runs the combination loop and returns the surviving `(k, P)`, with
    /// `[k]P` equal to the weighted sum of all pairs.
    pub fn reduce(mut self) -> ([u64; N], G) {
        loop {
            let Some((max1, max2)) = self.top2() else {
                break;
            };
            if is_zero(&self.scalars[max2]) {
                break;
            }
            while self.window > 0 && self.scalars[max1][self.window] == 0 {
                self.window -= 1;
            }

            let w = self.window;
            let s2 = self.scalars[max2];
            let gap = unsigned_bits(&self.scalars[max1]).saturating_sub(unsigned_bits(&s2) + 1);
            if gap >= WIDE_GAP_BITS {
                sub_lshift(&mut self.scalars[max1][..=w], &s2[..=w], gap);
                let shifted = self.points[max1].mul_pow2(gap);
                self.points[max2] += shifted;
            } else {
                sub_lshift(&mut self.scalars[max1][..=w], &s2[..=w], 0);
                let p1 = self.points[max1];
                self.points[max2] += p1;
            }
            self.sift_down_root();
        }

        match self.heap.first() {
            Some(&root) => (self.scalars[root], self.points[root]),
            None => ([0; N], G::identity()),
        }
    }

    /// Scalar comparison restricted to limbs `window..=0`.
    fn less(&self, a: usize, b: usize) -> bool {
        let w = self.window;
        compare(&self.scalars[a][..=w], &self.scalars[b][..=w]) == Ordering::Less
    }

    fn top2(&self) -> Option<(usize, usize)> {
        let root = *self.heap.first()?;
        let mut runner_up = *self.heap.get(1)?;
        if let Some(&right) = self.heap.get(2) {
            if self.less(runner_up, right) {
                runner_up = right;
            }
        }
        Some((root, runner_up))
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if !self.less(self.heap[parent], self.heap[node]) {
                break;
            }
            self.heap.swap(parent, node);
            node = parent;
        }
    }

    fn sift_down_root(&mut self) {
        let size = self.heap.len();
        let mut node = 0;
        loop {
            let left = 2 * node + 1;
            if left >= size {
                break;
            }
            let mut child = left;
            if left + 1 < size && self.less(self.heap[left], self.heap[left + 1]) {
                child = left + 1;
            }
            if !self.less(self.heap[node], self.heap[child]) {
                break;
            }
            self.heap.swap(node, child);
            node = child;
        }
    }
}

fn unsigned_bits(a: &[u64]) -> u32 {
    a.iter()
        .rposition(|&limb| limb != 0)
        .map_or(0, |i| 64 * i as u32 + 64 - a[i].leading_zeros())
}

/// `Σ [s_i]P_i` through the heap and a final double-and-add.
pub fn combine<G, const N: usize, I>(entries: I) -> G
where
    G: Group,
    I: IntoIterator<Item = ([u64; N], G)>,
{
    let (scalar, point) = ScalarHeap::new(entries).reduce();
    point.mul_limbs(&scalar)
}
