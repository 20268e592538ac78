//! Quick sort with a middle pivot, O(n log n) average
//!
//! The recursion is kept on an explicit range stack so partitions can be
//! suspended after every scan. Highlights: `[pivot, low cursor, high cursor]`.

use super::kind::AlgorithmKind;
use super::step::{Highlights, Progress, StepSequence, Workspace};

/// In-flight partition of `[left, right]` (inclusive)
#[derive(Debug, Clone, Copy)]
struct Partition {
    left: usize,
    right: usize,
    pivot_index: usize,
    pivot: u32,
    i: usize,
    j: usize,
    /// Cursors were shown; the swap/stop decision is still due
    scanned: bool,
}

impl Partition {
    fn new(arr: &[u32], left: usize, right: usize) -> Self {
        let pivot_index = (left + right) / 2;
        Self {
            left,
            right,
            pivot_index,
            pivot: arr[pivot_index],
            i: left,
            j: right,
            scanned: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    ws: Workspace,
    active: Option<Partition>,
    /// Pending inclusive ranges, next one on top
    ranges: Vec<(usize, usize)>,
}

impl QuickSort {
    pub fn new(input: &[u32]) -> Self {
        let ws = Workspace::new(input);
        let ranges = if ws.is_empty() {
            Vec::new()
        } else {
            vec![(0, ws.len() - 1)]
        };
        Self {
            ws,
            active: None,
            ranges,
        }
    }

    /// Queue both halves of a finished partition, left half on top
    fn split(&mut self, p: &Partition) {
        if p.j + 1 < p.right {
            self.ranges.push((p.j + 1, p.right));
        }
        if p.left + 1 < p.i {
            self.ranges.push((p.left, p.i - 1));
        }
    }
}

impl StepSequence for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn len(&self) -> usize {
        self.ws.len()
    }

    fn data(&self) -> &[u32] {
        &self.ws.arr
    }

    fn advance(&mut self) -> Progress<'_> {
        loop {
            let Some(mut p) = self.active.take() else {
                match self.ranges.pop() {
                    Some((left, right)) => {
                        self.active = Some(Partition::new(&self.ws.arr, left, right));
                        continue;
                    }
                    None => return self.ws.finish(),
                }
            };

            if p.scanned {
                p.scanned = false;
                if p.i >= p.j {
                    self.split(&p);
                    continue;
                }
                // equal values are left alone and not counted
                if self.ws.arr[p.i] != self.ws.arr[p.j] {
                    self.ws.swap(p.i, p.j);
                }
                p.i += 1;
                p.j -= 1;
            }

            while self.ws.arr[p.i] < p.pivot {
                p.i += 1;
                self.ws.loops += 1;
            }
            while p.pivot < self.ws.arr[p.j] {
                p.j -= 1;
                self.ws.loops += 1;
            }
            p.scanned = true;
            self.active = Some(p);
            return self.ws.step(Highlights::all(p.pivot_index, p.i, p.j));
        }
    }
}
