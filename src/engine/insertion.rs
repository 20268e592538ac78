//! Insertion sort, O(n²)
//!
//! Highlights: `[element being inserted, left neighbour, moving element]`.

use super::kind::AlgorithmKind;
use super::step::{Highlights, Progress, StepSequence, Workspace};

#[derive(Debug, Clone)]
pub struct InsertionSort {
    ws: Workspace,
    i: usize,
    j: usize,
    /// A step was shown for `j - 1 <-> j`; swap on the next advance
    pending_swap: bool,
}

impl InsertionSort {
    pub fn new(input: &[u32]) -> Self {
        Self {
            ws: Workspace::new(input),
            i: 1,
            j: 1,
            pending_swap: false,
        }
    }
}

impl StepSequence for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn len(&self) -> usize {
        self.ws.len()
    }

    fn data(&self) -> &[u32] {
        &self.ws.arr
    }

    fn advance(&mut self) -> Progress<'_> {
        if self.pending_swap {
            self.pending_swap = false;
            self.ws.swap(self.j - 1, self.j);
            self.ws.loops += 1;
            self.j -= 1;
        }

        let n = self.ws.len();
        while self.i < n {
            let j = self.j;
            if j > 0 && self.ws.arr[j - 1] > self.ws.arr[j] {
                self.pending_swap = true;
                return self.ws.step(Highlights::all(self.i, j - 1, j));
            }
            self.i += 1;
            self.j = self.i;
        }
        self.ws.finish()
    }
}
