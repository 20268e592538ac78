//! Selection sort, O(n²)
//!
//! Highlights: `[scanning, current minimum, insertion slot]`.

use super::kind::AlgorithmKind;
use super::step::{Highlights, Progress, StepSequence, Workspace};

#[derive(Debug, Clone)]
pub struct SelectionSort {
    ws: Workspace,
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSort {
    pub fn new(input: &[u32]) -> Self {
        Self {
            ws: Workspace::new(input),
            i: 0,
            j: 0,
            min: 0,
        }
    }
}

impl StepSequence for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn len(&self) -> usize {
        self.ws.len()
    }

    fn data(&self) -> &[u32] {
        &self.ws.arr
    }

    fn advance(&mut self) -> Progress<'_> {
        let n = self.ws.len();
        if self.i < n && self.j >= n {
            // The swap is counted even when the minimum is already in place.
            self.ws.swap(self.i, self.min);
            self.i += 1;
            self.j = self.i;
            self.min = self.i;
        }
        if self.i >= n {
            return self.ws.finish();
        }

        let j = self.j;
        if self.ws.arr[j] < self.ws.arr[self.min] {
            self.min = j;
        }
        self.ws.loops += 1;
        self.j += 1;
        self.ws.step(Highlights::all(j, self.min, self.i))
    }
}
