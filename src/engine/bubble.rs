//! Bubble sort, O(n²)
//!
//! Highlights: `[compared, last swapped left, last swapped right]`.

use super::kind::AlgorithmKind;
use super::step::{Highlights, Progress, StepSequence, Workspace};

#[derive(Debug, Clone)]
pub struct BubbleSort {
    ws: Workspace,
    i: usize,
    j: usize,
    last_swap: Option<(usize, usize)>,
}

impl BubbleSort {
    pub fn new(input: &[u32]) -> Self {
        Self {
            ws: Workspace::new(input),
            i: 0,
            j: 0,
            last_swap: None,
        }
    }
}

impl StepSequence for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn len(&self) -> usize {
        self.ws.len()
    }

    fn data(&self) -> &[u32] {
        &self.ws.arr
    }

    fn advance(&mut self) -> Progress<'_> {
        let n = self.ws.len();
        while self.i < n {
            // inner bound shrinks as the largest values settle at the end
            if self.j + 1 >= n - self.i {
                self.i += 1;
                self.j = 0;
                continue;
            }

            let j = self.j;
            if self.ws.arr[j] > self.ws.arr[j + 1] {
                self.ws.swap(j, j + 1);
                self.last_swap = Some((j, j + 1));
            }
            self.ws.loops += 1;
            self.j += 1;

            let (left, right) = self.last_swap.unzip();
            return self.ws.step(Highlights::new(Some(j), left, right));
        }
        self.ws.finish()
    }
}
