//! Top-down merge sort, O(n log n)
//!
//! Sub-ranges are sorted in place before their parent merges them, so a
//! finished child range doubles as the sorted buffer the merge reads from.
//! Highlights: `[last placed, left cursor, right cursor]`, cursors mapped back
//! to indices of the whole array.

use super::kind::AlgorithmKind;
use super::step::{Highlights, Progress, StepSequence, Workspace};

/// Merge of `[left, mid)` and `[mid, right)` in progress
#[derive(Debug, Clone)]
struct Merge {
    left: usize,
    mid: usize,
    lbuf: Vec<u32>,
    rbuf: Vec<u32>,
    i: usize,
    j: usize,
    merged: Vec<u32>,
}

impl Merge {
    fn new(arr: &[u32], left: usize, mid: usize, right: usize) -> Self {
        Self {
            left,
            mid,
            lbuf: arr[left..mid].to_vec(),
            rbuf: arr[mid..right].to_vec(),
            i: 0,
            j: 0,
            merged: Vec::with_capacity(right - left),
        }
    }

    fn exhausted(&self) -> bool {
        self.i >= self.lbuf.len() || self.j >= self.rbuf.len()
    }
}

#[derive(Debug, Clone)]
enum Task {
    /// Sort the half-open range `[left, right)`
    Sort { left: usize, right: usize },
    /// Merge two sorted halves once both are done
    Merge { left: usize, mid: usize, right: usize },
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    ws: Workspace,
    tasks: Vec<Task>,
    active: Option<Merge>,
}

impl MergeSort {
    pub fn new(input: &[u32]) -> Self {
        let ws = Workspace::new(input);
        let tasks = vec![Task::Sort {
            left: 0,
            right: ws.len(),
        }];
        Self {
            ws,
            tasks,
            active: None,
        }
    }

    /// Expand a sort task without producing a step
    fn schedule(&mut self, left: usize, right: usize) {
        match right - left {
            0 | 1 => {}
            2 => {
                if self.ws.arr[left] >= self.ws.arr[left + 1] {
                    self.ws.swap(left, left + 1);
                }
            }
            _ => {
                let mid = (left + right) / 2;
                self.tasks.push(Task::Merge { left, mid, right });
                self.tasks.push(Task::Sort { left: mid, right });
                self.tasks.push(Task::Sort { left, right: mid });
            }
        }
    }
}

impl StepSequence for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn len(&self) -> usize {
        self.ws.len()
    }

    fn data(&self) -> &[u32] {
        &self.ws.arr
    }

    fn advance(&mut self) -> Progress<'_> {
        loop {
            let Some(mut m) = self.active.take() else {
                match self.tasks.pop() {
                    Some(Task::Sort { left, right }) => self.schedule(left, right),
                    Some(Task::Merge { left, mid, right }) => {
                        self.active = Some(Merge::new(&self.ws.arr, left, mid, right));
                    }
                    None => return self.ws.finish(),
                }
                continue;
            };

            let at = m.left + m.i + m.j;
            let value = if m.lbuf[m.i] < m.rbuf[m.j] {
                m.i += 1;
                m.lbuf[m.i - 1]
            } else {
                // ties come from the right buffer and count as a swap
                m.j += 1;
                self.ws.swaps += 1;
                m.rbuf[m.j - 1]
            };
            m.merged.push(value);
            self.ws.arr[at] = value;

            let highlights = Highlights::new(
                Some(at),
                (m.i < m.lbuf.len()).then_some(m.left + m.i),
                (m.j < m.rbuf.len()).then_some(m.mid + m.j),
            );

            if m.exhausted() {
                // right remainder first, then left; only one is non-empty
                m.merged.extend_from_slice(&m.rbuf[m.j..]);
                m.merged.extend_from_slice(&m.lbuf[m.i..]);
                let end = m.left + m.merged.len();
                self.ws.arr[m.left..end].copy_from_slice(&m.merged);
            } else {
                self.ws.loops += 1;
                self.active = Some(m);
            }
            return self.ws.step(highlights);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::drain;

    #[test]
    fn test_five_elements() {
        let mut sort = MergeSort::new(&[5, 1, 4, 2, 3]);
        let (steps, result) = drain(&mut sort);
        assert_eq!(steps.len(), 6);
        assert_eq!(result.data, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.loops, 4);
        assert_eq!(result.swaps, 6);
        assert_eq!(steps[0].1, Highlights::all(2, 2, 4));
        assert_eq!(steps[1].1, Highlights::new(Some(3), Some(2), None));
    }

    #[test]
    fn test_step_shows_in_progress_writes() {
        let mut sort = MergeSort::new(&[4, 3, 2, 1]);
        let (steps, result) = drain(&mut sort);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].0, vec![1, 4, 1, 2]);
        assert_eq!(result.data, vec![1, 2, 3, 4]);
        assert_eq!(result.loops, 1);
        assert_eq!(result.swaps, 4);
    }

    #[test]
    fn test_pair_sorted_without_steps() {
        let mut sort = MergeSort::new(&[2, 1]);
        let (steps, result) = drain(&mut sort);
        assert!(steps.is_empty());
        assert_eq!(result.data, vec![1, 2]);
        assert_eq!(result.swaps, 1);

        let mut sorted = MergeSort::new(&[1, 2]);
        let (_, result) = drain(&mut sorted);
        assert_eq!(result.swaps, 0);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty = MergeSort::new(&[]);
        let (steps, result) = drain(&mut empty);
        assert!(steps.is_empty());
        assert!(result.data.is_empty());

        let mut single = MergeSort::new(&[4]);
        let (steps, result) = drain(&mut single);
        assert!(steps.is_empty());
        assert_eq!(result.data, vec![4]);
    }
}
