//! Fisher–Yates shuffle driven by [`XorShift`]
//!
//! Highlights: `[current position, drawn partner]`.

use super::kind::AlgorithmKind;
use super::rng::XorShift;
use super::step::{Highlights, Progress, StepSequence, Workspace};

/// Return a shuffled copy of `input`; the same seed gives the same order
pub fn shuffle(input: &[u32], seed: u32) -> Vec<u32> {
    let mut out = input.to_vec();
    let mut rng = XorShift::new(seed);
    for i in (1..out.len()).rev() {
        let r = rng.below(i + 1);
        out.swap(i, r);
    }
    out
}

/// Steppable shuffle, one step per exchange
#[derive(Debug, Clone)]
pub struct FisherYatesShuffle {
    ws: Workspace,
    rng: XorShift,
    /// Next position to fill, counting down; 0 means done
    i: usize,
    /// Partner drawn for `i`, swapped on the next advance
    pending: Option<usize>,
}

impl FisherYatesShuffle {
    pub fn new(input: &[u32], seed: u32) -> Self {
        let ws = Workspace::new(input);
        let i = ws.len().saturating_sub(1);
        Self {
            ws,
            rng: XorShift::new(seed),
            i,
            pending: None,
        }
    }
}

impl StepSequence for FisherYatesShuffle {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Shuffle
    }

    fn len(&self) -> usize {
        self.ws.len()
    }

    fn data(&self) -> &[u32] {
        &self.ws.arr
    }

    fn advance(&mut self) -> Progress<'_> {
        if let Some(r) = self.pending.take() {
            self.ws.swap(self.i, r);
            self.ws.loops += 1;
            self.i -= 1;
        }
        if self.i == 0 {
            return self.ws.finish();
        }

        let r = self.rng.below(self.i + 1);
        self.pending = Some(r);
        self.ws.step(Highlights::new(Some(self.i), Some(r), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::drain;

    #[test]
    fn test_golden_permutation() {
        assert_eq!(shuffle(&[1, 2, 3, 4, 5], 12_345_678), vec![5, 2, 1, 3, 4]);
        let input: Vec<u32> = (1..=10).collect();
        assert_eq!(shuffle(&input, 42), vec![7, 1, 4, 5, 8, 3, 2, 9, 6, 10]);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![1, 2, 3, 4];
        let _ = shuffle(&input, 1);
        assert_eq!(input, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stepped_matches_one_shot() {
        let input: Vec<u32> = (1..=16).collect();
        let mut seq = FisherYatesShuffle::new(&input, 777);
        let (steps, result) = drain(&mut seq);
        assert_eq!(steps.len(), 15);
        assert_eq!(result.data, shuffle(&input, 777));
        assert_eq!(result.swaps, 15);
        assert_eq!(result.loops, 15);
    }

    #[test]
    fn test_step_highlights_before_swap() {
        let mut seq = FisherYatesShuffle::new(&[1, 2, 3, 4, 5], 12_345_678);
        let (steps, _) = drain(&mut seq);
        assert_eq!(steps[0].0, vec![1, 2, 3, 4, 5]);
        assert_eq!(steps[0].1.slot(0), Some(4));
        assert!(steps.iter().all(|(_, h)| h.slot(2).is_none()));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(shuffle(&[], 3).is_empty());
        assert_eq!(shuffle(&[8], 3), vec![8]);
        let mut seq = FisherYatesShuffle::new(&[], 3);
        let (steps, result) = drain(&mut seq);
        assert!(steps.is_empty());
        assert!(result.data.is_empty());
    }
}
