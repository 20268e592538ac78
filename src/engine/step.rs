//! Step and result records shared by every algorithm

use serde::{Deserialize, Serialize};

use super::kind::AlgorithmKind;

/// Number of positional highlight slots carried by a step
pub const HIGHLIGHT_SLOTS: usize = 3;

/// Up to three highlighted indices with positional meaning.
///
/// Slot roles depend on the algorithm (e.g. pivot / low cursor / high
/// cursor). When several slots name the same index the later slot wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlights([Option<usize>; HIGHLIGHT_SLOTS]);

impl Highlights {
    pub const NONE: Highlights = Highlights([None; HIGHLIGHT_SLOTS]);

    pub fn new(a: Option<usize>, b: Option<usize>, c: Option<usize>) -> Self {
        Self([a, b, c])
    }

    /// All three slots present
    pub fn all(a: usize, b: usize, c: usize) -> Self {
        Self([Some(a), Some(b), Some(c)])
    }

    pub fn slot(&self, slot: usize) -> Option<usize> {
        self.0.get(slot).copied().flatten()
    }

    pub fn slots(&self) -> [Option<usize>; HIGHLIGHT_SLOTS] {
        self.0
    }

    /// Highest slot that highlights `index`, if any
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        self.0.iter().rposition(|s| *s == Some(index))
    }

    /// Iterate over the present indices
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().flatten().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// One observable unit of progress.
///
/// `data` borrows the algorithm's own buffer, so the renderer sees the
/// in-progress array without being able to modify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub data: &'a [u32],
    pub highlights: Highlights,
}

/// Terminal value of a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub data: Vec<u32>,
    pub loops: u64,
    pub swaps: u64,
}

/// Outcome of advancing a sequence once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress<'a> {
    Step(Step<'a>),
    Done(RunResult),
}

impl<'a> Progress<'a> {
    pub fn is_done(&self) -> bool {
        matches!(self, Progress::Done(_))
    }

    pub fn into_step(self) -> Option<Step<'a>> {
        match self {
            Progress::Step(step) => Some(step),
            Progress::Done(_) => None,
        }
    }
}

/// A lazily driven, single-use sequence of steps ending in a [`RunResult`].
///
/// Each call to [`advance`](StepSequence::advance) performs one bounded unit
/// of work. Once the sequence has finished, further calls return the same
/// result without doing more work.
pub trait StepSequence {
    fn kind(&self) -> AlgorithmKind;

    /// Number of elements being processed
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current array state
    fn data(&self) -> &[u32];

    fn advance(&mut self) -> Progress<'_>;
}

/// Array copy plus loop/swap counters owned by one algorithm instance
#[derive(Debug, Clone)]
pub struct Workspace {
    pub arr: Vec<u32>,
    pub loops: u64,
    pub swaps: u64,
    finished: bool,
}

impl Workspace {
    /// Copy `input`; the caller's slice is never aliased
    pub fn new(input: &[u32]) -> Self {
        Self {
            arr: input.to_vec(),
            loops: 0,
            swaps: 0,
            finished: false,
        }
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Exchange two elements and count the swap
    pub fn swap(&mut self, a: usize, b: usize) {
        self.arr.swap(a, b);
        self.swaps += 1;
    }

    pub fn step(&self, highlights: Highlights) -> Progress<'_> {
        Progress::Step(Step {
            data: &self.arr,
            highlights,
        })
    }

    /// Mark the sequence finished and produce its result
    pub fn finish(&mut self) -> Progress<'_> {
        if !self.finished {
            log::trace!(
                "sequence finished: {} elements, {} loops, {} swaps",
                self.arr.len(),
                self.loops,
                self.swaps
            );
        }
        self.finished = true;
        Progress::Done(self.result())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn result(&self) -> RunResult {
        RunResult {
            data: self.arr.clone(),
            loops: self.loops,
            swaps: self.swaps,
        }
    }
}
