//! Step-sequence algorithm engine
//!
//! Every algorithm here is a resumable state machine. This module must stay
//! pure and deterministic:
//! - One bounded unit of work per `advance` call
//! - Seeded RNG only
//! - No timing, rendering or platform dependencies

pub mod bubble;
pub mod insertion;
pub mod kind;
pub mod merge;
pub mod quick;
pub mod rng;
pub mod selection;
pub mod shuffle;
pub mod step;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use kind::AlgorithmKind;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use rng::{XorShift, time_seed};
pub use selection::SelectionSort;
pub use shuffle::{FisherYatesShuffle, shuffle};
pub use step::{HIGHLIGHT_SLOTS, Highlights, Progress, RunResult, Step, StepSequence, Workspace};

/// Drive a sequence to completion, returning the step count and result
pub fn run_to_end(seq: &mut dyn StepSequence) -> (usize, RunResult) {
    let mut steps = 0;
    loop {
        match seq.advance() {
            Progress::Step(_) => steps += 1,
            Progress::Done(result) => return (steps, result),
        }
    }
}

/// Drive a sequence to completion, keeping a copy of every step
#[cfg(test)]
pub(crate) fn drain(seq: &mut dyn StepSequence) -> (Vec<(Vec<u32>, Highlights)>, RunResult) {
    let mut steps = Vec::new();
    loop {
        match seq.advance() {
            Progress::Step(step) => steps.push((step.data.to_vec(), step.highlights)),
            Progress::Done(result) => return (steps, result),
        }
    }
}
