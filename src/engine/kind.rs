//! Algorithm identities and construction

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bubble::BubbleSort;
use super::insertion::InsertionSort;
use super::merge::MergeSort;
use super::quick::QuickSort;
use super::selection::SelectionSort;
use super::shuffle::FisherYatesShuffle;
use super::step::StepSequence;

/// The algorithms the visualizer can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Shuffle,
}

impl AlgorithmKind {
    /// Default playlist order
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Selection,
        AlgorithmKind::Insertion,
        AlgorithmKind::Quick,
        AlgorithmKind::Merge,
        AlgorithmKind::Shuffle,
    ];

    /// Short configuration key
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Merge => "merge",
            AlgorithmKind::Shuffle => "shuffle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bubble" | "bubblesort" => Some(AlgorithmKind::Bubble),
            "selection" | "selectionsort" => Some(AlgorithmKind::Selection),
            "insertion" | "insertionsort" => Some(AlgorithmKind::Insertion),
            "quick" | "quicksort" => Some(AlgorithmKind::Quick),
            "merge" | "mergesort" => Some(AlgorithmKind::Merge),
            "shuffle" | "fisheryates" | "fisheryatesshuffle" => Some(AlgorithmKind::Shuffle),
            _ => None,
        }
    }

    /// Name shown on screen and in summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "BubbleSort",
            AlgorithmKind::Selection => "SelectionSort",
            AlgorithmKind::Insertion => "InsertionSort",
            AlgorithmKind::Quick => "QuickSort",
            AlgorithmKind::Merge => "MergeSort",
            AlgorithmKind::Shuffle => "FisherYatesShuffle",
        }
    }

    /// O(n²) sorts get the smaller sample so they finish in reasonable time
    pub fn is_quadratic(&self) -> bool {
        matches!(
            self,
            AlgorithmKind::Bubble | AlgorithmKind::Selection | AlgorithmKind::Insertion
        )
    }

    /// Whether the result should come out ascending
    pub fn sorts(&self) -> bool {
        *self != AlgorithmKind::Shuffle
    }

    /// Build a fresh instance over a private copy of `data`.
    ///
    /// `seed` is only used by the shuffle.
    pub fn instantiate(&self, data: &[u32], seed: u32) -> Box<dyn StepSequence> {
        match self {
            AlgorithmKind::Bubble => Box::new(BubbleSort::new(data)),
            AlgorithmKind::Selection => Box::new(SelectionSort::new(data)),
            AlgorithmKind::Insertion => Box::new(InsertionSort::new(data)),
            AlgorithmKind::Quick => Box::new(QuickSort::new(data)),
            AlgorithmKind::Merge => Box::new(MergeSort::new(data)),
            AlgorithmKind::Shuffle => Box::new(FisherYatesShuffle::new(data, seed)),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
