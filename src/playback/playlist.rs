//! Ordered algorithm instances played one after another

use std::collections::VecDeque;

use crate::engine::{AlgorithmKind, StepSequence, shuffle};
use crate::settings::Settings;

/// Algorithm instances in play order.
///
/// The front entry is the active one; finished entries are dropped, never
/// replayed.
pub struct Playlist {
    entries: VecDeque<Box<dyn StepSequence>>,
    played: usize,
}

impl Playlist {
    pub fn new(entries: Vec<Box<dyn StepSequence>>) -> Self {
        Self {
            entries: entries.into(),
            played: 0,
        }
    }

    /// Build the playlist described by `settings`.
    ///
    /// Values are `1..=sample_size`. The O(n²) sorts share one shuffled prefix
    /// of `quadratic_sample_size` values, the other sorts share the shuffled
    /// full range, and the shuffle starts from the unshuffled range.
    pub fn from_settings(settings: &Settings, seed: u32) -> Self {
        let data: Vec<u32> = (1..=settings.sample_size as u32).collect();
        let quadratic_len = settings.quadratic_sample_size.min(data.len());
        let small = shuffle(&data[..quadratic_len], seed);
        let full = shuffle(&data, seed);

        let entries = settings
            .playlist
            .iter()
            .map(|kind| {
                let input = match kind {
                    AlgorithmKind::Shuffle => &data,
                    k if k.is_quadratic() => &small,
                    _ => &full,
                };
                kind.instantiate(input, seed)
            })
            .collect();
        Self::new(entries)
    }

    pub fn current(&self) -> Option<&dyn StepSequence> {
        self.entries.front().map(|seq| seq.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn StepSequence + 'static)> {
        self.entries.front_mut().map(|seq| seq.as_mut())
    }

    pub fn current_kind(&self) -> Option<AlgorithmKind> {
        self.current().map(|seq| seq.kind())
    }

    /// Kind of the entry after the current one
    pub fn next_kind(&self) -> Option<AlgorithmKind> {
        self.entries.get(1).map(|seq| seq.kind())
    }

    /// Discard the current entry and move to the next one.
    ///
    /// Returns whether another entry is available.
    pub fn advance(&mut self) -> bool {
        if self.entries.pop_front().is_some() {
            self.played += 1;
        }
        !self.entries.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries already played
    pub fn played(&self) -> usize {
        self.played
    }

    /// Entries not yet finished, current included
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    pub fn kinds(&self) -> Vec<AlgorithmKind> {
        self.entries.iter().map(|seq| seq.kind()).collect()
    }
}
