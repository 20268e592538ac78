//! Renderer that records frames instead of drawing them

use crate::engine::{AlgorithmKind, Highlights, RunResult, Step};
use crate::playback::RunSummary;

use super::{Renderer, Upcoming};

/// Keeps the last frame and counters; used natively and in tests
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    steps: usize,
    idle_draws: usize,
    last_data: Vec<u32>,
    last_highlights: Highlights,
    upcoming: Option<Upcoming>,
    summaries: Vec<RunSummary>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step frames drawn so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn idle_draws(&self) -> usize {
        self.idle_draws
    }

    pub fn last_data(&self) -> &[u32] {
        &self.last_data
    }

    pub fn last_highlights(&self) -> Highlights {
        self.last_highlights
    }

    /// What the last result frame announced
    pub fn upcoming(&self) -> Option<Upcoming> {
        self.upcoming
    }

    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_idle(&mut self, next: Option<AlgorithmKind>) {
        self.idle_draws += 1;
        log::debug!("idle, next: {next:?}");
    }

    fn draw_step(&mut self, kind: AlgorithmKind, step: &Step<'_>) {
        self.steps += 1;
        self.last_data.clear();
        self.last_data.extend_from_slice(step.data);
        self.last_highlights = step.highlights;
        log::trace!("{kind} frame {}", self.steps);
    }

    fn draw_result(&mut self, result: &RunResult, summary: &RunSummary, upcoming: Upcoming) {
        self.last_data.clone_from(&result.data);
        self.last_highlights = Highlights::NONE;
        self.upcoming = Some(upcoming);
        self.summaries.push(summary.clone());
        log::debug!("{summary} -> {upcoming:?}");
    }
}
