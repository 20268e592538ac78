//! Drawing collaborators
//!
//! The driver only talks to the [`Renderer`] trait. The browser build draws on
//! a Canvas2D surface; native builds and tests use [`HeadlessRenderer`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod headless;
pub mod histogram;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use headless::HeadlessRenderer;
pub use histogram::{Bar, Rgb, layout};

use crate::engine::{AlgorithmKind, RunResult, Step};
use crate::playback::RunSummary;

/// What follows a finished algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upcoming {
    /// Next algorithm waits for the play trigger
    AfterClick(AlgorithmKind),
    /// Next algorithm starts on the next frame
    Immediately(AlgorithmKind),
    /// Playlist exhausted
    End,
}

/// Receives frames from the playback driver
pub trait Renderer {
    /// Nothing has run yet
    fn draw_idle(&mut self, next: Option<AlgorithmKind>);

    fn draw_step(&mut self, kind: AlgorithmKind, step: &Step<'_>);

    fn draw_result(&mut self, result: &RunResult, summary: &RunSummary, upcoming: Upcoming);
}

/// One line of status text; `line` is 1-based from the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub line: u32,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

pub fn intro_lines(next: Option<AlgorithmKind>) -> Vec<StatusLine> {
    let mut lines = vec![StatusLine::new("Visualize Sorting Algorithms.", 1)];
    if let Some(kind) = next {
        lines.push(StatusLine::new(format!("Click to Next! ({kind})"), 2));
    }
    lines
}

pub fn step_lines(kind: AlgorithmKind) -> Vec<StatusLine> {
    vec![StatusLine::new(format!("Algorithm: {kind}"), 1)]
}

pub fn result_lines(summary: &RunSummary, upcoming: Upcoming) -> Vec<StatusLine> {
    let follow = match upcoming {
        Upcoming::AfterClick(kind) => format!("Click to Next! ({kind})"),
        Upcoming::Immediately(kind) => format!("Next: {kind}"),
        Upcoming::End => "The end. Thank you for using.".to_string(),
    };
    vec![
        StatusLine::new(summary.to_string(), 1),
        StatusLine::new(follow, 2),
    ]
}
