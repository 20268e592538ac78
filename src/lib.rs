//! Sort Visualizer - step-by-step sorting animations on a canvas
//!
//! Core modules:
//! - `engine`: Resumable sorting/shuffling state machines (pure, deterministic)
//! - `playback`: Playlist, frame pacing and timing
//! - `renderer`: Histogram layout and drawing backends
//! - `settings`: Page-embedded configuration
//! - `error`: Start-up errors

pub mod engine;
pub mod error;
pub mod playback;
pub mod renderer;
pub mod settings;

pub use engine::{AlgorithmKind, RunResult, Step, StepSequence};
pub use error::InitError;
pub use playback::{Driver, PlaybackState, RunSummary};
pub use settings::{Settings, SettingsError};

/// Visualizer configuration constants
pub mod consts {
    /// Elements for the O(n log n) sorts and the shuffle
    pub const DEFAULT_SAMPLE_SIZE: usize = 128;
    /// Upper bound for any sample size
    pub const MAX_SAMPLE_SIZE: usize = 128;
    /// The O(n²) sorts get `sample_size / QUADRATIC_SAMPLE_DIVISOR` elements
    pub const QUADRATIC_SAMPLE_DIVISOR: usize = 4;

    /// Animation rate (steps per second)
    pub const DEFAULT_FPS: f64 = 30.0;
    pub const MIN_FPS: f64 = 1.0;
    pub const MAX_FPS: f64 = 120.0;

    /// DOM ids
    pub const CANVAS_ID: &str = "canvas";
    pub const WRAPPER_ID: &str = "wrapper";
}
