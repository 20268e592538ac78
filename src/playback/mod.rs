//! Playback: playlist, frame pacing and timing
//!
//! Single-threaded and cooperative. Nothing here advances on its own; the
//! host's frame clock drives every step through [`Driver::tick`].

pub mod clock;
pub mod driver;
pub mod playlist;
pub mod summary;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{Driver, PlaybackState, TickOutcome};
pub use playlist::Playlist;
pub use summary::RunSummary;
pub use timer::Timer;
