//! Frame-paced playback driver
//!
//! Pulls one step from the active algorithm per frame tick, times only the
//! stepping itself and moves through the playlist. The host owns the frame
//! clock: it calls [`Driver::tick`] from its animation callback and keeps
//! scheduling frames while [`Driver::wants_frame`] is true.

use crate::engine::{AlgorithmKind, Highlights, Progress, RunResult, Step, time_seed};
use crate::renderer::{Renderer, Upcoming};
use crate::settings::Settings;

use super::clock::Clock;
use super::playlist::Playlist;
use super::summary::RunSummary;
use super::timer::Timer;

/// Slack when comparing frame gaps, so timestamps exactly one interval apart
/// are never throttled by rounding
const FRAME_SLACK_MS: f64 = 1e-6;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Waiting for a start/resume trigger
    Idle,
    /// Advancing one step per frame
    Running,
    /// Playlist exhausted; triggers are ignored
    Finished,
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Not running; nothing happened
    Inactive,
    /// Too soon after the previous step; nothing happened
    Throttled,
    /// One step was drawn
    Stepped,
    /// The active algorithm finished
    Completed(RunSummary),
}

/// Last thing handed to the renderer, kept for redraws
#[derive(Debug, Clone)]
enum LastFrame {
    Intro,
    Step(AlgorithmKind, Highlights),
    Result {
        result: RunResult,
        summary: RunSummary,
        upcoming: Upcoming,
    },
}

pub struct Driver<C: Clock> {
    playlist: Playlist,
    state: PlaybackState,
    timer: Timer,
    clock: C,
    frame_interval_ms: f64,
    last_tick: Option<f64>,
    pause_between: bool,
    last_frame: LastFrame,
    summaries: Vec<RunSummary>,
}

impl<C: Clock> Driver<C> {
    /// Create an idle driver; an empty playlist starts out finished
    pub fn new(playlist: Playlist, frame_interval_ms: f64, clock: C) -> Self {
        let state = if playlist.is_exhausted() {
            PlaybackState::Finished
        } else {
            PlaybackState::Idle
        };
        Self {
            playlist,
            state,
            timer: Timer::new(),
            clock,
            frame_interval_ms,
            last_tick: None,
            pause_between: false,
            last_frame: LastFrame::Intro,
            summaries: Vec::new(),
        }
    }

    /// Build the playlist and pacing from settings
    pub fn from_settings(settings: &Settings, clock: C) -> Self {
        let seed = settings.seed.unwrap_or_else(time_seed);
        log::info!(
            "Playlist seeded with {} ({} algorithms, n = {})",
            seed,
            settings.playlist.len(),
            settings.sample_size
        );
        let playlist = Playlist::from_settings(settings, seed);
        Self::new(playlist, settings.frame_interval_ms(), clock)
            .with_pause_between(settings.pause_between)
    }

    /// Go idle after each algorithm instead of continuing straight on
    pub fn with_pause_between(mut self, pause_between: bool) -> Self {
        self.pause_between = pause_between;
        self
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether the host should schedule another frame
    pub fn wants_frame(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    pub fn current_kind(&self) -> Option<AlgorithmKind> {
        self.playlist.current_kind()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Summaries of completed algorithms, in play order
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Accumulated stepping time of the active algorithm
    pub fn elapsed_ms(&self) -> f64 {
        self.timer.elapsed(self.clock.now_ms())
    }

    pub fn resume(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Idle {
            self.state = PlaybackState::Running;
            log::info!("Playback resumed ({:?})", self.current_kind());
        }
        self.state
    }

    /// Stop scheduling frames; the active sequence keeps its position
    pub fn pause(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Idle;
            log::info!("Playback paused ({:?})", self.current_kind());
        }
        self.state
    }

    /// Play/pause trigger
    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Idle => self.resume(),
            PlaybackState::Running => self.pause(),
            PlaybackState::Finished => PlaybackState::Finished,
        }
    }

    /// Advance at most one step, drawing it through `renderer`.
    ///
    /// `timestamp_ms` comes from the frame clock. Ticks closer together than
    /// the frame interval are ignored; the first tick always advances.
    pub fn tick<R: Renderer + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        renderer: &mut R,
    ) -> TickOutcome {
        if self.state != PlaybackState::Running {
            return TickOutcome::Inactive;
        }
        if let Some(last) = self.last_tick {
            if timestamp_ms - last + FRAME_SLACK_MS < self.frame_interval_ms {
                return TickOutcome::Throttled;
            }
        }
        self.last_tick = Some(timestamp_ms);

        let Some(seq) = self.playlist.current_mut() else {
            self.state = PlaybackState::Finished;
            return TickOutcome::Inactive;
        };
        let kind = seq.kind();

        self.timer.resume(self.clock.now_ms());
        let result = match seq.advance() {
            Progress::Step(step) => {
                self.timer.pause(self.clock.now_ms());
                log::trace!("{kind} step {:?}", step.highlights);
                renderer.draw_step(kind, &step);
                self.last_frame = LastFrame::Step(kind, step.highlights);
                return TickOutcome::Stepped;
            }
            Progress::Done(result) => result,
        };
        self.complete(kind, result, renderer)
    }

    fn complete<R: Renderer + ?Sized>(
        &mut self,
        kind: AlgorithmKind,
        result: RunResult,
        renderer: &mut R,
    ) -> TickOutcome {
        let elapsed = self.timer.stop(self.clock.now_ms()).unwrap_or_default();
        let summary = RunSummary::new(kind, &result, elapsed);
        log::info!("{summary}");

        let upcoming = match self.playlist.next_kind() {
            Some(next) if self.pause_between => Upcoming::AfterClick(next),
            Some(next) => Upcoming::Immediately(next),
            None => Upcoming::End,
        };
        renderer.draw_result(&result, &summary, upcoming);

        self.summaries.push(summary.clone());
        self.last_frame = LastFrame::Result {
            result,
            summary: summary.clone(),
            upcoming,
        };

        if self.playlist.advance() {
            self.timer.reset();
            if self.pause_between {
                self.state = PlaybackState::Idle;
            }
        } else {
            self.state = PlaybackState::Finished;
            log::info!("Playlist finished after {} algorithms", self.playlist.played());
        }
        TickOutcome::Completed(summary)
    }

    /// Re-emit the last frame, e.g. after the surface was resized
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match &self.last_frame {
            LastFrame::Intro => renderer.draw_idle(self.playlist.current_kind()),
            LastFrame::Step(kind, highlights) => {
                if let Some(seq) = self.playlist.current() {
                    let step = Step {
                        data: seq.data(),
                        highlights: *highlights,
                    };
                    renderer.draw_step(*kind, &step);
                }
            }
            LastFrame::Result {
                result,
                summary,
                upcoming,
            } => renderer.draw_result(result, summary, *upcoming),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BubbleSort, InsertionSort, StepSequence};
    use crate::playback::ManualClock;
    use crate::renderer::HeadlessRenderer;

    const FRAME: f64 = 1000.0 / 30.0;

    fn driver(entries: Vec<Box<dyn StepSequence>>) -> (Driver<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Driver::new(Playlist::new(entries), FRAME, clock.clone()), clock)
    }

    /// Tick once per frame until the driver stops running
    fn play(driver: &mut Driver<ManualClock>, renderer: &mut HeadlessRenderer, start: f64) -> f64 {
        let mut t = start;
        while driver.wants_frame() {
            t += FRAME;
            driver.tick(t, renderer);
        }
        t
    }

    #[test]
    fn test_idle_until_triggered() {
        let (mut driver, _) = driver(vec![Box::new(BubbleSort::new(&[3, 1, 2]))]);
        let mut renderer = HeadlessRenderer::new();
        assert_eq!(driver.state(), PlaybackState::Idle);
        assert_eq!(driver.tick(0.0, &mut renderer), TickOutcome::Inactive);
        assert_eq!(renderer.steps(), 0);
    }

    #[test]
    fn test_steps_then_completes() {
        let (mut driver, _) = driver(vec![Box::new(BubbleSort::new(&[3, 1, 2]))]);
        let mut renderer = HeadlessRenderer::new();
        driver.resume();

        for n in 0..3 {
            let t = n as f64 * FRAME;
            assert_eq!(driver.tick(t, &mut renderer), TickOutcome::Stepped);
        }
        match driver.tick(3.0 * FRAME, &mut renderer) {
            TickOutcome::Completed(summary) => {
                assert_eq!(summary.kind, AlgorithmKind::Bubble);
                assert_eq!(summary.loops, 3);
                assert_eq!(summary.swaps, 2);
                assert_eq!(summary.sample_size, 3);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(driver.state(), PlaybackState::Finished);
        assert!(!driver.wants_frame());
        assert_eq!(renderer.steps(), 3);
        assert_eq!(renderer.last_data(), &[1, 2, 3]);
        assert_eq!(renderer.upcoming(), Some(Upcoming::End));
    }

    #[test]
    fn test_throttled_tick_changes_nothing() {
        let (mut driver, clock) = driver(vec![Box::new(BubbleSort::new(&[3, 1, 2]))]);
        let mut renderer = HeadlessRenderer::new();
        driver.resume();
        assert_eq!(driver.tick(100.0, &mut renderer), TickOutcome::Stepped);
        let data = renderer.last_data().to_vec();

        clock.advance(5.0);
        let elapsed = driver.elapsed_ms();
        assert_eq!(driver.tick(100.0 + FRAME / 2.0, &mut renderer), TickOutcome::Throttled);
        assert_eq!(renderer.steps(), 1);
        assert_eq!(renderer.last_data(), data.as_slice());
        assert_eq!(driver.elapsed_ms(), elapsed);

        assert_eq!(driver.tick(100.0 + FRAME, &mut renderer), TickOutcome::Stepped);
        assert_eq!(renderer.steps(), 2);
    }

    #[test]
    fn test_ticks_one_interval_apart_all_step() {
        let entries: Vec<Box<dyn StepSequence>> =
            vec![Box::new(InsertionSort::new(&(1..=40).rev().collect::<Vec<u32>>()))];
        let (mut driver, _) = driver(entries);
        let mut renderer = HeadlessRenderer::new();
        driver.resume();
        for n in 0..40 {
            let t = n as f64 * FRAME;
            assert_eq!(driver.tick(t, &mut renderer), TickOutcome::Stepped, "frame {n}");
        }
        assert_eq!(renderer.steps(), 40);
    }

    #[test]
    fn test_pause_resume_keeps_position() {
        let (mut driver, _) = driver(vec![Box::new(InsertionSort::new(&[4, 3, 2, 1]))]);
        let mut reference = InsertionSort::new(&[4, 3, 2, 1]);
        let mut renderer = HeadlessRenderer::new();

        driver.resume();
        driver.tick(0.0, &mut renderer);
        reference.advance();

        assert_eq!(driver.toggle(), PlaybackState::Idle);
        assert_eq!(driver.tick(FRAME, &mut renderer), TickOutcome::Inactive);
        assert_eq!(driver.toggle(), PlaybackState::Running);

        driver.tick(2.0 * FRAME, &mut renderer);
        let expected = reference.advance().into_step().map(|s| (s.data.to_vec(), s.highlights));
        assert_eq!(
            Some((renderer.last_data().to_vec(), renderer.last_highlights())),
            expected
        );
    }

    #[test]
    fn test_advances_through_playlist() {
        let (mut driver, _) = driver(vec![
            Box::new(BubbleSort::new(&[2, 1])),
            Box::new(InsertionSort::new(&[2, 1])),
        ]);
        let mut renderer = HeadlessRenderer::new();
        driver.resume();
        play(&mut driver, &mut renderer, 0.0);

        assert!(driver.is_finished());
        let kinds: Vec<_> = driver.summaries().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![AlgorithmKind::Bubble, AlgorithmKind::Insertion]);
        assert_eq!(renderer.summaries().len(), 2);
        assert_eq!(driver.playlist().played(), 2);
    }

    #[test]
    fn test_pause_between_goes_idle() {
        let (driver, _) = driver(vec![
            Box::new(BubbleSort::new(&[2, 1])),
            Box::new(InsertionSort::new(&[2, 1])),
        ]);
        let mut driver = driver.with_pause_between(true);
        let mut renderer = HeadlessRenderer::new();
        driver.resume();
        let t = play(&mut driver, &mut renderer, 0.0);

        assert_eq!(driver.state(), PlaybackState::Idle);
        assert_eq!(driver.current_kind(), Some(AlgorithmKind::Insertion));
        assert_eq!(
            renderer.upcoming(),
            Some(Upcoming::AfterClick(AlgorithmKind::Insertion))
        );

        driver.resume();
        play(&mut driver, &mut renderer, t);
        assert!(driver.is_finished());
    }

    #[test]
    fn test_triggers_ignored_when_finished() {
        let (mut driver, _) = driver(vec![Box::new(BubbleSort::new(&[1]))]);
        let mut renderer = HeadlessRenderer::new();
        driver.resume();
        assert!(matches!(driver.tick(0.0, &mut renderer), TickOutcome::Completed(_)));
        assert_eq!(driver.toggle(), PlaybackState::Finished);
        assert_eq!(driver.resume(), PlaybackState::Finished);
        assert_eq!(driver.tick(FRAME, &mut renderer), TickOutcome::Inactive);
    }

    #[test]
    fn test_empty_playlist_is_finished() {
        let (mut driver, _) = driver(Vec::new());
        assert!(driver.is_finished());
        assert_eq!(driver.toggle(), PlaybackState::Finished);
    }

    #[test]
    fn test_timer_excludes_frame_gaps() {
        struct SlowRenderer {
            clock: ManualClock,
            inner: HeadlessRenderer,
        }
        impl Renderer for SlowRenderer {
            fn draw_idle(&mut self, next: Option<AlgorithmKind>) {
                self.inner.draw_idle(next);
            }
            fn draw_step(&mut self, kind: AlgorithmKind, step: &Step<'_>) {
                // drawing happens after the timer is paused
                self.clock.advance(50.0);
                self.inner.draw_step(kind, step);
            }
            fn draw_result(
                &mut self,
                result: &RunResult,
                summary: &RunSummary,
                upcoming: Upcoming,
            ) {
                self.inner.draw_result(result, summary, upcoming);
            }
        }

        let (mut driver, clock) = driver(vec![Box::new(BubbleSort::new(&[3, 1, 2]))]);
        let mut renderer = SlowRenderer {
            clock: clock.clone(),
            inner: HeadlessRenderer::new(),
        };
        driver.resume();
        let mut t = 0.0;
        loop {
            t += FRAME;
            if let TickOutcome::Completed(summary) = driver.tick(t, &mut renderer) {
                assert_eq!(summary.elapsed_ms, 0.0);
                break;
            }
        }
    }

    #[test]
    fn test_replay_redraws_last_frame() {
        let (mut driver, _) = driver(vec![
            Box::new(BubbleSort::new(&[3, 1, 2])),
            Box::new(BubbleSort::new(&[2, 1])),
        ]);
        let mut renderer = HeadlessRenderer::new();

        driver.replay(&mut renderer);
        assert_eq!(renderer.idle_draws(), 1);

        driver.resume();
        driver.tick(0.0, &mut renderer);
        let shown = (renderer.last_data().to_vec(), renderer.last_highlights());

        let mut fresh = HeadlessRenderer::new();
        driver.replay(&mut fresh);
        assert_eq!((fresh.last_data().to_vec(), fresh.last_highlights()), shown);

        driver.tick(FRAME, &mut renderer);
        driver.tick(2.0 * FRAME, &mut renderer);
        driver.tick(3.0 * FRAME, &mut renderer);
        let mut after = HeadlessRenderer::new();
        driver.replay(&mut after);
        assert_eq!(after.summaries().len(), 1);
        assert_eq!(after.last_data(), &[1, 2, 3]);
    }
}
