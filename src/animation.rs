//! Animated replay of recorded render events.
//!
//! Carving and solving run to completion up front against a [`Recorder`](crate::render::Recorder).
//! The [`AnimationManager`] then plays the recorded events back one tick at a time, which keeps the
//! pacing delay entirely out of the algorithms.

use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

use crate::{
    cell::Position,
    render::{CellPaint, MoveKind, RenderEvent},
};

/// Longest wait for input between two redraws.
pub(crate) const IDLE_POLL: Duration = Duration::from_millis(100);

/// A move drawn on screen.
pub(crate) type DrawnMove = (Position, Position, MoveKind);

/// Replay state of a recorded carve and solve.
///
/// This structure keeps the recorded events, the index of the next one to apply and what has been
/// drawn so far: the latest paint of every cell and the moves in the order they were made.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Events to replay.
    ///
    /// This field holds every event reported by the generator and the solver, in the order they
    /// were reported. Ticks split it into frames.
    pub(crate) steps: Vec<RenderEvent>,
    /// Index of the next event to apply.
    ///
    /// This field points one past the last applied event, so it equals the length of `steps` once
    /// the replay is over.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame.
    ///
    /// This field is moved forward by whole frame delays, so time left over from one update is
    /// carried into the next one.
    pub(crate) last_update_time: Instant,
    /// Delay between two frames.
    ///
    /// This field paces the replay; a zero delay applies the whole replay as soon as it is loaded.
    pub(crate) step_delay: Duration,
    /// Latest paint of every drawn cell.
    ///
    /// This field is keyed by position so that a repainted cell replaces its earlier paint.
    pub(crate) cells: BTreeMap<Position, CellPaint>,
    /// Moves drawn so far, oldest first.
    ///
    /// This field keeps undone moves too, since the replay shows them in their own colour.
    pub(crate) moves: Vec<DrawnMove>,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl AnimationManager {
    /// Creates an empty animation manager pacing frames by `step_delay`.
    pub(crate) fn new(step_delay: Duration) -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            step_delay,
            cells: BTreeMap::new(),
            moves: Vec::new(),
        }
    }

    /// Rewinds the replay to the first event.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.cells.clear();
        self.moves.clear();
        self.last_update_time = Instant::now();
    }

    /// Drops every recorded event and rewinds.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Replaces the recorded events with `steps` and rewinds.
    ///
    /// Without a pacing delay the whole replay is applied immediately.
    pub(crate) fn load(&mut self, steps: Vec<RenderEvent>) {
        self.steps = steps;
        self.reset();

        if self.step_delay.is_zero() {
            self.finish();
        }
    }

    /// Returns whether every recorded event has been applied.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Advances the replay by as many frames as pacing delays have elapsed since the last frame.
    pub(crate) fn update(&mut self) {
        if self.step_delay.is_zero() {
            self.finish();
            return;
        }

        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_update_time);
        let delay = self.step_delay.as_nanos();
        let frames = elapsed.as_nanos() / delay;
        if frames == 0 {
            return;
        }

        let mut applied = 0;
        while applied < frames && !self.is_finished() {
            self.advance();
            applied += 1;
        }

        let leftover = u64::try_from(elapsed.as_nanos() % delay).unwrap_or(u64::MAX);
        self.last_update_time = now
            .checked_sub(Duration::from_nanos(leftover))
            .unwrap_or(now);
    }

    /// Returns how long the event loop may block waiting for input before the next frame is due.
    pub(crate) fn poll_timeout(&self) -> Duration {
        if self.step_delay.is_zero() || self.is_finished() {
            IDLE_POLL
        } else {
            self.step_delay.min(IDLE_POLL)
        }
    }

    /// Applies events up to and including the next tick.
    pub(crate) fn advance(&mut self) {
        while let Some(step) = self.steps.get(self.current_index).copied() {
            self.current_index += 1;
            match step {
                RenderEvent::Cell { position, paint } => {
                    let _ = self.cells.insert(position, paint);
                }
                RenderEvent::Move { from, to, kind } => self.moves.push((from, to, kind)),
                RenderEvent::Tick => break,
            }
        }
    }

    /// Applies every remaining event.
    pub(crate) fn finish(&mut self) {
        while !self.is_finished() {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::{
        cell::Side,
        generator::Generator,
        grid::Grid,
        render::{Recorder, Renderer as _},
        solver,
    };

    /// Records the full carve and solve of a small maze.
    fn record() -> Vec<RenderEvent> {
        let mut recorder = Recorder::new(Color::Black);
        let grid = Grid::new(4, 3).expect("grid should be valid");
        grid.draw(&mut recorder);
        let mut maze = Generator::seeded(8)
            .carve(grid, &mut recorder)
            .expect("carving should succeed");
        let _ = solver::solve(&mut maze, &mut recorder);

        recorder.into_events()
    }

    #[test]
    fn test_advance_stops_at_ticks() {
        let mut recorder = Recorder::default();
        recorder.draw_move(Position::new(0, 0), Position::new(1, 0), MoveKind::Forward);
        recorder.tick();
        recorder.draw_move(Position::new(1, 0), Position::new(0, 0), MoveKind::Undo);
        recorder.tick();

        let mut animation = AnimationManager::new(Duration::from_secs(3600));
        animation.load(recorder.into_events());
        assert!(animation.moves.is_empty(), "paced replay should start empty");

        animation.advance();
        assert_eq!(animation.moves.len(), 1);
        assert!(!animation.is_finished());

        animation.advance();
        assert_eq!(animation.moves.len(), 2);
        assert!(animation.is_finished());
    }

    #[test]
    fn test_load_without_delay_applies_everything() {
        let mut animation = AnimationManager::default();

        animation.load(record());

        assert!(animation.is_finished());
        assert_eq!(animation.cells.len(), 12);
        assert!(!animation.moves.is_empty());
    }

    #[test]
    fn test_final_paint_matches_carved_walls() {
        let mut animation = AnimationManager::default();
        animation.load(record());

        let grid = Grid::new(4, 3).expect("grid should be valid");
        let maze = Generator::seeded(8)
            .carve(grid, &mut crate::render::NoopRenderer)
            .expect("carving should succeed");

        for cell in maze.grid().cells() {
            let paint = animation
                .cells
                .get(&cell.position())
                .expect("every cell should have been drawn");
            for side in Side::ALL {
                assert_eq!(
                    paint.side(side) == Color::Black,
                    !cell.has_wall(side),
                    "paint and walls disagree at {} {side:?}",
                    cell.position()
                );
            }
        }
    }

    /// Counts the ticks among the events applied so far.
    fn applied_ticks(animation: &AnimationManager) -> usize {
        animation
            .steps
            .iter()
            .take(animation.current_index)
            .filter(|step| matches!(step, RenderEvent::Tick))
            .count()
    }

    #[test]
    fn test_update_catches_up_on_elapsed_frames() {
        let delay = Duration::from_millis(10);
        let mut animation = AnimationManager::new(delay);
        animation.load(record());

        std::thread::sleep(delay * 4);
        animation.update();

        assert!(
            applied_ticks(&animation) >= 4,
            "only {} frame(s) applied after four delays",
            applied_ticks(&animation)
        );
    }

    #[test]
    fn test_poll_timeout_follows_delay() {
        let mut animation = AnimationManager::new(Duration::from_millis(20));
        animation.load(record());
        assert_eq!(animation.poll_timeout(), Duration::from_millis(20));

        animation.finish();
        assert_eq!(animation.poll_timeout(), IDLE_POLL);

        let mut slow = AnimationManager::new(Duration::from_secs(1));
        slow.load(record());
        assert_eq!(slow.poll_timeout(), IDLE_POLL);
    }

    #[test]
    fn test_update_waits_for_delay() {
        let mut animation = AnimationManager::new(Duration::from_secs(3600));
        animation.load(record());

        animation.update();

        assert_eq!(animation.current_index, 0);
    }

    #[test]
    fn test_clear_drops_state() {
        let mut animation = AnimationManager::default();
        animation.load(record());

        animation.clear();

        assert!(animation.steps.is_empty());
        assert!(animation.cells.is_empty());
        assert!(animation.moves.is_empty());
        assert!(animation.is_finished());
    }
}
