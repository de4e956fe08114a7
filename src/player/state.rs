use thiserror::Error;

use crate::types::{Segment, WorkoutDefinition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("workout {0} has no blocks")]
    Empty(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub index: usize,
    pub remaining: u32,
    pub running: bool,
}

/// Countdown through the blocks of one workout.
///
/// `index` always points at a block and `remaining` never exceeds that block's
/// length. The player is complete once it sits on the last block with nothing left.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    workout: WorkoutDefinition,
    state: PlayerState,
}

impl Player {
    pub fn new(workout: WorkoutDefinition) -> Result<Self, PlayerError> {
        let first = workout
            .blocks
            .first()
            .map(|b| b.seconds)
            .ok_or_else(|| PlayerError::Empty(workout.id.clone()))?;
        let mut player = Self {
            workout,
            state: PlayerState {
                index: 0,
                remaining: first,
                running: true,
            },
        };
        player.pass_empty_blocks();
        Ok(player)
    }

    pub fn workout(&self) -> &WorkoutDefinition {
        &self.workout
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn blocks(&self) -> &[Segment] {
        &self.workout.blocks
    }

    pub fn current(&self) -> &Segment {
        &self.workout.blocks[self.state.index]
    }

    fn is_last(&self) -> bool {
        self.state.index + 1 >= self.workout.blocks.len()
    }

    pub fn is_complete(&self) -> bool {
        self.is_last() && self.state.remaining == 0
    }

    fn advance(&mut self) {
        self.state.index += 1;
        self.state.remaining = self.workout.blocks[self.state.index].seconds;
    }

    fn pass_empty_blocks(&mut self) {
        while self.state.remaining == 0 && !self.is_last() {
            self.advance();
        }
    }

    /// One second of wall-clock time.
    pub fn tick(&mut self) {
        if !self.state.running || self.is_complete() {
            return;
        }
        self.state.remaining = self.state.remaining.saturating_sub(1);
        self.pass_empty_blocks();
    }

    pub fn tick_many(&mut self, ticks: u32) {
        for _ in 0..ticks {
            if !self.state.running || self.is_complete() {
                break;
            }
            self.tick();
        }
    }

    /// Jump to the start of the next block. No-op on the last block.
    pub fn skip(&mut self) {
        if !self.is_last() {
            self.advance();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state.running = !self.state.running;
    }

    pub fn total_seconds(&self) -> u32 {
        self.workout.total_seconds()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        let completed: u32 = self.workout.blocks[..self.state.index]
            .iter()
            .map(|b| b.seconds)
            .sum();
        completed + (self.current().seconds - self.state.remaining)
    }

    /// Whole-percent progress, rounded half up. A zero-length workout counts as done.
    pub fn progress_percent(&self) -> u32 {
        let total = self.total_seconds() as u64;
        if total == 0 {
            return 100;
        }
        let elapsed = self.elapsed_seconds() as u64;
        ((200 * elapsed + total) / (2 * total)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentKind;

    fn workout(seconds: &[u32]) -> WorkoutDefinition {
        WorkoutDefinition {
            id: "test".to_string(),
            name: "Test".to_string(),
            blocks: seconds
                .iter()
                .map(|s| Segment::new(SegmentKind::Amrap, "Block", "", *s))
                .collect(),
        }
    }

    fn player(seconds: &[u32]) -> Player {
        Player::new(workout(seconds)).unwrap()
    }

    #[test]
    fn starts_running_on_first_block() {
        let p = player(&[300, 900, 120]);
        assert_eq!(
            p.state(),
            PlayerState { index: 0, remaining: 300, running: true }
        );
        assert_eq!(p.progress_percent(), 0);
    }

    #[test]
    fn empty_workout_is_rejected() {
        assert_eq!(
            Player::new(workout(&[])).unwrap_err(),
            PlayerError::Empty("test".to_string())
        );
    }

    #[test]
    fn finishing_a_block_advances_once_with_full_duration() {
        let mut p = player(&[300, 900, 120]);
        for _ in 0..299 {
            p.tick();
        }
        assert_eq!(p.state().index, 0);
        assert_eq!(p.state().remaining, 1);
        p.tick();
        assert_eq!(p.state().index, 1);
        assert_eq!(p.state().remaining, 900);
        assert_eq!(p.elapsed_seconds(), 300);
        assert_eq!(p.progress_percent(), 23);
    }

    #[test]
    fn paused_ticks_change_nothing() {
        let mut p = player(&[300, 900, 120]);
        p.tick_many(10);
        p.toggle_pause();
        let before = p.state();
        p.tick_many(500);
        p.tick();
        assert_eq!(p.state(), before);
        p.toggle_pause();
        p.tick();
        assert_eq!(p.state().remaining, 289);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let mut p = player(&[300, 900, 120]);
        let mut last = p.progress_percent();
        for _ in 0..1320 {
            p.tick();
            let now = p.progress_percent();
            assert!(now >= last);
            last = now;
        }
        assert!(p.is_complete());
        assert_eq!(p.progress_percent(), 100);
    }

    #[test]
    fn terminal_state_absorbs_extra_ticks() {
        let mut p = player(&[3, 2]);
        p.tick_many(100);
        assert!(p.is_complete());
        assert_eq!(p.state(), PlayerState { index: 1, remaining: 0, running: true });
    }

    #[test]
    fn skip_restores_next_block_duration() {
        let mut p = player(&[300, 900, 120]);
        p.tick_many(42);
        p.skip();
        assert_eq!(p.state().index, 1);
        assert_eq!(p.state().remaining, 900);
        p.skip();
        assert_eq!(p.state().index, 2);
        assert_eq!(p.state().remaining, 120);
    }

    #[test]
    fn skip_on_last_block_is_ignored() {
        let mut p = player(&[10, 20]);
        p.skip();
        p.tick_many(5);
        p.skip();
        assert_eq!(p.state().index, 1);
        assert_eq!(p.state().remaining, 15);
        assert!(!p.is_complete());
    }

    #[test]
    fn skip_works_while_paused() {
        let mut p = player(&[10, 20]);
        p.toggle_pause();
        p.skip();
        assert_eq!(p.state().index, 1);
        assert!(!p.state().running);
    }

    #[test]
    fn zero_length_blocks_are_passed_through() {
        let mut p = player(&[1, 0, 0, 5]);
        p.tick();
        assert_eq!(p.state().index, 3);
        assert_eq!(p.state().remaining, 5);
    }

    #[test]
    fn zero_length_start_blocks_are_passed_on_open() {
        let mut p = player(&[0, 0, 4]);
        assert_eq!(p.state().index, 2);
        assert_eq!(p.state().remaining, 4);
        assert!(p.state().running);
        assert_eq!(p.progress_percent(), 0);
        p.tick();
        assert_eq!(p.state().remaining, 3);
    }

    #[test]
    fn zero_length_workout_is_complete_at_once() {
        let p = player(&[0]);
        assert!(p.is_complete());
        assert_eq!(p.progress_percent(), 100);
    }

    #[test]
    fn tick_many_matches_repeated_ticks() {
        let mut a = player(&[30, 45, 15]);
        let mut b = a.clone();
        a.tick_many(61);
        for _ in 0..61 {
            b.tick();
        }
        assert_eq!(a.state(), b.state());
    }
}
