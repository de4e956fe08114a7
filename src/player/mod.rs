pub mod clock;
pub mod state;

pub use clock::WorkoutClock;
pub use state::{Player, PlayerError, PlayerState};

pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Block length for the block list, in whole minutes rounded half up.
pub fn block_minutes(secs: u32) -> u32 {
    (secs + 30) / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_text_pads_seconds() {
        assert_eq!(format_clock(900), "15:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn block_minutes_round() {
        assert_eq!(block_minutes(300), 5);
        assert_eq!(block_minutes(90), 2);
        assert_eq!(block_minutes(89), 1);
    }
}
