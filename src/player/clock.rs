use gloo_timers::callback::Interval;

/// Whole periods elapsed between `last_ms` and `now_ms`, and the new anchor.
///
/// The anchor only moves by whole periods so fractional time carries over to the
/// next callback. A clock that went backwards yields no ticks.
pub fn ticks_due(last_ms: f64, now_ms: f64, period_ms: u32) -> (u32, f64) {
    let period = period_ms.max(1) as f64;
    let elapsed = now_ms - last_ms;
    if elapsed < period {
        return (0, if elapsed < 0.0 { now_ms } else { last_ms });
    }
    let due = (elapsed / period).floor();
    (due as u32, last_ms + due * period)
}

/// Periodic tick source for the workout player.
///
/// Owns the browser interval; `stop` or drop cancels it and no callback runs after.
pub struct WorkoutClock {
    interval: Option<Interval>,
}

impl WorkoutClock {
    pub fn start(period_ms: u32, mut on_ticks: impl FnMut(u32) + 'static) -> Self {
        let mut last = js_sys::Date::now();
        let interval = Interval::new(period_ms, move || {
            let (due, anchor) = ticks_due(last, js_sys::Date::now(), period_ms);
            last = anchor;
            if due > 0 {
                on_ticks(due);
            }
        });
        log::debug!("workout clock started ({} ms)", period_ms);
        Self {
            interval: Some(interval),
        }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
            log::debug!("workout clock stopped");
        }
    }
}

impl Drop for WorkoutClock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_time_callback_yields_one_tick() {
        assert_eq!(ticks_due(0.0, 1000.0, 1000), (1, 1000.0));
    }

    #[test]
    fn early_callback_keeps_anchor() {
        assert_eq!(ticks_due(5000.0, 5999.0, 1000), (0, 5000.0));
    }

    #[test]
    fn late_callback_catches_up_and_keeps_remainder() {
        let (due, anchor) = ticks_due(0.0, 3750.0, 1000);
        assert_eq!(due, 3);
        assert_eq!(anchor, 3000.0);
        assert_eq!(ticks_due(anchor, 4010.0, 1000), (1, 4000.0));
    }

    #[test]
    fn clock_going_backwards_resets_anchor() {
        assert_eq!(ticks_due(10_000.0, 2_000.0, 1000), (0, 2_000.0));
    }
}
