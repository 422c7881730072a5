//! Pomodoro countdown and its one-second ticker.

use std::time::{Duration, Instant};

pub const DEFAULT_MINUTES: u32 = 25;

/// Interval between ticks while running
pub const TICK: Duration = Duration::from_secs(1);

/// Countdown state: remaining time plus the running flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Timer {
            minutes: DEFAULT_MINUTES,
            seconds: 0,
            running: false,
        }
    }
}

impl Timer {
    /// Paused timer at `minutes:seconds` (seconds capped at 59)
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Timer {
            minutes,
            seconds: seconds.min(59),
            running: false,
        }
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Back to 25:00, paused
    pub fn reset(&mut self) {
        *self = Timer::default();
    }

    pub fn is_finished(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Whether a tick would change anything
    pub fn should_tick(&self) -> bool {
        self.running && !self.is_finished()
    }

    /// Count down one second, borrowing a minute at :00. Halts at 00:00.
    /// Returns whether the remaining time changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            return false;
        }
        true
    }

    /// `MM:SS`
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Wall-clock deadline for the next tick. Armed only while the timer can
/// still count down.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Start a fresh one-second period if the timer should tick, else cancel
    pub fn rearm(&mut self, timer: &Timer, now: Instant) {
        self.deadline = timer.should_tick().then(|| now + TICK);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// How long the event loop may wait before the next tick is due
    pub fn timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    /// Apply every tick due by `now`, keeping the one-second phase.
    /// Returns the number of ticks applied.
    pub fn fire(&mut self, timer: &mut Timer, now: Instant) -> u32 {
        let mut fired = 0;
        while let Some(deadline) = self.deadline {
            if deadline > now {
                break;
            }
            timer.tick();
            fired += 1;
            self.deadline = timer.should_tick().then(|| deadline + TICK);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn running(minutes: u32, seconds: u32) -> Timer {
        let mut t = Timer::new(minutes, seconds);
        t.toggle();
        t
    }

    #[test]
    fn default_is_25_minutes_paused() {
        let t = Timer::default();
        assert_eq!(t.label(), "25:00");
        assert!(!t.running);
    }

    #[test]
    fn tick_borrows_a_minute() {
        let mut t = running(2, 0);
        assert!(t.tick());
        assert_eq!((t.minutes, t.seconds), (1, 59));
    }

    #[test]
    fn halts_at_zero() {
        let mut t = running(0, 5);
        for _ in 0..6 {
            t.tick();
        }
        assert_eq!(t.label(), "00:00");
        assert!(t.is_finished());
        assert!(!t.tick());
        assert_eq!(t.label(), "00:00");
    }

    #[test]
    fn paused_timer_does_not_move() {
        let mut t = Timer::new(1, 0);
        assert!(!t.tick());
        assert_eq!(t.label(), "01:00");
    }

    #[test]
    fn reset_from_running_returns_to_default() {
        let mut t = running(3, 17);
        t.tick();
        t.reset();
        assert_eq!(t, Timer::default());
    }

    #[test]
    fn new_caps_seconds() {
        assert_eq!(Timer::new(1, 75).seconds, 59);
    }

    #[test]
    fn ticker_arms_only_while_counting() {
        let now = Instant::now();
        let mut ticker = Ticker::new();
        ticker.rearm(&Timer::default(), now);
        assert!(!ticker.is_armed());

        ticker.rearm(&running(0, 0), now);
        assert!(!ticker.is_armed());

        ticker.rearm(&running(0, 3), now);
        assert_eq!(ticker.deadline(), Some(now + TICK));
    }

    #[test]
    fn ticker_fires_once_per_elapsed_second() {
        let start = Instant::now();
        let mut timer = running(0, 10);
        let mut ticker = Ticker::new();
        ticker.rearm(&timer, start);

        assert_eq!(ticker.fire(&mut timer, start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.fire(&mut timer, start + Duration::from_millis(1000)), 1);
        assert_eq!(timer.label(), "00:09");

        // Late wake-up catches up on every whole second
        assert_eq!(ticker.fire(&mut timer, start + Duration::from_millis(3500)), 2);
        assert_eq!(timer.label(), "00:07");
        assert_eq!(ticker.deadline(), Some(start + Duration::from_secs(4)));
    }

    #[test]
    fn ticker_disarms_at_zero() {
        let start = Instant::now();
        let mut timer = running(0, 5);
        let mut ticker = Ticker::new();
        ticker.rearm(&timer, start);

        let fired = ticker.fire(&mut timer, start + Duration::from_secs(60));
        assert_eq!(fired, 5);
        assert_eq!(timer.label(), "00:00");
        assert!(!ticker.is_armed());
    }

    #[test]
    fn timeout_is_bounded_by_deadline() {
        let now = Instant::now();
        let mut ticker = Ticker::new();
        let max = Duration::from_millis(250);
        assert_eq!(ticker.timeout(now, max), max);

        ticker.rearm(&running(1, 0), now);
        assert_eq!(
            ticker.timeout(now + Duration::from_millis(900), max),
            Duration::from_millis(100)
        );
        assert_eq!(
            ticker.timeout(now + Duration::from_secs(2), max),
            Duration::ZERO
        );
    }
}
