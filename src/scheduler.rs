//! Frame timing: measures elapsed time between frames and turns it into
//! particle spawn / advance events on two independent cadences.

use chrono::{DateTime, Utc};

/// Slack when comparing accumulated time against an interval. Frame times
/// arrive truncated to whole microseconds, so a frame of exactly 1/60 s
/// measures a hair short of the interval.
const SLACK_SECS: f64 = 1e-4;

/// Elapsed time between successive frames.
#[derive(Default)]
pub struct FrameClock {
    last_tick_at: Option<DateTime<Utc>>,
}

impl FrameClock {
    /// Seconds since the previous call; 0 on the first call or if the clock went backwards.
    pub fn tick(&mut self, now: DateTime<Utc>) -> f64 {
        let Some(last) = self.last_tick_at.replace(now) else {
            return 0.0;
        };
        let micros = (now - last).num_microseconds().unwrap_or(0);
        (micros.max(0) as f64) / 1_000_000.0
    }
}

/// What the scene should do this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Due {
    pub spawn: bool,
    /// Seconds since the last advance, when an advance is due.
    pub advance: Option<f64>,
}

pub struct Scheduler {
    spawn_interval: f64,
    frame_interval: f64,
    since_spawn: f64,
    since_advance: f64,
}

impl Scheduler {
    pub fn new(spawn_interval: f64, frame_interval: f64) -> Self {
        Self {
            spawn_interval,
            frame_interval,
            since_spawn: 0.0,
            since_advance: 0.0,
        }
    }

    pub fn frame_interval(&self) -> f64 {
        self.frame_interval
    }

    /// Feeds `elapsed` seconds. Each cadence fires at most once per call; a
    /// long stall does not produce a burst of spawns.
    pub fn advance(&mut self, elapsed: f64) -> Due {
        self.since_spawn += elapsed;
        self.since_advance += elapsed;

        let mut due = Due::default();
        if self.since_spawn + SLACK_SECS >= self.spawn_interval {
            due.spawn = true;
            self.since_spawn = (self.since_spawn - self.spawn_interval).clamp(0.0, self.spawn_interval);
        }
        if self.since_advance + SLACK_SECS >= self.frame_interval {
            due.advance = Some(self.since_advance);
            self.since_advance = 0.0;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_measures_between_ticks() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(t0), 0.0);
        assert_eq!(clock.tick(t0 + chrono::Duration::milliseconds(250)), 0.25);
        // Backwards jump is clamped.
        assert_eq!(clock.tick(t0), 0.0);
    }

    #[test]
    fn spawns_on_interval() {
        let mut s = Scheduler::new(0.5, 0.125);
        let spawns = (0..16).filter(|_| s.advance(0.125).spawn).count();
        assert_eq!(spawns, 4);
    }

    #[test]
    fn advance_carries_actual_elapsed() {
        let mut s = Scheduler::new(10.0, 0.5);
        assert_eq!(s.advance(0.25).advance, None);
        assert_eq!(s.advance(0.5).advance, Some(0.75));
        assert_eq!(s.advance(0.5).advance, Some(0.5));
    }

    #[test]
    fn sixty_hz_frames_advance_every_frame() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut clock = FrameClock::default();
        let mut s = Scheduler::new(0.7, 1.0 / 60.0);
        let mut advances = 0;
        let mut first_spawn = None;
        for frame in 0..=60i64 {
            let now = t0 + chrono::Duration::nanoseconds(frame * 1_000_000_000 / 60);
            let due = s.advance(clock.tick(now));
            if due.advance.is_some() {
                advances += 1;
            }
            if due.spawn && first_spawn.is_none() {
                first_spawn = Some(frame);
            }
        }
        assert_eq!(advances, 60);
        // 0.7 s is 42 frames.
        assert_eq!(first_spawn, Some(42));
    }

    #[test]
    fn long_stall_does_not_burst() {
        let mut s = Scheduler::new(0.5, 0.125);
        assert!(s.advance(10.0).spawn);
        // The leftover is capped at one interval.
        assert!(s.advance(0.0).spawn);
        assert!(!s.advance(0.0).spawn);
    }
}
