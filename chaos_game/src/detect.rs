//! Deadline-bounded gesture recognition over polled rig input.
//!
//! [`PollRecognizer`] owns the signal state it judges against: a
//! [`QuadratureDecoder`] for rotation ticks and an [`AccelFilter`] for the
//! smoothed axes. The counter is cleared at the start of every attempt so
//! rotation thresholds are relative to this attempt; the filter is never
//! cleared, it only decays.

use std::thread;
use std::time::{Duration, Instant};

use chaos_sense::{AccelFilter, FilteredAxes, InputSource, QuadratureDecoder};

use crate::gesture::Gesture;

// ════════════════════════════════════════════════════════════════════════════
// Thresholds — empirical tuning values
// ════════════════════════════════════════════════════════════════════════════

/// Trigger thresholds for the non-button gestures.
///
/// These are hardware calibration values, not derived quantities. The
/// defaults are the shipped tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Rotation fires when the counter magnitude exceeds this many ticks.
    pub rotate_ticks: i32,
    /// Shake fires when |filtered X| exceeds this (m/s²).
    pub shake_accel:  f32,
    /// Flip fires when filtered Z drops below this (m/s²).
    pub flip_accel:   f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            rotate_ticks: 2,     // ticks — the 3rd tick fires
            shake_accel:  15.0,  // m/s²
            flip_accel:   -5.0,  // m/s² — fully inverted reads ≈ −9.8
        }
    }
}

impl Thresholds {
    /// Test the gesture predicate against the current signal state.
    ///
    /// Comparisons are strict: a counter of exactly ±`rotate_ticks`, an X
    /// magnitude of exactly `shake_accel`, or a Z of exactly `flip_accel`
    /// does not fire.
    pub fn met(&self, gesture: Gesture, pressed: bool, ticks: i32, axes: FilteredAxes) -> bool {
        match gesture {
            Gesture::Press       => pressed,
            Gesture::RotateLeft  => ticks < -self.rotate_ticks,
            Gesture::RotateRight => ticks > self.rotate_ticks,
            Gesture::Shake       => axes.x.abs() > self.shake_accel,
            Gesture::Flip        => axes.z < self.flip_accel,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Recognizer trait — seam between engine and signal plumbing
// ════════════════════════════════════════════════════════════════════════════

/// Decides whether a target gesture happens before the deadline.
///
/// The game engine only sees this trait; tests drive it with scripted
/// implementations.
pub trait Recognizer {
    fn detect(&mut self, gesture: Gesture, deadline: Duration) -> bool;
}

// ════════════════════════════════════════════════════════════════════════════
// PollRecognizer — production implementation
// ════════════════════════════════════════════════════════════════════════════

/// Polls an [`InputSource`] until the gesture predicate fires or the
/// deadline passes.
///
/// Every poll advances both the decoder and the filter, whatever the target
/// gesture, so the smoothing state keeps warming while the player is busy
/// doing something else. First predicate match wins; a miss blocks for the
/// whole deadline and never longer than one tick past it.
pub struct PollRecognizer<S: InputSource> {
    source:     S,
    decoder:    QuadratureDecoder,
    filter:     AccelFilter,
    thresholds: Thresholds,
    tick:       Duration,
}

impl<S: InputSource> PollRecognizer<S> {
    pub fn new(source: S) -> Self {
        PollRecognizer {
            source,
            decoder:    QuadratureDecoder::new(),
            filter:     AccelFilter::new(),
            thresholds: Thresholds::default(),
            tick:       Duration::from_millis(1),
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Pause between polls. `Duration::ZERO` polls flat out.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn thresholds(&self) -> Thresholds { self.thresholds }
}

impl<S: InputSource> Recognizer for PollRecognizer<S> {
    fn detect(&mut self, gesture: Gesture, deadline: Duration) -> bool {
        self.decoder.reset_count();
        let start = Instant::now();
        while start.elapsed() < deadline {
            let s    = self.source.sample();
            self.decoder.update(s.clk, s.dt);
            let axes = self.filter.update(s.accel[0], s.accel[1], s.accel[2]);
            if self.thresholds.met(gesture, s.button_pressed(), self.decoder.count(), axes) {
                return true; // first match wins
            }
            if !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
        }
        false
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
