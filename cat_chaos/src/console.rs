//! The rig's output side: text panel, status pixel, buzzer.
//!
//! The game logic talks to these three through [`Console`]; the window
//! implements [`Screen`] and [`Lamp`], the MIDI layer implements
//! [`crate::beeper::Beeper`].  Everything is fire-and-forget.

use crate::beeper::Beeper;
use std::time::Duration;

/// RGB triple for the status pixel.
pub type Rgb = (u8, u8, u8);

/// The colors the game shows on the status pixel.
pub mod color {
    use super::Rgb;

    pub const OFF:   Rgb = (0, 0, 0);
    pub const WAIT:  Rgb = (0, 0, 255);
    pub const PASS:  Rgb = (0, 255, 0);
    pub const FAIL:  Rgb = (255, 0, 0);
    pub const CLEAR: Rgb = (0, 255, 180);
}

/// Text sink: replaces the whole panel with a handful of lines.
pub trait Screen: Send {
    fn show(&mut self, lines: &[String]);
}

/// The status pixel.
pub trait Lamp: Send {
    fn set(&mut self, color: Rgb);
}

// ════════════════════════════════════════════════════════════════════════════
// Console — the bundled output collaborators
// ════════════════════════════════════════════════════════════════════════════

/// Screen, lamp, and beeper in one place, so screens and feedback code
/// take a single `&mut Console`.
pub struct Console {
    screen: Box<dyn Screen>,
    lamp:   Box<dyn Lamp>,
    beeper: Box<dyn Beeper>,
}

impl Console {
    pub fn new(screen: Box<dyn Screen>, lamp: Box<dyn Lamp>, beeper: Box<dyn Beeper>) -> Self {
        Console { screen, lamp, beeper }
    }

    /// Replace the panel contents.
    pub fn show(&mut self, lines: &[String]) {
        self.screen.show(lines);
    }

    /// One-line convenience for transient messages.
    pub fn say(&mut self, line: &str) {
        self.screen.show(&[line.to_string()]);
    }

    pub fn set_lamp(&mut self, color: Rgb) {
        self.lamp.set(color);
    }

    /// Tone at `freq_hz` for `ms` milliseconds.  Blocks for the tone.
    pub fn beep(&mut self, freq_hz: f32, ms: u64) {
        self.beeper.beep(freq_hz, Duration::from_millis(ms));
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Test kit — recording console shared by the screen/feedback tests
// ════════════════════════════════════════════════════════════════════════════
