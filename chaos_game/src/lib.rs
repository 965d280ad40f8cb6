//! # chaos_game
//!
//! The Cat Chaos reflex game: an escalating simon-says of physical gestures
//! read from a rotary encoder and a 3-axis accelerometer, recognized against
//! a shrinking per-level deadline.
//!
//! ## Gestures and trigger conditions
//!
//! | Gesture | Fires when |
//! |---|---|
//! | `PRESS` | button line reads low (active-low switch) |
//! | `ROTATE LEFT` | attempt counter < −2 ticks |
//! | `ROTATE RIGHT` | attempt counter > +2 ticks |
//! | `SHAKE` | smoothed X magnitude > 15.0 m/s² |
//! | `FLIP` | smoothed Z < −5.0 m/s² |
//!
//! ## Pacing
//!
//! | Difficulty | Base budget | Level 1 | Level 10 |
//! |---|---|---|---|
//! | EASY | 2.0 s | 1.84 s | 0.87 s |
//! | MEDIUM | 1.5 s | 1.38 s | 0.65 s |
//! | HARD | 1.0 s | 0.92 s | 0.43 s |
//!
//! Each level `n` asks for `n + 1` gestures; every passed gesture scores 1
//! and a cleared level banks a flat 5. Clearing level 10 wins the run; the
//! first missed deadline ends it.

pub mod detect;
pub mod engine;
pub mod gesture;
pub mod sequence;

pub use detect::{PollRecognizer, Recognizer, Thresholds};
pub use engine::{
    deadline_for, Difficulty, GameEngine, GameResult, GameView, SilentView,
    LEVEL_BONUS, MAX_LEVEL,
};
pub use gesture::Gesture;
pub use sequence::SequenceGenerator;
