//! # cat_chaos
//!
//! Simon-says reflex game for a one-knob cat toy: a rotary encoder with a
//! push switch, a 3-axis accelerometer, an RGB pixel, a buzzer, and a
//! small text panel.  The rig is simulated in a minifb window; sensing
//! lives in `chaos_sense`, the game rules in `chaos_game`, and the score
//! table in `chaos_scores`.
//!
//! ## Gesture → trigger mapping
//!
//! | Gesture | Trigger |
//! |---|---|
//! | PRESS | switch line pulled low (active-low button) |
//! | ROTATE LEFT | encoder counter below −2 since the step began |
//! | ROTATE RIGHT | encoder counter above +2 since the step began |
//! | SHAKE | smoothed X acceleration beyond ±15 m/s² |
//! | FLIP | smoothed Z acceleration below −5 m/s² |
//!
//! ## Simulation keys
//!
//! | Key | Effect |
//! |---|---|
//! | `←` / `→` | turn the encoder (hold to keep turning) |
//! | `Enter` | press the button |
//! | `S` | shake (rattles the X axis every frame) |
//! | `F` | hold the rig upside down |
//! | `Esc` | quit |

pub mod rig;
pub mod beeper;
pub mod console;
pub mod panel;
pub mod feedback;
pub mod screens;
pub mod app;
