//! The simulated rig: encoder, button, and accelerometer as a shared
//! pin snapshot.
//!
//! The window thread owns a [`PinDriver`] and writes pin levels each
//! frame; everyone else (menus, the recognizer) clones a cheap
//! [`SimRig`] handle and polls the latest snapshot through
//! [`InputSource`].

use chaos_sense::{InputSample, InputSource};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

/// The 4-phase quadrature cycle, walked forward for clockwise turns.
/// A full walk in either direction is exactly one counter tick.
const QUAD: [(bool, bool); 4] = [
    (false, false),
    (true,  false),
    (true,  true),
    (false, true),
];

/// Earth gravity on the Z axis while the toy sits flat.
const GRAVITY: f32 = 9.81;
/// X-axis amplitude while the toy is being shaken.
const SHAKE_ACCEL: f32 = 25.0;

fn lock_pins(pins: &Mutex<InputSample>) -> MutexGuard<'_, InputSample> {
    match pins.lock() {
        Ok(guard)     => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimRig — the read side
// ════════════════════════════════════════════════════════════════════════════

/// Clonable polling handle over the shared pin snapshot.
#[derive(Clone)]
pub struct SimRig {
    pins: Arc<Mutex<InputSample>>,
}

impl InputSource for SimRig {
    fn sample(&mut self) -> InputSample {
        *lock_pins(&self.pins)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PinDriver — the write side
// ════════════════════════════════════════════════════════════════════════════

/// Translates one frame of key state into pin levels.  Owned by the
/// window loop; there is exactly one writer.
pub struct PinDriver {
    pins:       Arc<Mutex<InputSample>>,
    phase:      i64,
    shake_sign: f32,
}

impl PinDriver {
    /// How long each quadrature phase is held while walking a cycle.
    /// Samplers poll every millisecond or two; a skipped phase would
    /// read as the opposite rotation, so this must stay comfortably
    /// above the fastest poll tick.
    const PHASE_HOLD: Duration = Duration::from_millis(3);

    /// Apply one frame of input.  `turn` is in full quadrature cycles:
    /// +1 clockwise, −1 counter-clockwise, 0 leaves the encoder alone.
    /// `pressed` pulls the switch line low (active-low convention).
    pub fn apply(&mut self, turn: i32, pressed: bool, shake: bool, flip: bool) {
        if shake {
            self.shake_sign = -self.shake_sign;
        }
        let x = if shake { SHAKE_ACCEL * self.shake_sign } else { 0.0 };
        let z = if flip { -GRAVITY } else { GRAVITY };
        {
            let mut p = lock_pins(&self.pins);
            p.sw    = !pressed;
            p.accel = [x, 0.0, z];
        }

        if turn == 0 {
            return;
        }
        let dir = if turn > 0 { 1 } else { -1 };
        for (clk, dt) in self.walk(dir) {
            {
                let mut p = lock_pins(&self.pins);
                p.clk = clk;
                p.dt  = dt;
            }
            // Never hold the lock across the dwell, or samplers stall.
            thread::sleep(Self::PHASE_HOLD);
        }
    }

    /// The four pin pairs one cycle in `dir` steps through, in order.
    fn walk(&mut self, dir: i64) -> [(bool, bool); 4] {
        let mut steps = [(false, false); 4];
        for s in steps.iter_mut() {
            self.phase += dir;
            *s = QUAD[self.phase.rem_euclid(4) as usize];
        }
        steps
    }
}

/// Build the shared rig.  The window keeps the driver; the game loop
/// clones the rig handle as often as it likes.
pub fn sim_rig() -> (SimRig, PinDriver) {
    let pins = Arc::new(Mutex::new(InputSample::idle()));
    let rig = SimRig { pins: pins.clone() };
    // Phase 2 is (high, high), matching the idle snapshot.
    let driver = PinDriver { pins, phase: 2, shake_sign: 1.0 };
    (rig, driver)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
