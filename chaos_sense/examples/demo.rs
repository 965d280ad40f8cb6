//! Walks the decoder, filter and dial through canned traffic.

use chaos_sense::{AccelFilter, Dial, InputSample, QuadratureDecoder};

const CW_CYCLE: [(bool, bool); 4] =
    [(false, true), (false, false), (true, false), (true, true)];
const CCW_CYCLE: [(bool, bool); 4] =
    [(true, false), (false, false), (false, true), (true, true)];

fn main() {
    println!("\n=== Cat Chaos Signal Demo ===\n");

    // ── 1. Quadrature decoding ────────────────────────────────────────────
    println!("1. Quadrature decoding (3 CW cycles, then 1 CCW)");
    let mut dec = QuadratureDecoder::new();
    for cycle in 0..3 {
        for &(clk, dt) in CW_CYCLE.iter() {
            let delta = dec.update(clk, dt);
            if delta != 0 {
                println!("   cycle {}: rising clock edge, delta {:+}", cycle + 1, delta);
            }
        }
    }
    for &(clk, dt) in CCW_CYCLE.iter() {
        dec.update(clk, dt);
    }
    println!("   counter after 3 CW + 1 CCW: {:+}", dec.count());
    // Expected: +2
    println!();

    // ── 2. Bounce rejection ───────────────────────────────────────────────
    println!("2. Bounce rejection (same pair repeated)");
    let before = dec.count();
    for _ in 0..100 {
        dec.update(true, true);
    }
    println!("   counter unchanged: {:+} → {:+}", before, dec.count());
    println!();

    // ── 3. EMA smoothing ──────────────────────────────────────────────────
    println!("3. Smoothing a shake burst (raw X alternates ±25)");
    let mut filter = AccelFilter::new();
    for i in 0..8 {
        let raw = if i % 2 == 0 { 25.0 } else { -25.0 };
        let f = filter.update(raw, 0.0, 9.81);
        println!("   raw {:>6.1}  →  filtered x {:>6.2}", raw, f.x);
    }
    println!("   (alternating input keeps |filtered| well under 25)");
    println!();

    // ── 4. Convergence ────────────────────────────────────────────────────
    println!("4. Smoothing convergence (constant Z of 9.81 from zero state)");
    let mut upright = AccelFilter::new();
    for i in 1..=10 {
        let f = upright.update(0.0, 0.0, 9.81);
        println!("   update {:>2}: filtered z {:>5.2}", i, f.z);
    }
    // Converges toward 9.81, residual shrinking by 0.8 each step
    println!();

    // ── 5. Menu dial ──────────────────────────────────────────────────────
    println!("5. Menu dial over 3 options");
    let mut dial = Dial::new(3);
    for turn in 1..=5 {
        for &(clk, dt) in CW_CYCLE.iter() {
            dial.update(clk, dt);
        }
        println!("   after {} tick(s): index {}", turn, dial.index());
    }
    // 1→1, 2→2, 3→0, 4→1, 5→2
    println!();

    // ── 6. Idle sample ────────────────────────────────────────────────────
    let idle = InputSample::idle();
    println!("6. Idle sample: clk {} dt {} sw {} accel {:?}  pressed={}",
             idle.clk, idle.dt, idle.sw, idle.accel, idle.button_pressed());
}
