//! Interactive workbench for the rig's signal layer: spin a virtual encoder,
//! press the button, feed accelerometer samples, and watch the decoder
//! counter and smoothed axes respond.

use chaos_sense::{AccelFilter, Dial, QuadratureDecoder};
use std::io::{self, Write};

/// Pin pairs for one full clockwise cycle, starting and ending at the
/// idle-high detent.
const CW_CYCLE: [(bool, bool); 4] =
    [(false, true), (false, false), (true, false), (true, true)];
const CCW_CYCLE: [(bool, bool); 4] =
    [(true, false), (false, false), (false, true), (true, true)];

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║           Cat Chaos — Signal Workbench               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    print_help();

    let mut decoder = QuadratureDecoder::new();
    let mut dial    = Dial::new(3);
    let mut filter  = AccelFilter::new();
    let mut sw_high = true;

    loop {
        let line = read_line("sense> ");
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let cmd = match parts.next() {
            Some(c) => c.to_lowercase(),
            None    => continue,
        };

        match cmd.as_str() {
            "q" | "quit" => {
                println!("\nGoodbye!\n");
                break;
            }
            "cw" | "ccw" => {
                let n: i32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1);
                let n = n.clamp(1, 1000);
                let cycle = if cmd == "cw" { &CW_CYCLE } else { &CCW_CYCLE };
                for _ in 0..n {
                    for &(clk, dt) in cycle.iter() {
                        decoder.update(clk, dt);
                        dial.update(clk, dt);
                    }
                }
                println!("  counter {:+}  (menu slot {}/3)", decoder.count(), dial.index());
            }
            "press"   => { sw_high = false; println!("  button line low (pressed)"); }
            "release" => { sw_high = true;  println!("  button line high (released)"); }
            "tilt" => {
                let mut axis = |name: &str| -> f32 {
                    parts.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        println!("  ⚠  missing {}, using 0", name);
                        0.0
                    })
                };
                let (x, y, z) = (axis("x"), axis("y"), axis("z"));
                let f = filter.update(x, y, z);
                println!("  raw ({:>6.2} {:>6.2} {:>6.2})  →  filtered ({:>6.2} {:>6.2} {:>6.2})",
                         x, y, z, f.x, f.y, f.z);
            }
            "shake" => {
                // Eight alternating ±25 m/s² samples on X, like a hard shake.
                for i in 0..8 {
                    let x = if i % 2 == 0 { 25.0 } else { -25.0 };
                    let f = filter.update(x, 0.0, 9.81);
                    println!("  sample {}: raw x {:>6.1}  filtered x {:>6.2}", i + 1, x, f.x);
                }
            }
            "flip" => {
                // Hold the rig upside down for ten samples.
                for i in 0..10 {
                    let f = filter.update(0.0, 0.0, -9.81);
                    println!("  sample {:>2}: filtered z {:>6.2}", i + 1, f.z);
                }
            }
            "status" => {
                let f = filter.axes();
                println!("  counter  : {:+}", decoder.count());
                println!("  menu slot: {}/3", dial.index());
                println!("  button   : {}", if sw_high { "released" } else { "PRESSED" });
                println!("  filtered : x {:>6.2}  y {:>6.2}  z {:>6.2}", f.x, f.y, f.z);
            }
            "reset" => {
                decoder.reset_count();
                dial.reset();
                filter.reset();
                println!("  counter and filter cleared");
            }
            "help" | "?" => print_help(),
            _ => println!("  ⚠  Unknown command '{}'. Try 'help'.", cmd),
        }
    }
}

fn print_help() {
    println!("  ┌──────────────────────────────────────────────────────┐");
    println!("  │  cw [n]      spin n clockwise ticks (default 1)      │");
    println!("  │  ccw [n]     spin n counter-clockwise ticks          │");
    println!("  │  press       pull the button line low                │");
    println!("  │  release     let the button line float high          │");
    println!("  │  tilt x y z  feed one raw accel sample (m/s²)        │");
    println!("  │  shake       feed an alternating ±25 burst on X      │");
    println!("  │  flip        feed ten upside-down Z samples          │");
    println!("  │  status      show counter, button, filtered axes     │");
    println!("  │  reset       clear counter and filter                │");
    println!("  │  q           quit                                    │");
    println!("  └──────────────────────────────────────────────────────┘");
    println!();
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
