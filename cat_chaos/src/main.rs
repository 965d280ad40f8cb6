//! cat_chaos — interactive entry point.

use cat_chaos::app::{run, AppConfig};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Cat Chaos — Simon-Says Reflex Rig (simulated)         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Window controls:");
    println!("    ←/→    turn the encoder");
    println!("    Enter  press the button");
    println!("    S      shake the rig");
    println!("    F      flip it upside down");
    println!("    Esc    quit");
    println!();

    if let Err(e) = run(AppConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
