//! Seeded walkthrough of the game layer: deadline decay, sequence draws,
//! and two scripted rounds through the real engine.

use chaos_game::{
    deadline_for, Difficulty, GameEngine, GameView, Gesture, Recognizer,
    SequenceGenerator, SilentView, MAX_LEVEL,
};
use std::time::Duration;

struct PerfectPlayer;
impl Recognizer for PerfectPlayer {
    fn detect(&mut self, _g: Gesture, _d: Duration) -> bool { true }
}

struct ChokesAt {
    passes_left: usize,
}
impl Recognizer for ChokesAt {
    fn detect(&mut self, _g: Gesture, _d: Duration) -> bool {
        if self.passes_left == 0 { return false; }
        self.passes_left -= 1;
        true
    }
}

struct LevelTicker;
impl GameView for LevelTicker {
    fn step_begin(&mut self, _l: u8, _s: usize, _t: usize, _g: Gesture) {}
    fn step_result(&mut self, _g: Gesture, _p: bool) {}
    fn level_complete(&mut self, level: u8, score: u32) {
        println!("   level {:>2} clear  →  score {}", level, score);
    }
}

fn main() {
    println!("\n=== Cat Chaos Game Demo ===\n");

    // ── 1. Deadline decay ─────────────────────────────────────────────────
    println!("1. Deadline decay (seconds per gesture)");
    for &d in Difficulty::ALL.iter() {
        let mut row = format!("   {:<8}", d.name());
        for level in [1, 4, 7, MAX_LEVEL] {
            row.push_str(&format!("  L{}: {:.2}s", level, deadline_for(d, level).as_secs_f32()));
        }
        println!("{}", row);
    }
    println!();

    // ── 2. Seeded sequences ───────────────────────────────────────────────
    println!("2. Sequences for seed 42 (level n asks for n+1 gestures)");
    let mut gen = SequenceGenerator::from_seed(42);
    for level in 1..=3u8 {
        let seq = gen.generate(level);
        let names: Vec<&str> = seq.iter().map(|g| g.name()).collect();
        println!("   level {}: {}", level, names.join(", "));
    }
    println!();

    // ── 3. Perfect run ────────────────────────────────────────────────────
    println!("3. Perfect run (every deadline met)");
    let mut engine = GameEngine::new(Difficulty::Easy, SequenceGenerator::from_seed(42));
    let result = engine.play(&mut PerfectPlayer, &mut LevelTicker);
    println!("   final: WIN={}  score={}", result.won, result.score);
    // 65 steps + 10 × 5 bonus = 115
    println!();

    // ── 4. A loss partway through level 3 ─────────────────────────────────
    println!("4. Choking on level 3, step 2");
    let mut engine = GameEngine::new(Difficulty::Hard, SequenceGenerator::from_seed(42));
    // Levels 1 and 2 hold 2 + 3 steps; pass those and one more.
    let mut choker = ChokesAt { passes_left: 2 + 3 + 1 };
    let result = engine.play(&mut choker, &mut SilentView);
    println!("   final: WIN={}  score={}  reached level {}",
             result.won, result.score, result.level_reached);
    // Banked (2+5) + (3+5) = 15, plus 1 step into level 3 = 16
}
