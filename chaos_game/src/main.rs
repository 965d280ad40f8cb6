//! Interactive drill menu: preview deadline schedules and seeded sequences,
//! and run scripted rehearsals through the real engine.

use chaos_game::{
    deadline_for, Difficulty, GameEngine, GameView, Gesture, Recognizer,
    SequenceGenerator, LEVEL_BONUS, MAX_LEVEL,
};
use std::io::{self, Write};
use std::time::Duration;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║              Cat Chaos — Gesture Drill Menu              ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    loop {
        print_menu();
        let choice = read_line("Command: ").trim().to_ascii_lowercase();

        match choice.as_str() {
            "1" => deadline_table(),
            "2" => preview_sequences(),
            "3" => rehearse_perfect_run(),
            "4" => failure_study(),
            "q" | "quit" => {
                println!("\nGoodbye!\n");
                break;
            }
            _ => println!("  ⚠  Unknown command."),
        }
        println!();
    }
}

fn print_menu() {
    println!("  ┌─────────────────────────────────────────────────────────┐");
    println!("  │  1. Deadline table for all difficulties                 │");
    println!("  │  2. Preview sequences for a seed                        │");
    println!("  │  3. Rehearse a perfect run (scripted recognizer)        │");
    println!("  │  4. Failure study: score for a loss at level L, step S  │");
    println!("  │  q. Quit                                                │");
    println!("  └─────────────────────────────────────────────────────────┘");
}

// ── 1. deadline table ───────────────────────────────────────────────────────

fn deadline_table() {
    println!();
    println!("  level   EASY     MEDIUM   HARD");
    for level in 1..=MAX_LEVEL {
        let row: Vec<String> = Difficulty::ALL
            .iter()
            .map(|&d| format!("{:.3}s", deadline_for(d, level).as_secs_f32()))
            .collect();
        println!("  {:>5}   {}  {}  {}", level, row[0], row[1], row[2]);
    }
}

// ── 2. seeded sequence preview ──────────────────────────────────────────────

fn preview_sequences() {
    let seed: u64 = read_line("  Seed (default 42): ").trim().parse().unwrap_or(42);
    let top: u8 = read_line("  Up to level (1–10, default 4): ")
        .trim().parse().unwrap_or(4);
    let top = top.clamp(1, MAX_LEVEL);

    let mut gen = SequenceGenerator::from_seed(seed);
    println!();
    for level in 1..=top {
        let seq = gen.generate(level);
        let names: Vec<&str> = seq.iter().map(|g| g.name()).collect();
        println!("  level {:>2} ({} steps): {}", level, seq.len(), names.join(", "));
    }
}

// ── 3. scripted rehearsal ───────────────────────────────────────────────────

/// Recognizer that never misses; deadlines are irrelevant to it.
struct PerfectPlayer;

impl Recognizer for PerfectPlayer {
    fn detect(&mut self, _gesture: Gesture, _deadline: Duration) -> bool {
        true
    }
}

/// Prints every engine callback as a transcript line.
struct TranscriptView;

impl GameView for TranscriptView {
    fn step_begin(&mut self, level: u8, step: usize, total: usize, gesture: Gesture) {
        print!("  L{:<2} {}/{:<2} {:<13}", level, step, total, gesture.name());
    }
    fn step_result(&mut self, _gesture: Gesture, passed: bool) {
        println!("{}", if passed { "✓" } else { "✗ MISSED" });
    }
    fn level_complete(&mut self, level: u8, score: u32) {
        println!("  ── level {} clear, score {} ──", level, score);
    }
}

fn rehearse_perfect_run() {
    let seed: u64 = read_line("  Seed (default 42): ").trim().parse().unwrap_or(42);
    let difficulty = pick_difficulty();

    let mut engine = GameEngine::new(difficulty, SequenceGenerator::from_seed(seed));
    println!();
    let result = engine.play(&mut PerfectPlayer, &mut TranscriptView);
    println!();
    println!("  Result: {}  score {}  (reached level {})",
             if result.won { "WIN" } else { "LOSE" },
             result.score, result.level_reached);
    // A perfect run always banks 65 steps + 50 bonus = 115.
}

// ── 4. failure study ────────────────────────────────────────────────────────

/// Passes a fixed number of steps, then misses once.
struct MissAfter {
    passes_left: usize,
}

impl Recognizer for MissAfter {
    fn detect(&mut self, _gesture: Gesture, _deadline: Duration) -> bool {
        if self.passes_left == 0 {
            return false;
        }
        self.passes_left -= 1;
        true
    }
}

fn failure_study() {
    let level: u8 = read_line("  Fail at level (1–10, default 3): ")
        .trim().parse().unwrap_or(3);
    let level = level.clamp(1, MAX_LEVEL);
    let max_step = level as usize + 1;
    let step: usize = read_line(&format!("  Fail at step (1–{}, default 1): ", max_step))
        .trim().parse().unwrap_or(1);
    let step = step.clamp(1, max_step);

    let prior_steps: usize = (1..level).map(|l| l as usize + 1).sum();
    let mut engine = GameEngine::new(Difficulty::Easy, SequenceGenerator::from_seed(42));
    let mut miss = MissAfter { passes_left: prior_steps + step - 1 };
    let result = engine.play(&mut miss, &mut chaos_game::SilentView);

    let banked: u32 = (1..level).map(|l| l as u32 + 1 + LEVEL_BONUS).sum();
    println!();
    println!("  Lost at level {} step {}.", level, step);
    println!("  Score {} = {} banked from levels 1–{} + {} steps this level.",
             result.score, banked, level.saturating_sub(1), step - 1);
}

fn pick_difficulty() -> Difficulty {
    println!("  Difficulty:  1. EASY   2. MEDIUM   3. HARD");
    match read_line("  Choice (default 1): ").trim() {
        "2" => Difficulty::Medium,
        "3" => Difficulty::Hard,
        _   => Difficulty::Easy,
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
