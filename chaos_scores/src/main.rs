//! Interactive workbench for the Cat Chaos score table.

use chaos_scores::{Leaderboard, ScoreEntry, ScoreStore, SCORE_FILE};
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            Cat Chaos — Score Table Workbench             ║");
    println!("║  Inspect and edit the JSON-backed top-3 leaderboard      ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let path = read_line(&format!("Score file (default {}): ", SCORE_FILE));
    let path = path.trim();
    let store = if path.is_empty() {
        ScoreStore::new(SCORE_FILE)
    } else {
        ScoreStore::new(path)
    };
    println!();

    loop {
        println!("  Main menu:");
        println!("    1. Show the table");
        println!("    2. Check whether a score qualifies");
        println!("    3. Record a new entry");
        println!("    4. Reset to factory placeholders");
        println!("    q. Quit");
        println!();

        match read_line("Choice: ").trim() {
            "1" => show_table(&store),
            "2" => check_score(&store),
            "3" => record_entry(&store),
            "4" => reset_table(&store),
            "q" | "quit" => { println!("\nGoodbye!\n"); break; }
            _   => println!("  ⚠  Enter 1–4 or q.\n"),
        }
        println!();
    }
}

fn show_table(store: &ScoreStore) {
    println!("\n  ── {} ──", store.path().display());
    print_table(&store.load());
}

fn check_score(store: &ScoreStore) {
    let board = store.load();
    let score: u32 = match read_line("  Score to test: ").trim().parse() {
        Ok(s)  => s,
        Err(_) => { println!("  ⚠  Not a number."); return; }
    };
    let floor = if board.len() < Leaderboard::CAPACITY {
        0
    } else {
        board.entries().last().map(|e| e.score).unwrap_or(0)
    };
    if board.qualifies(score) {
        println!("  ✓  {} beats the current floor of {} — it earns a slot.", score, floor);
    } else {
        println!("  ✗  {} does not beat the floor of {} — no slot.", score, floor);
    }
}

fn record_entry(store: &ScoreStore) {
    let mut board = store.load();

    let name = read_line("  Initials (3 letters): ");
    let name = name.trim();
    if name.is_empty() {
        println!("  ⚠  Need a name.");
        return;
    }
    let score: u32 = match read_line("  Score: ").trim().parse() {
        Ok(s)  => s,
        Err(_) => { println!("  ⚠  Not a number."); return; }
    };
    if !board.qualifies(score) {
        println!("  ✗  {} does not make the table.", score);
        return;
    }

    board.insert(ScoreEntry::new(name, score));
    match store.save(&board) {
        Ok(())  => { println!("  ✓  Saved.\n"); print_table(&board); }
        Err(e)  => println!("  ⚠  Could not save: {}", e),
    }
}

fn reset_table(store: &ScoreStore) {
    let board = Leaderboard::placeholder();
    match store.save(&board) {
        Ok(())  => { println!("  ✓  Table reset.\n"); print_table(&board); }
        Err(e)  => println!("  ⚠  Could not save: {}", e),
    }
}

fn print_table(board: &Leaderboard) {
    for (i, e) in board.entries().iter().enumerate() {
        println!("    {}. {}  {:>5}", i + 1, e.name, e.score);
    }
    if board.is_empty() {
        println!("    (empty)");
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
