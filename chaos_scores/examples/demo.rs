//! Walkthrough of the score table: qualification, ranking, persistence.
//!
//! Writes `demo_scores.json` to the current directory.

use chaos_scores::{Leaderboard, ScoreEntry, ScoreStore};

fn print_table(board: &Leaderboard) {
    for (i, e) in board.entries().iter().enumerate() {
        println!("   {}. {}  {:>5}", i + 1, e.name, e.score);
    }
}

fn main() {
    println!("\n=== Cat Chaos Score Table Demo ===\n");

    // ── 1. Qualification ──────────────────────────────────────────────────
    let mut board = Leaderboard::from_entries(vec![
        ScoreEntry::new("AAA", 100),
        ScoreEntry::new("BBB", 80),
        ScoreEntry::new("CCC", 60),
    ]);
    println!("1. Current table");
    print_table(&board);
    for score in [50u32, 60, 70] {
        println!("   score {:>3} qualifies? {}", score, board.qualifies(score));
    }
    println!();

    // ── 2. Insertion drops the floor entry ────────────────────────────────
    println!("2. Recording NEW at 70 (CCC falls off)");
    board.insert(ScoreEntry::new("NEW", 70));
    print_table(&board);
    println!();

    // ── 3. Ties keep arrival order ────────────────────────────────────────
    println!("3. Three-way tie at 80, then a late fourth 80");
    let mut tied = Leaderboard::empty();
    for name in ["ONE", "TWO", "TRE"] {
        tied.insert(ScoreEntry::new(name, 80));
    }
    tied.insert(ScoreEntry::new("FOR", 80)); // arrives last, ranks last, drops
    print_table(&tied);
    println!();

    // ── 4. Round trip through a file ──────────────────────────────────────
    println!("4. Saving and reloading demo_scores.json");
    let store = ScoreStore::new("demo_scores.json");
    match store.save(&board) {
        Ok(())  => {
            let reloaded = store.load();
            println!("   reloaded == saved? {}", reloaded == board);
            print_table(&reloaded);
        }
        Err(e) => println!("   could not save: {}", e),
    }
    println!();

    // ── 5. A missing file falls back to placeholders ──────────────────────
    println!("5. Loading a path that does not exist");
    let fresh = ScoreStore::new("no_such_scores.json").load();
    print_table(&fresh);
}
