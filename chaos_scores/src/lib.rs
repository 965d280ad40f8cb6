//! # chaos_scores
//!
//! Top-3 leaderboard for the Cat Chaos rig, persisted as a JSON array.
//!
//! * [`ScoreEntry`] — a 3-letter tag plus a score
//! * [`Leaderboard`] — the ordered table, capacity fixed at 3
//! * [`ScoreStore`] — load/save against a file, never failing on load
//!
//! A score earns a slot only when it *beats* the lowest score already
//! holding one; free slots count as score 0, and ties keep their arrival
//! order (the incumbent stays, the newcomer falls off the end).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use chaos_scores::{ScoreEntry, ScoreStore, SCORE_FILE};
//!
//! let store = ScoreStore::new(SCORE_FILE);
//! let mut board = store.load();            // placeholders if file is bad
//! if board.qualifies(92) {
//!     board.insert(ScoreEntry::new("MEW", 92));
//!     store.save(&board).unwrap();
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Default score file, created next to the executable on first save.
pub const SCORE_FILE: &str = "highscores.json";

// ════════════════════════════════════════════════════════════════════════════
// ScoreEntry — one row of the table
// ════════════════════════════════════════════════════════════════════════════

/// A single leaderboard row: a 3-character tag and the score it earned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name:  String,
    pub score: u32,
}

impl ScoreEntry {
    /// Build an entry, normalising `name` to exactly 3 characters:
    /// uppercased, clipped after the third character, padded with `-`.
    pub fn new(name: &str, score: u32) -> Self {
        let mut tag: String = name
            .chars()
            .take(3)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        while tag.chars().count() < 3 {
            tag.push('-');
        }
        ScoreEntry { name: tag, score }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Leaderboard — ordered top-3 table
// ════════════════════════════════════════════════════════════════════════════

/// The ordered score table.  Holds at most [`Leaderboard::CAPACITY`]
/// entries, sorted by score descending; equal scores keep arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Number of slots on the table.
    pub const CAPACITY: usize = 3;

    /// A table with no entries (every slot free, floor score 0).
    pub fn empty() -> Self {
        Leaderboard { entries: Vec::new() }
    }

    /// The factory-fresh table: `AAA`, `BBB`, `CCC`, all at score 0.
    /// Also the fallback whenever the score file cannot be read.
    pub fn placeholder() -> Self {
        Leaderboard {
            entries: vec![
                ScoreEntry::new("AAA", 0),
                ScoreEntry::new("BBB", 0),
                ScoreEntry::new("CCC", 0),
            ],
        }
    }

    /// Ingest rows from an untrusted source (typically the score file):
    /// tags are re-normalised, the list re-sorted and re-truncated, so the
    /// capacity-3 ordered invariant holds even for a tampered file.
    pub fn from_entries(raw: Vec<ScoreEntry>) -> Self {
        let mut entries: Vec<ScoreEntry> = raw
            .into_iter()
            .map(|e| ScoreEntry::new(&e.name, e.score))
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(Self::CAPACITY);
        Leaderboard { entries }
    }

    /// Rows in rank order, best first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Lowest score currently holding a slot; 0 while any slot is free.
    fn floor(&self) -> u32 {
        if self.entries.len() < Self::CAPACITY {
            return 0;
        }
        self.entries.last().map(|e| e.score).unwrap_or(0)
    }

    /// Whether `score` earns a slot.  Strictly greater than the floor:
    /// matching the lowest incumbent is not enough.
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.floor()
    }

    /// Add `entry`, re-rank, and drop whatever falls past the last slot.
    ///
    /// The newcomer is appended *before* the stable sort, so on a tied
    /// score it ranks below every incumbent with the same score.
    pub fn insert(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(Self::CAPACITY);
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Leaderboard::placeholder()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ScoreStore — JSON file persistence
// ════════════════════════════════════════════════════════════════════════════

/// Loads and saves a [`Leaderboard`] as a JSON array of `{name, score}`
/// objects.  Loading never fails: a missing, unreadable, or malformed
/// file falls back to [`Leaderboard::placeholder`] with a note on stderr.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table from disk, substituting placeholders on any failure.
    pub fn load(&self) -> Leaderboard {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!("[scores] no score file at {} — starting fresh",
                          self.path.display());
                return Leaderboard::placeholder();
            }
            Err(e) => {
                eprintln!("[scores] could not read {}: {} — starting fresh",
                          self.path.display(), e);
                return Leaderboard::placeholder();
            }
        };
        match serde_json::from_str::<Vec<ScoreEntry>>(&text) {
            Ok(raw) => Leaderboard::from_entries(raw),
            Err(e)  => {
                eprintln!("[scores] {} is not a score table ({}) — starting fresh",
                          self.path.display(), e);
                Leaderboard::placeholder()
            }
        }
    }

    /// Replace the whole file with `board` serialised as a JSON array.
    pub fn save(&self, board: &Leaderboard) -> io::Result<()> {
        let json = serde_json::to_string_pretty(board.entries())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, json)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Leaderboard {
        Leaderboard::from_entries(vec![
            ScoreEntry::new("AAA", 100),
            ScoreEntry::new("BBB", 80),
            ScoreEntry::new("CCC", 60),
        ])
    }

    fn names(board: &Leaderboard) -> Vec<&str> {
        board.entries().iter().map(|e| e.name.as_str()).collect()
    }

    // ── qualification ────────────────────────────────────────────────────
    #[test]
    fn score_below_floor_does_not_qualify() {
        let board = sample_board();
        assert!(!board.qualifies(50));
    }

    #[test]
    fn score_matching_floor_does_not_qualify() {
        let board = sample_board();
        assert!(!board.qualifies(60));
        assert!(board.qualifies(61));
    }

    #[test]
    fn free_slots_count_as_zero() {
        let mut board = Leaderboard::empty();
        assert!(board.qualifies(1));
        assert!(!board.qualifies(0));

        board.insert(ScoreEntry::new("XXX", 50));
        board.insert(ScoreEntry::new("YYY", 50));
        // Third slot is still free, so even a score of 1 gets in.
        assert!(board.qualifies(1));
    }

    // ── insertion and ordering ───────────────────────────────────────────
    #[test]
    fn insert_displaces_the_lowest() {
        let mut board = sample_board();
        board.insert(ScoreEntry::new("NEW", 70));
        assert_eq!(names(&board), ["AAA", "BBB", "NEW"]);
        assert_eq!(board.entries()[2].score, 70);
    }

    #[test]
    fn insert_keeps_descending_order() {
        let mut board = Leaderboard::empty();
        board.insert(ScoreEntry::new("LOW", 10));
        board.insert(ScoreEntry::new("TOP", 30));
        board.insert(ScoreEntry::new("MID", 20));
        assert_eq!(names(&board), ["TOP", "MID", "LOW"]);
    }

    #[test]
    fn tied_newcomer_ranks_below_incumbents() {
        let mut board = Leaderboard::empty();
        board.insert(ScoreEntry::new("ONE", 80));
        board.insert(ScoreEntry::new("TWO", 80));
        board.insert(ScoreEntry::new("TRE", 80));
        assert_eq!(names(&board), ["ONE", "TWO", "TRE"]);

        // A fourth 80 arrives last, sorts last, and falls off.
        board.insert(ScoreEntry::new("FOR", 80));
        assert_eq!(names(&board), ["ONE", "TWO", "TRE"]);
    }

    #[test]
    fn capacity_never_exceeded() {
        let mut board = Leaderboard::empty();
        for i in 0..10u32 {
            board.insert(ScoreEntry::new("CAT", i * 7));
            assert!(board.len() <= Leaderboard::CAPACITY);
        }
        assert_eq!(board.len(), 3);
        // 63, 56, 49 after ten inserts of 0,7,...,63.
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, [63, 56, 49]);
    }

    // ── tag normalisation ────────────────────────────────────────────────
    #[test]
    fn tags_are_clamped_to_three_chars() {
        assert_eq!(ScoreEntry::new("WHISKERS", 9).name, "WHI");
        assert_eq!(ScoreEntry::new("ab", 1).name, "AB-");
        assert_eq!(ScoreEntry::new("", 0).name, "---");
    }

    // ── placeholders ─────────────────────────────────────────────────────
    #[test]
    fn placeholder_table() {
        let board = Leaderboard::placeholder();
        assert_eq!(names(&board), ["AAA", "BBB", "CCC"]);
        assert!(board.entries().iter().all(|e| e.score == 0));
    }

    #[test]
    fn default_is_placeholder() {
        assert_eq!(Leaderboard::default(), Leaderboard::placeholder());
    }

    // ── sanitising untrusted input ───────────────────────────────────────
    #[test]
    fn from_entries_sorts_and_truncates() {
        let board = Leaderboard::from_entries(vec![
            ScoreEntry::new("CCC", 10),
            ScoreEntry::new("AAA", 90),
            ScoreEntry::new("DDD", 40),
            ScoreEntry::new("BBB", 70),
            ScoreEntry::new("EEE", 5),
        ]);
        assert_eq!(names(&board), ["AAA", "BBB", "DDD"]);
    }

    // ── persistence ──────────────────────────────────────────────────────
    #[test]
    fn round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join(SCORE_FILE));

        let mut board = Leaderboard::empty();
        board.insert(ScoreEntry::new("CAT", 92));
        board.insert(ScoreEntry::new("MEW", 92)); // tie, ranks second
        board.insert(ScoreEntry::new("DOG", 15));
        store.save(&board).unwrap();

        assert_eq!(store.load(), board);
    }

    #[test]
    fn missing_file_yields_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("nope.json"));
        assert_eq!(store.load(), Leaderboard::placeholder());
    }

    #[test]
    fn corrupt_file_yields_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SCORE_FILE);
        std::fs::write(&path, "o no { not json").unwrap();
        assert_eq!(ScoreStore::new(path).load(), Leaderboard::placeholder());
    }

    #[test]
    fn tampered_file_is_sanitised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SCORE_FILE);
        // Unsorted, over-long, with a sprawling name.
        std::fs::write(&path, r#"[
            {"name": "lowball",  "score": 3},
            {"name": "Z",        "score": 77},
            {"name": "midfield", "score": 40},
            {"name": "ace",      "score": 99},
            {"name": "dud",      "score": 1}
        ]"#).unwrap();

        let board = ScoreStore::new(path).load();
        assert_eq!(names(&board), ["ACE", "Z--", "MID"]);
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, [99, 77, 40]);
    }
}
