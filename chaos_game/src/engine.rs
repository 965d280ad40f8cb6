//! Level progression, scoring and the win/lose state machine.

use std::fmt;
use std::time::Duration;

use crate::detect::Recognizer;
use crate::gesture::Gesture;
use crate::sequence::SequenceGenerator;

// ════════════════════════════════════════════════════════════════════════════
// Difficulty & deadline schedule
// ════════════════════════════════════════════════════════════════════════════

/// Difficulty sets the base time budget per gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, in menu order.
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Base seconds before the per-level decay is applied.
    pub fn base_secs(self) -> f32 {
        match self {
            Difficulty::Easy   => 2.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard   => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy   => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard   => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Levels run 1..=[`MAX_LEVEL`].
pub const MAX_LEVEL: u8 = 10;

/// Flat score bonus for clearing every step of a level.
pub const LEVEL_BONUS: u32 = 5;

/// Per-gesture time budget for a level: `base(difficulty) × 0.92^level`.
///
/// Strictly decreasing in level, independent of the step index within the
/// level. EASY level 1 works out to 2.0 × 0.92 = 1.84 s.
pub fn deadline_for(difficulty: Difficulty, level: u8) -> Duration {
    Duration::from_secs_f32(difficulty.base_secs() * 0.92f32.powi(level as i32))
}

// ════════════════════════════════════════════════════════════════════════════
// GameView — presentation callbacks
// ════════════════════════════════════════════════════════════════════════════

/// Presentation hooks the engine fires as a round unfolds.
///
/// The engine's decisions never depend on the view; feedback color and
/// sound belong to the shell, not to recognition or scoring.
pub trait GameView {
    /// A step is about to be attempted. `step` is 1-based, `total` is the
    /// sequence length for this level.
    fn step_begin(&mut self, level: u8, step: usize, total: usize, gesture: Gesture);
    /// The attempt resolved.
    fn step_result(&mut self, gesture: Gesture, passed: bool);
    /// Every step of `level` passed; `score` already includes the bonus.
    fn level_complete(&mut self, level: u8, score: u32);
}

/// View that swallows everything (tests, scripted rehearsals).
pub struct SilentView;

impl GameView for SilentView {
    fn step_begin(&mut self, _level: u8, _step: usize, _total: usize, _gesture: Gesture) {}
    fn step_result(&mut self, _gesture: Gesture, _passed: bool) {}
    fn level_complete(&mut self, _level: u8, _score: u32) {}
}

// ════════════════════════════════════════════════════════════════════════════
// GameResult / GameEngine
// ════════════════════════════════════════════════════════════════════════════

/// Outcome of one playthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score:         u32,
    pub won:           bool,
    /// Highest level that was started.
    pub level_reached: u8,
}

/// Drives levels 1..=[`MAX_LEVEL`]: one fresh sequence per level, one
/// recognizer call per step, +1 score per passed step, +[`LEVEL_BONUS`] per
/// cleared level. The first failed step ends the run; clearing level 10
/// wins it.
pub struct GameEngine {
    difficulty: Difficulty,
    sequences:  SequenceGenerator,
}

impl GameEngine {
    pub fn new(difficulty: Difficulty, sequences: SequenceGenerator) -> Self {
        GameEngine { difficulty, sequences }
    }

    pub fn difficulty(&self) -> Difficulty { self.difficulty }

    /// Play one full round. Blocks the caller; each step blocks for at most
    /// one deadline. Recognizer failure is the normal path to LOSE, not an
    /// error.
    pub fn play<R, V>(&mut self, recognizer: &mut R, view: &mut V) -> GameResult
    where
        R: Recognizer,
        V: GameView,
    {
        let mut score = 0u32;

        for level in 1..=MAX_LEVEL {
            let sequence = self.sequences.generate(level);
            let deadline = deadline_for(self.difficulty, level);

            for (i, &gesture) in sequence.iter().enumerate() {
                view.step_begin(level, i + 1, sequence.len(), gesture);
                let passed = recognizer.detect(gesture, deadline);
                view.step_result(gesture, passed);
                if !passed {
                    return GameResult { score, won: false, level_reached: level };
                }
                score += 1;
            }

            score += LEVEL_BONUS;
            view.level_complete(level, score);
        }

        GameResult { score, won: true, level_reached: MAX_LEVEL }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Pops scripted outcomes in order, passing everything once exhausted.
    struct Scripted {
        outcomes: Vec<bool>,
        at:       usize,
    }

    impl Recognizer for Scripted {
        fn detect(&mut self, _gesture: Gesture, _deadline: Duration) -> bool {
            let r = self.outcomes.get(self.at).copied().unwrap_or(true);
            self.at += 1;
            r
        }
    }

    fn pass_all() -> Scripted {
        Scripted { outcomes: Vec::new(), at: 0 }
    }

    /// Passes every step until level `level`, step `step` (1-based), which
    /// fails.
    fn fail_at(level: u8, step: usize) -> Scripted {
        let prior: usize = (1..level).map(|l| l as usize + 1).sum();
        let mut outcomes = vec![true; prior + step - 1];
        outcomes.push(false);
        Scripted { outcomes, at: 0 }
    }

    /// Score the rules predict for a failure at (level, step):
    /// each prior level contributes its steps plus the bonus, the failing
    /// level contributes its passed steps only.
    fn expected_fail_score(level: u8, step: usize) -> u32 {
        let prior: u32 = (1..level).map(|l| l as u32 + 1 + LEVEL_BONUS).sum();
        prior + (step as u32 - 1)
    }

    fn engine(difficulty: Difficulty) -> GameEngine {
        GameEngine::new(difficulty, SequenceGenerator::from_seed(99))
    }

    // ── deadline schedule ─────────────────────────────────────────────────

    #[test]
    fn easy_level_one_deadline_is_1_84s() {
        let d = deadline_for(Difficulty::Easy, 1);
        assert!((d.as_secs_f32() - 1.84).abs() < 1e-3);
    }

    #[test]
    fn deadlines_strictly_decrease_with_level() {
        for difficulty in Difficulty::ALL {
            for level in 1..MAX_LEVEL {
                assert!(
                    deadline_for(difficulty, level) > deadline_for(difficulty, level + 1),
                    "{} level {} should outlast level {}",
                    difficulty, level, level + 1
                );
            }
        }
    }

    #[test]
    fn harder_difficulties_get_less_time() {
        for level in 1..=MAX_LEVEL {
            let easy   = deadline_for(Difficulty::Easy, level);
            let medium = deadline_for(Difficulty::Medium, level);
            let hard   = deadline_for(Difficulty::Hard, level);
            assert!(easy > medium && medium > hard);
        }
    }

    // ── scoring & termination ─────────────────────────────────────────────

    #[test]
    fn clearing_all_levels_wins_with_115() {
        // Steps: 2+3+...+11 = 65, bonuses: 10 × 5 = 50.
        let result = engine(Difficulty::Easy).play(&mut pass_all(), &mut SilentView);
        assert_eq!(result, GameResult { score: 115, won: true, level_reached: MAX_LEVEL });
    }

    #[test]
    fn failing_the_first_step_scores_zero() {
        let result = engine(Difficulty::Hard).play(&mut fail_at(1, 1), &mut SilentView);
        assert_eq!(result, GameResult { score: 0, won: false, level_reached: 1 });
    }

    #[test]
    fn clearing_level_one_banks_seven() {
        // Both level-1 steps plus the bonus, then nothing at level 2.
        let result = engine(Difficulty::Easy).play(&mut fail_at(2, 1), &mut SilentView);
        assert_eq!(result.score, 7);
        assert!(!result.won);
        assert_eq!(result.level_reached, 2);
    }

    #[test]
    fn forced_failures_match_the_score_formula() {
        for (level, step) in [(1, 2), (2, 3), (3, 4), (5, 1), (10, 11)] {
            let result = engine(Difficulty::Medium).play(&mut fail_at(level, step), &mut SilentView);
            assert_eq!(result.score, expected_fail_score(level, step),
                       "failure at level {} step {}", level, step);
            assert!(!result.won);
            assert_eq!(result.level_reached, level);
        }
    }

    #[test]
    fn no_bonus_for_the_failing_level() {
        // Fail on the last step of level 2: banks 7 + 2 passed steps = 9,
        // not the 15 a completed level 2 would bank.
        let result = engine(Difficulty::Easy).play(&mut fail_at(2, 3), &mut SilentView);
        assert_eq!(result.score, 9);
    }

    // ── view callbacks ────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingView {
        events: Vec<String>,
    }

    impl GameView for RecordingView {
        fn step_begin(&mut self, level: u8, step: usize, total: usize, gesture: Gesture) {
            self.events.push(format!("begin {}:{}/{} {}", level, step, total, gesture));
        }
        fn step_result(&mut self, gesture: Gesture, passed: bool) {
            self.events.push(format!("result {} {}", gesture, passed));
        }
        fn level_complete(&mut self, level: u8, score: u32) {
            self.events.push(format!("clear {} {}", level, score));
        }
    }

    #[test]
    fn view_sees_the_round_in_order() {
        let mut view = RecordingView::default();
        engine(Difficulty::Easy).play(&mut fail_at(2, 2), &mut view);

        // Level 1: 2 begin/result pairs + clear; level 2: 2 pairs, no clear.
        assert_eq!(view.events.len(), 9);
        assert!(view.events[0].starts_with("begin 1:1/2"));
        assert!(view.events[1].starts_with("result"));
        assert_eq!(view.events[4], "clear 1 7");
        assert!(view.events[5].starts_with("begin 2:1/3"));
        assert!(view.events[8].ends_with("false"));
    }

    #[test]
    fn every_step_gets_a_begin_before_its_result() {
        let mut view = RecordingView::default();
        engine(Difficulty::Easy).play(&mut pass_all(), &mut view);
        let mut expecting_begin = true;
        for e in view.events.iter().filter(|e| !e.starts_with("clear")) {
            if expecting_begin {
                assert!(e.starts_with("begin"), "out of order: {}", e);
            } else {
                assert!(e.starts_with("result"), "out of order: {}", e);
            }
            expecting_begin = !expecting_begin;
        }
    }
}
