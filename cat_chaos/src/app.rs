//! Application assembly: the simulated rig, the game thread, and the window.
//!
//! The minifb window has to live on the main thread, so `run` keeps the
//! render loop for itself and pushes everything else (splash, menus,
//! rounds, scores) onto a worker thread.  The two sides meet only through
//! shared state: the game thread polls the rig's pins and writes the
//! panel; the window loop writes the pins and reads the panel.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chaos_game::{GameEngine, PollRecognizer, SequenceGenerator, Thresholds};
use chaos_scores::{ScoreEntry, ScoreStore, SCORE_FILE};

use crate::beeper::open_beeper;
use crate::console::Console;
use crate::feedback::ConsoleView;
use crate::panel::{run_window, PanelHandle};
use crate::rig::{sim_rig, SimRig};
use crate::screens;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Gesture trigger levels for the recognizer.
    pub thresholds: Thresholds,
    /// Recognizer poll cadence during a round.
    pub poll_tick:  Duration,
    /// Where the high-score table lives on disk.
    pub score_path: PathBuf,
    /// Fixed sequence seed; `None` draws fresh chaos every round.
    pub seed:       Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            thresholds: Thresholds::default(),
            poll_tick:  Duration::from_millis(1),
            score_path: PathBuf::from(SCORE_FILE),
            seed:       None,
        }
    }
}

impl AppConfig {
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_poll_tick(mut self, tick: Duration) -> Self {
        self.poll_tick = tick;
        self
    }

    pub fn with_score_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.score_path = path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// This is the entry point called from `main.rs`.  Returns only when the
/// window is closed; the game thread is still parked in a rig poll at that
/// point and goes down with the process.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    let (rig, driver) = sim_rig();
    let panel = PanelHandle::new();

    let game_panel = panel.clone();
    thread::spawn(move || game_loop(cfg, rig, game_panel));

    run_window(panel, driver)
}

/// Everything except rendering: splash, then rounds forever.
fn game_loop(cfg: AppConfig, mut rig: SimRig, panel: PanelHandle) {
    let mut console = Console::new(
        Box::new(panel.clone()),
        Box::new(panel),
        open_beeper(),
    );
    let store = ScoreStore::new(cfg.score_path.clone());

    screens::splash(&mut console);

    loop {
        let difficulty = screens::choose_difficulty(&mut console, &mut rig);

        let sequences = match cfg.seed {
            Some(seed) => SequenceGenerator::from_seed(seed),
            None       => SequenceGenerator::from_entropy(),
        };
        let mut recognizer = PollRecognizer::new(rig.clone())
            .with_thresholds(cfg.thresholds)
            .with_tick(cfg.poll_tick);
        let mut engine = GameEngine::new(difficulty, sequences);

        // The view borrows the console for the round; the end screen
        // needs it back afterwards.
        let result = {
            let mut view = ConsoleView::new(&mut console);
            engine.play(&mut recognizer, &mut view)
        };

        screens::end_screen(&mut console, &mut rig, &result);

        let mut board = store.load();
        if board.qualifies(result.score) {
            let initials = screens::enter_initials(&mut console, &mut rig);
            board.insert(ScoreEntry::new(&initials, result.score));
            if let Err(e) = store.save(&board) {
                eprintln!("[scores] could not save {}: {}", store.path().display(), e);
            }
        }
        screens::show_highscores(&mut console, &mut rig, &board);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_polls_every_millisecond() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.poll_tick, Duration::from_millis(1));
        assert_eq!(cfg.score_path, PathBuf::from(SCORE_FILE));
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn builders_override_the_defaults() {
        let cfg = AppConfig::default()
            .with_poll_tick(Duration::from_millis(5))
            .with_score_path("/tmp/alt_scores.json")
            .with_seed(7);
        assert_eq!(cfg.poll_tick, Duration::from_millis(5));
        assert_eq!(cfg.score_path, PathBuf::from("/tmp/alt_scores.json"));
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn custom_thresholds_ride_along() {
        let t = Thresholds { shake_accel: 20.0, ..Thresholds::default() };
        let cfg = AppConfig::default().with_thresholds(t);
        assert_eq!(cfg.thresholds.shake_accel, 20.0);
        assert_eq!(cfg.thresholds.rotate_ticks, Thresholds::default().rotate_ticks);
    }
}
