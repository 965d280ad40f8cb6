//! The screens around a round: splash, difficulty menu, end screen,
//! initials entry, and the high-score table.
//!
//! Every screen polls the rig directly; navigation is the encoder
//! (through a [`Dial`]) and the one button.

use crate::console::{color, Console, Rgb};
use chaos_game::{Difficulty, GameResult};
use chaos_scores::Leaderboard;
use chaos_sense::{Dial, InputSource};
use std::thread;
use std::time::Duration;

/// Poll cadence for menu loops.  Must stay under the rig driver's
/// per-phase hold (3 ms), or menus would miss quadrature steps and
/// read turns backwards.
const MENU_TICK: Duration = Duration::from_millis(2);

/// Settle time after a confirming press, so one press is one action.
const DEBOUNCE: Duration = Duration::from_millis(200);

// ════════════════════════════════════════════════════════════════════════════
// Splash
// ════════════════════════════════════════════════════════════════════════════

/// Startup animation: the title typed out over alternating cat faces,
/// a rainbow sweep on the pixel, then a four-note chime.  Runs once.
pub fn splash(console: &mut Console) {
    const TITLE: &str = "CAT CHAOS";
    const FACES: [&str; 2] = ["=^..^=", "=^.w.^="];
    const RAINBOW: [Rgb; 5] = [
        (255, 80, 0),
        (255, 180, 0),
        (0, 200, 255),
        (0, 255, 150),
        (180, 0, 255),
    ];

    for i in 1..=TITLE.len() {
        console.set_lamp(RAINBOW[(i - 1) % RAINBOW.len()]);
        console.show(&[
            FACES[i % 2].to_string(),
            String::new(),
            TITLE[..i].to_string(),
        ]);
        thread::sleep(Duration::from_millis(90));
    }
    for (freq, ms) in [(700.0, 110), (800.0, 110), (900.0, 110), (750.0, 220)] {
        console.beep(freq, ms);
    }
    console.show(&[
        FACES[0].to_string(),
        String::new(),
        TITLE.to_string(),
        String::new(),
        "GET READY".to_string(),
    ]);
    console.set_lamp(color::OFF);
    thread::sleep(Duration::from_millis(400));
}

// ════════════════════════════════════════════════════════════════════════════
// Difficulty menu
// ════════════════════════════════════════════════════════════════════════════

/// Pick EASY / MEDIUM / HARD: turning the encoder moves the selection
/// (index = |counter| mod 3), the button confirms.
pub fn choose_difficulty<S: InputSource>(console: &mut Console, rig: &mut S) -> Difficulty {
    let mut dial = Dial::new(Difficulty::ALL.len());
    let mut shown = usize::MAX; // force the first draw

    loop {
        let s = rig.sample();
        dial.update(s.clk, s.dt);

        let index = dial.index();
        if index != shown {
            shown = index;
            let mut lines = vec!["PICK DIFFICULTY".to_string(), String::new()];
            for (i, d) in Difficulty::ALL.iter().enumerate() {
                let marker = if i == index { '>' } else { ' ' };
                lines.push(format!("{} {}", marker, d.name()));
            }
            lines.push(String::new());
            lines.push("TURN: MOVE  PRESS: GO".to_string());
            console.show(&lines);
        }

        if s.button_pressed() {
            console.beep(800.0, 120);
            wait_release(rig);
            return Difficulty::ALL[index];
        }
        thread::sleep(MENU_TICK);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// End screen
// ════════════════════════════════════════════════════════════════════════════

/// Show the round outcome, then wait for the button.
pub fn end_screen<S: InputSource>(console: &mut Console, rig: &mut S, result: &GameResult) {
    if result.won {
        console.set_lamp(color::PASS);
        console.show(&[
            "YOU WIN!".to_string(),
            String::new(),
            format!("SCORE {}", result.score),
            String::new(),
            "PRESS TO GO ON".to_string(),
        ]);
        console.beep(900.0, 150);
        console.beep(1100.0, 250);
    } else {
        console.set_lamp(color::FAIL);
        console.show(&[
            "GAME OVER".to_string(),
            format!("LEVEL {}", result.level_reached),
            String::new(),
            format!("SCORE {}", result.score),
            String::new(),
            "PRESS TO GO ON".to_string(),
        ]);
        console.beep(300.0, 400);
    }
    wait_button(rig);
    console.beep(600.0, 100);
}

// ════════════════════════════════════════════════════════════════════════════
// Initials entry
// ════════════════════════════════════════════════════════════════════════════

/// Three letters, one at a time: turning cycles A..Z (index =
/// |counter| mod 26), the button confirms.  The dial resets per letter
/// so each starts on A.
pub fn enter_initials<S: InputSource>(console: &mut Console, rig: &mut S) -> String {
    const LETTERS: usize = 26;
    let mut initials = String::new();
    let mut dial = Dial::new(LETTERS);

    for _ in 0..3 {
        dial.reset();
        let mut shown = usize::MAX;
        loop {
            let s = rig.sample();
            dial.update(s.clk, s.dt);

            let index = dial.index();
            if index != shown {
                shown = index;
                let letter = (b'A' + index as u8) as char;
                console.show(&[
                    "NEW HIGH SCORE".to_string(),
                    String::new(),
                    "INITIALS:".to_string(),
                    initials_row(&initials, letter),
                ]);
            }

            if s.button_pressed() {
                initials.push((b'A' + index as u8) as char);
                console.beep(800.0, 80);
                wait_release(rig);
                break;
            }
            thread::sleep(MENU_TICK);
        }
    }
    initials
}

/// `"C A _"` style row: confirmed letters, the live letter, then
/// underscores for slots still to come.
fn initials_row(confirmed: &str, current: char) -> String {
    let mut row = String::new();
    for i in 0..3 {
        let ch = if i < confirmed.len() {
            confirmed.as_bytes()[i] as char
        } else if i == confirmed.len() {
            current
        } else {
            '_'
        };
        row.push(ch);
        if i < 2 {
            row.push(' ');
        }
    }
    row
}

// ════════════════════════════════════════════════════════════════════════════
// High-score table
// ════════════════════════════════════════════════════════════════════════════

/// Render the table, then wait for the button to start a new round.
pub fn show_highscores<S: InputSource>(console: &mut Console, rig: &mut S, board: &Leaderboard) {
    let mut lines = vec!["TOP CATS".to_string(), String::new()];
    for (i, e) in board.entries().iter().enumerate() {
        lines.push(format!("{}. {} {:>4}", i + 1, e.name, e.score));
    }
    lines.push(String::new());
    lines.push("PRESS TO PLAY".to_string());

    console.set_lamp(color::OFF);
    console.show(&lines);
    wait_button(rig);
    console.beep(600.0, 100);
}

// ── button helpers ──────────────────────────────────────────────────────────

/// Block until the button is pressed and released again.
fn wait_button<S: InputSource>(rig: &mut S) {
    while !rig.sample().button_pressed() {
        thread::sleep(MENU_TICK);
    }
    wait_release(rig);
}

/// Block until the button is released, then debounce.
fn wait_release<S: InputSource>(rig: &mut S) {
    while rig.sample().button_pressed() {
        thread::sleep(MENU_TICK);
    }
    thread::sleep(DEBOUNCE);
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testkit::tape_console;
    use chaos_sense::InputSample;

    // Replays canned frames; repeats the last one when exhausted.
    struct Script {
        frames: Vec<InputSample>,
        at:     usize,
    }

    impl Script {
        fn new(frames: Vec<InputSample>) -> Self {
            Script { frames, at: 0 }
        }
    }

    impl InputSource for Script {
        fn sample(&mut self) -> InputSample {
            let i = self.at.min(self.frames.len() - 1);
            self.at += 1;
            self.frames[i]
        }
    }

    fn pressed() -> InputSample {
        InputSample { sw: false, ..InputSample::idle() }
    }

    /// One clockwise quadrature cycle, starting from the idle pair.
    fn push_cw_cycle(frames: &mut Vec<InputSample>) {
        for (clk, dt) in [(false, true), (false, false), (true, false), (true, true)] {
            frames.push(InputSample { clk, dt, ..InputSample::idle() });
        }
    }

    /// One counter-clockwise cycle.
    fn push_ccw_cycle(frames: &mut Vec<InputSample>) {
        for (clk, dt) in [(true, false), (false, false), (false, true), (true, true)] {
            frames.push(InputSample { clk, dt, ..InputSample::idle() });
        }
    }

    // ── difficulty menu ──────────────────────────────────────────────────
    #[test]
    fn immediate_press_picks_easy() {
        let (mut console, tape) = tape_console();
        let mut rig = Script::new(vec![pressed(), InputSample::idle()]);
        let choice = choose_difficulty(&mut console, &mut rig);
        assert_eq!(choice, Difficulty::Easy);
        assert!(tape.events().contains(&"beep 800".to_string()));
    }

    #[test]
    fn one_turn_selects_medium() {
        let (mut console, _tape) = tape_console();
        let mut frames = Vec::new();
        push_cw_cycle(&mut frames);
        frames.push(pressed());
        frames.push(InputSample::idle());
        let mut rig = Script::new(frames);
        assert_eq!(choose_difficulty(&mut console, &mut rig), Difficulty::Medium);
    }

    #[test]
    fn two_ccw_turns_select_hard() {
        // |−2| mod 3 = 2: turning either way moves the selection.
        let (mut console, _tape) = tape_console();
        let mut frames = Vec::new();
        push_ccw_cycle(&mut frames);
        push_ccw_cycle(&mut frames);
        frames.push(pressed());
        frames.push(InputSample::idle());
        let mut rig = Script::new(frames);
        assert_eq!(choose_difficulty(&mut console, &mut rig), Difficulty::Hard);
    }

    #[test]
    fn menu_redraws_only_on_change() {
        let (mut console, tape) = tape_console();
        let mut frames = vec![InputSample::idle(); 20];
        frames.push(pressed());
        frames.push(InputSample::idle());
        let mut rig = Script::new(frames);
        choose_difficulty(&mut console, &mut rig);

        let shows = tape.events().iter().filter(|e| e.starts_with("show")).count();
        assert_eq!(shows, 1);
    }

    // ── initials entry ───────────────────────────────────────────────────
    #[test]
    fn initials_cycle_and_reset_per_letter() {
        let (mut console, _tape) = tape_console();
        let mut frames = Vec::new();
        // 'C': two cycles from a fresh dial.
        push_cw_cycle(&mut frames);
        push_cw_cycle(&mut frames);
        frames.push(pressed());
        frames.push(InputSample::idle());
        // 'A': the dial reset back to the top of the alphabet.
        frames.push(pressed());
        frames.push(InputSample::idle());
        // 'B': one cycle.
        push_cw_cycle(&mut frames);
        frames.push(pressed());
        frames.push(InputSample::idle());

        let mut rig = Script::new(frames);
        assert_eq!(enter_initials(&mut console, &mut rig), "CAB");
    }

    #[test]
    fn initials_row_marks_progress() {
        assert_eq!(initials_row("", 'A'), "A _ _");
        assert_eq!(initials_row("C", 'B'), "C B _");
        assert_eq!(initials_row("CA", 'Z'), "C A Z");
    }

    // ── end screen and score table ───────────────────────────────────────
    #[test]
    fn win_screen_plays_the_fanfare() {
        let (mut console, tape) = tape_console();
        let mut rig = Script::new(vec![pressed(), InputSample::idle()]);
        let result = GameResult { score: 115, won: true, level_reached: 10 };
        end_screen(&mut console, &mut rig, &result);

        let events = tape.events();
        assert_eq!(events[0], "lamp 0,255,0");
        assert!(events[1].contains("YOU WIN!") && events[1].contains("SCORE 115"));
        assert_eq!(&events[2..], ["beep 900", "beep 1100", "beep 600"]);
    }

    #[test]
    fn lose_screen_shows_the_level_reached() {
        let (mut console, tape) = tape_console();
        let mut rig = Script::new(vec![pressed(), InputSample::idle()]);
        let result = GameResult { score: 9, won: false, level_reached: 2 };
        end_screen(&mut console, &mut rig, &result);

        let events = tape.events();
        assert_eq!(events[0], "lamp 255,0,0");
        assert!(events[1].contains("GAME OVER") && events[1].contains("LEVEL 2"));
        assert_eq!(&events[2..], ["beep 300", "beep 600"]);
    }

    #[test]
    fn highscore_rows_use_the_classic_format() {
        let (mut console, tape) = tape_console();
        let mut rig = Script::new(vec![pressed(), InputSample::idle()]);
        show_highscores(&mut console, &mut rig, &Leaderboard::placeholder());

        let events = tape.events();
        assert!(events[1].contains("1. AAA    0"));
        assert!(events[1].contains("3. CCC    0"));
    }

    // ── splash ───────────────────────────────────────────────────────────
    #[test]
    fn splash_types_the_title_and_chimes() {
        let (mut console, tape) = tape_console();
        splash(&mut console);

        let events = tape.events();
        let beeps: Vec<&String> = events.iter().filter(|e| e.starts_with("beep")).collect();
        assert_eq!(beeps, ["beep 700", "beep 800", "beep 900", "beep 750"]);
        let shows = events.iter().filter(|e| e.starts_with("show")).count();
        assert_eq!(shows, "CAT CHAOS".len() + 1);
        assert!(events[events.len() - 2].contains("CAT CHAOS"));
        assert_eq!(events[events.len() - 1], "lamp 0,0,0");
    }
}
