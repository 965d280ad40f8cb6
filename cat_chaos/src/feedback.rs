//! Live feedback during a round: prompts on the panel, colors on the
//! status pixel, tones on the buzzer.

use crate::console::{color, Console};
use chaos_game::{GameView, Gesture};
use std::thread;
use std::time::Duration;

/// Tone each gesture plays when it lands, in Hz.  Tuned so the five
/// gestures are distinguishable by ear alone.
pub fn gesture_tone(gesture: Gesture) -> f32 {
    match gesture {
        Gesture::Press       => 900.0,
        Gesture::RotateLeft  => 800.0,
        Gesture::RotateRight => 850.0,
        Gesture::Shake       => 650.0,
        Gesture::Flip        => 500.0,
    }
}

/// Buzz on a missed step, in Hz.
const FAIL_TONE: f32 = 200.0;

// ════════════════════════════════════════════════════════════════════════════
// ConsoleView — GameView over the rig's outputs
// ════════════════════════════════════════════════════════════════════════════

/// Routes engine events to the [`Console`] for the life of one round.
pub struct ConsoleView<'a> {
    console: &'a mut Console,
}

impl<'a> ConsoleView<'a> {
    pub fn new(console: &'a mut Console) -> Self {
        ConsoleView { console }
    }
}

impl GameView for ConsoleView<'_> {
    fn step_begin(&mut self, level: u8, step: usize, total: usize, gesture: Gesture) {
        self.console.set_lamp(color::WAIT);
        self.console.show(&[
            format!("LEVEL {}", level),
            format!("STEP {}/{}", step, total),
            String::new(),
            format!("DO: {}", gesture.name()),
        ]);
    }

    fn step_result(&mut self, gesture: Gesture, passed: bool) {
        if passed {
            self.console.set_lamp(color::PASS);
            self.console.beep(gesture_tone(gesture), 120);
        } else {
            self.console.set_lamp(color::FAIL);
            self.console.beep(FAIL_TONE, 350);
        }
    }

    fn level_complete(&mut self, level: u8, score: u32) {
        self.console.set_lamp(color::CLEAR);
        self.console.show(&[
            format!("LEVEL {} CLEAR", level),
            String::new(),
            format!("SCORE {}", score),
        ]);
        self.console.beep(700.0, 120);
        self.console.beep(900.0, 160);
        // Let the clear screen land before the next prompt replaces it.
        thread::sleep(Duration::from_millis(400));
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testkit::tape_console;
    use std::collections::HashSet;

    #[test]
    fn waiting_step_prompts_on_blue() {
        let (mut console, tape) = tape_console();
        ConsoleView::new(&mut console).step_begin(3, 2, 4, Gesture::Shake);
        assert_eq!(tape.events(), [
            "lamp 0,0,255",
            "show LEVEL 3|STEP 2/4||DO: SHAKE",
        ]);
    }

    #[test]
    fn pass_flashes_green_with_the_gesture_tone() {
        let (mut console, tape) = tape_console();
        ConsoleView::new(&mut console).step_result(Gesture::Flip, true);
        assert_eq!(tape.events(), ["lamp 0,255,0", "beep 500"]);
    }

    #[test]
    fn fail_flashes_red_with_a_buzz() {
        let (mut console, tape) = tape_console();
        ConsoleView::new(&mut console).step_result(Gesture::Press, false);
        assert_eq!(tape.events(), ["lamp 255,0,0", "beep 200"]);
    }

    #[test]
    fn level_complete_chirps_twice_on_teal() {
        let (mut console, tape) = tape_console();
        ConsoleView::new(&mut console).level_complete(2, 13);
        assert_eq!(tape.events(), [
            "lamp 0,255,180",
            "show LEVEL 2 CLEAR||SCORE 13",
            "beep 700",
            "beep 900",
        ]);
    }

    #[test]
    fn gesture_tones_are_distinct() {
        let tones: HashSet<u32> = Gesture::ALL
            .iter()
            .map(|&g| gesture_tone(g) as u32)
            .collect();
        assert_eq!(tones.len(), Gesture::ALL.len());
    }
}
