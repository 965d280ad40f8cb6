//! Buzzer tones, sent out as MIDI notes.
//!
//! The toy's piezo buzzer becomes a square-lead patch on whatever MIDI
//! output port the host offers.  Hosts without one get a silent beeper
//! that still sleeps for the tone duration, so game pacing is identical
//! either way.

use std::thread;
use std::time::Duration;

/// MIDI program for the buzzer voice (GM Lead 1, square).
const BUZZER_PROGRAM: u8 = 80;
const CHANNEL:  u8 = 0;
const VELOCITY: u8 = 100;

// ════════════════════════════════════════════════════════════════════════════
// Beeper — the tone sink
// ════════════════════════════════════════════════════════════════════════════

/// A fire-and-forget tone sink.  `beep` blocks for roughly `dur`, so
/// callers can lean on it for pacing.
pub trait Beeper: Send {
    fn beep(&mut self, freq_hz: f32, dur: Duration);
}

/// Nearest MIDI note for a frequency, clamped to the 0–127 note range.
/// A4 = 440 Hz = note 69; each semitone is a factor of 2^(1/12).
pub fn freq_to_note(freq_hz: f32) -> u8 {
    if freq_hz <= 0.0 {
        return 0;
    }
    let note = 69.0 + 12.0 * (freq_hz / 440.0).log2();
    note.round().clamp(0.0, 127.0) as u8
}

// ── midir backend ─────────────────────────────────────────────────────────

struct MidirBeeper {
    conn: midir::MidiOutputConnection,
}

impl MidirBeeper {
    fn new(mut conn: midir::MidiOutputConnection) -> Self {
        let _ = conn.send(&[0xC0 | CHANNEL, BUZZER_PROGRAM]);
        MidirBeeper { conn }
    }
}

impl Beeper for MidirBeeper {
    fn beep(&mut self, freq_hz: f32, dur: Duration) {
        let note = freq_to_note(freq_hz);
        let _ = self.conn.send(&[0x90 | CHANNEL, note, VELOCITY]);
        thread::sleep(dur);
        let _ = self.conn.send(&[0x80 | CHANNEL, note, 0]);
    }
}

// ── silent backend ────────────────────────────────────────────────────────

struct NullBeeper;

impl Beeper for NullBeeper {
    fn beep(&mut self, _freq_hz: f32, dur: Duration) {
        thread::sleep(dur);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// open_beeper — port scan with silent fallback
// ════════════════════════════════════════════════════════════════════════════

/// Open a beeper on the first usable MIDI output port, preferring a
/// software synth when several are visible.  Never fails: any problem
/// is logged and the silent beeper stands in.
pub fn open_beeper() -> Box<dyn Beeper> {
    let midi_out = match midir::MidiOutput::new("cat_chaos_beeper") {
        Ok(m)  => m,
        Err(e) => {
            eprintln!("[beeper] MIDI init error: {} — running silent", e);
            return Box::new(NullBeeper);
        }
    };

    let ports = midi_out.ports();
    if ports.is_empty() {
        eprintln!("[beeper] no MIDI output ports — running silent");
        eprintln!("[beeper] (a softsynth like fluidsynth or timidity gives the rig a voice)");
        return Box::new(NullBeeper);
    }

    let looks_soft = |name: &str| {
        let n = name.to_lowercase();
        ["fluid", "timidity", "synth", "gm", "microsoft"]
            .iter()
            .any(|tag| n.contains(tag))
    };
    let idx = ports
        .iter()
        .position(|p| midi_out.port_name(p).map(|n| looks_soft(&n)).unwrap_or(false))
        .unwrap_or(0);

    let port = &ports[idx];
    let name = midi_out.port_name(port).unwrap_or_else(|_| "unknown".to_string());
    eprintln!("[beeper] opening MIDI port: {}", name);

    match midi_out.connect(port, "cat-chaos-tones") {
        Ok(conn) => Box::new(MidirBeeper::new(conn)),
        Err(e)   => {
            eprintln!("[beeper] could not connect: {} — running silent", e);
            Box::new(NullBeeper)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    // ── frequency → note mapping ─────────────────────────────────────────
    #[test]
    fn concert_a_is_note_69() {
        assert_eq!(freq_to_note(440.0), 69);
    }

    #[test]
    fn octaves_are_twelve_notes_apart() {
        assert_eq!(freq_to_note(880.0), 81);
        assert_eq!(freq_to_note(220.0), 57);
    }

    #[test]
    fn rounds_to_nearest_note() {
        // 450 Hz is under half a semitone above A4.
        assert_eq!(freq_to_note(450.0), 69);
        // 466.16 Hz is A#4 exactly.
        assert_eq!(freq_to_note(466.16), 70);
    }

    #[test]
    fn clamps_to_valid_note_range() {
        assert_eq!(freq_to_note(20_000.0), 127);
        assert_eq!(freq_to_note(4.0), 0);
        assert_eq!(freq_to_note(0.0), 0);
        assert_eq!(freq_to_note(-3.0), 0);
    }

    #[test]
    fn game_tones_are_in_buzzer_register() {
        // The shipped feedback tones span 200–1100 Hz.
        for freq in [200.0, 500.0, 650.0, 800.0, 850.0, 900.0, 1100.0] {
            let note = freq_to_note(freq);
            assert!((55..=90).contains(&note), "{} Hz -> note {}", freq, note);
        }
    }

    // ── silent fallback pacing ───────────────────────────────────────────
    #[test]
    fn null_beeper_sleeps_for_the_duration() {
        let mut beeper = NullBeeper;
        let start = Instant::now();
        beeper.beep(900.0, Duration::from_millis(30));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
