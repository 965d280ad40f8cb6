//! The rig window: renders the text panel and status pixel, and
//! translates held keys into pin levels.  Software framebuffer only,
//! no GPU.
//!
//! ```text
//! ┌───────────────────────────────────┬────────────┐
//! │  LEVEL 3                          │  PIXEL     │
//! │  STEP 2/4                         │  ┌──────┐  │
//! │                                   │  │ swatch│  │
//! │  DO: SHAKE                        │  └──────┘  │
//! │                                   │            │
//! │  key legend                       │            │
//! └───────────────────────────────────┴────────────┘
//! ```

use crate::console::{Lamp, Rgb, Screen};
use crate::rig::PinDriver;
use minifb::{Key, Window, WindowOptions};
use std::sync::{Arc, Mutex, MutexGuard};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 640;
pub const WIN_H: usize = 360;

const PANEL_X:     usize = 20;
const PANEL_Y:     usize = 20;
const PANEL_W:     usize = 440;
const PANEL_LINES: usize = 8;
const GLYPH_SCALE: usize = 3;                        // 3×5 font at 9×15
const LINE_H:      usize = 5 * GLYPH_SCALE + 6;
const PANEL_H:     usize = PANEL_LINES * LINE_H + 16;

const LAMP_X:    usize = 500;
const LAMP_Y:    usize = 44;
const LAMP_SIZE: usize = 96;

const BG_COLOR:     u32 = 0xFF1A1A2E;
const PANEL_BG:     u32 = 0xFF0F3460;
const TEXT_COLOR:   u32 = 0xFFE0F0FF;
const FRAME_COLOR:  u32 = 0xFF4A6FA5;
const LEGEND_COLOR: u32 = 0xFF888888;

// ════════════════════════════════════════════════════════════════════════════
// PanelState / PanelHandle — what the game loop writes
// ════════════════════════════════════════════════════════════════════════════

/// The panel contents as the game loop last set them.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    pub lines: Vec<String>,
    pub lamp:  Rgb,
}

/// Clonable write handle; the game loop's [`Screen`] and [`Lamp`].
#[derive(Clone, Default)]
pub struct PanelHandle {
    state: Arc<Mutex<PanelState>>,
}

impl PanelHandle {
    pub fn new() -> Self {
        PanelHandle::default()
    }

    fn lock(&self) -> MutexGuard<'_, PanelState> {
        match self.state.lock() {
            Ok(guard)     => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Copy of the current contents, for rendering.
    pub fn snapshot(&self) -> PanelState {
        self.lock().clone()
    }
}

impl Screen for PanelHandle {
    fn show(&mut self, lines: &[String]) {
        self.lock().lines = lines.to_vec();
    }
}

impl Lamp for PanelHandle {
    fn set(&mut self, color: Rgb) {
        self.lock().lamp = color;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run_window — the UI loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the rig window on the calling thread until ESC or close.
///
/// Each frame the held keys become pin levels through `driver`
/// (LEFT/RIGHT = one quadrature cycle, ENTER = button low, S = shake,
/// F = flip), then the panel snapshot is rendered.
pub fn run_window(panel: PanelHandle, mut driver: PinDriver) -> Result<(), String> {
    let mut window = Window::new(
        "Cat Chaos — Simulated Rig",
        WIN_W, WIN_H,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    ).map_err(|e| e.to_string())?;

    window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

    let mut buf = vec![BG_COLOR; WIN_W * WIN_H];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // ── keys → pins ───────────────────────────────────────────────────
        let turn = match (window.is_key_down(Key::Right), window.is_key_down(Key::Left)) {
            (true,  false) => 1,
            (false, true)  => -1,
            _              => 0,
        };
        driver.apply(
            turn,
            window.is_key_down(Key::Enter),
            window.is_key_down(Key::S),
            window.is_key_down(Key::F),
        );

        // ── render ────────────────────────────────────────────────────────
        let state = panel.snapshot();
        buf.fill(BG_COLOR);
        draw_panel(&mut buf, &state);
        draw_lamp(&mut buf, state.lamp);
        draw_text(
            &mut buf,
            "LEFT/RIGHT TURN   ENTER PRESS   S SHAKE   F FLIP   ESC QUIT",
            PANEL_X, WIN_H - 26, 2, LEGEND_COLOR,
        );

        window.update_with_buffer(&buf, WIN_W, WIN_H).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn draw_panel(buf: &mut [u32], state: &PanelState) {
    fill_rect(buf, PANEL_X, PANEL_Y, PANEL_W, PANEL_H, PANEL_BG);
    draw_border(buf, PANEL_X, PANEL_Y, PANEL_W, PANEL_H, FRAME_COLOR);
    for (i, line) in state.lines.iter().take(PANEL_LINES).enumerate() {
        draw_text(
            buf, line,
            PANEL_X + 8, PANEL_Y + 8 + i * LINE_H,
            GLYPH_SCALE, TEXT_COLOR,
        );
    }
}

fn draw_lamp(buf: &mut [u32], lamp: Rgb) {
    draw_text(buf, "PIXEL", LAMP_X, PANEL_Y, 2, LEGEND_COLOR);
    fill_rect(buf, LAMP_X, LAMP_Y, LAMP_SIZE, LAMP_SIZE, argb(lamp));
    draw_border(buf, LAMP_X, LAMP_Y, LAMP_SIZE, LAMP_SIZE, FRAME_COLOR);
}

fn argb((r, g, b): Rgb) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

// ── primitive drawing helpers ───────────────────────────────────────────────

fn fill_rect(buf: &mut [u32], x: usize, y: usize, w: usize, h: usize, color: u32) {
    for row in y..(y + h).min(WIN_H) {
        for col in x..(x + w).min(WIN_W) {
            buf[row * WIN_W + col] = color;
        }
    }
}

fn draw_border(buf: &mut [u32], x: usize, y: usize, w: usize, h: usize, color: u32) {
    for col in x..(x + w).min(WIN_W) {
        if y < WIN_H         { buf[y * WIN_W + col] = color; }
        if y + h - 1 < WIN_H { buf[(y + h - 1) * WIN_W + col] = color; }
    }
    for row in y..(y + h).min(WIN_H) {
        if x < WIN_W         { buf[row * WIN_W + x] = color; }
        if x + w - 1 < WIN_W { buf[row * WIN_W + x + w - 1] = color; }
    }
}

/// Scaled 3×5 bitmap text.  Lowercase is folded to uppercase; unknown
/// characters render as a checker block.
fn draw_text(buf: &mut [u32], text: &str, x: usize, y: usize, scale: usize, color: u32) {
    let mut cx = x;
    for ch in text.chars() {
        let bitmap = glyph(ch.to_ascii_uppercase());
        for (row, &bits) in bitmap.iter().enumerate() {
            for col in 0..3usize {
                if bits & (1 << (2 - col)) != 0 {
                    fill_rect(buf, cx + col * scale, y + row * scale, scale, scale, color);
                }
            }
        }
        cx += 4 * scale; // 3 wide + 1 gap
        if cx + 4 * scale > WIN_W {
            break;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 3×5 bitmap font — rows of 3 bits, top to bottom
// ────────────────────────────────────────────────────────────────────────────

fn glyph(c: char) -> [u8; 5] {
    match c {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b010, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '^' => [0b010, 0b101, 0b000, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '>' => [0b100, 0b010, 0b001, 0b010, 0b100],
        '<' => [0b001, 0b010, 0b100, 0b010, 0b001],
        _   => [0b101, 0b010, 0b101, 0b010, 0b101], // checker block
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
