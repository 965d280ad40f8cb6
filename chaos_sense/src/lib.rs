//! Polled input signals for the Cat Chaos rig: quadrature decoding of the
//! rotary encoder, exponential smoothing of the 3-axis accelerometer, and a
//! modulo dial for encoder-driven menus.
//!
//! The rig is sampled, never interrupt-driven: callers poll an
//! [`InputSource`] for fresh [`InputSample`]s, feed the pin levels into a
//! [`QuadratureDecoder`] and the acceleration into an [`AccelFilter`], and
//! act on the resulting counter and smoothed axes.
//!
//! Decoder transition table (previous pair → current pair):
//!
//! | transition                 | counter delta |
//! |----------------------------|---------------|
//! | pair unchanged (bounce)    | 0             |
//! | clock low→high, data low   | +1 (CW)       |
//! | clock low→high, data high  | −1 (CCW)      |
//! | any other change           | 0             |

// ════════════════════════════════════════════════════════════════════════════
// InputSample / InputSource — one polled rig snapshot
// ════════════════════════════════════════════════════════════════════════════

/// One polled snapshot of the rig's input lines.
///
/// `clk`, `dt` and `sw` are raw pin levels (`true` = high). The switch is
/// wired active-low, so [`InputSample::button_pressed`] inverts it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSample {
    pub clk:   bool,
    pub dt:    bool,
    pub sw:    bool,
    /// Acceleration in m/s², sensor order (x, y, z).
    pub accel: [f32; 3],
}

impl InputSample {
    /// Rig at rest: pull-ups hold all three lines high, gravity on +Z.
    pub fn idle() -> Self {
        InputSample { clk: true, dt: true, sw: true, accel: [0.0, 0.0, 9.81] }
    }

    /// Active-low button: pressed when the switch line reads low.
    pub fn button_pressed(&self) -> bool { !self.sw }
}

/// Anything that can be polled for rig input.
pub trait InputSource {
    fn sample(&mut self) -> InputSample;
}

// ════════════════════════════════════════════════════════════════════════════
// QuadratureDecoder — edge-triggered rotation counter
// ════════════════════════════════════════════════════════════════════════════

/// Decoder for a two-line quadrature rotary encoder.
///
/// A tick fires only on the clock line's rising edge; the data line level at
/// that instant gives the direction. A freshly constructed decoder assumes
/// idle-high lines (pull-up wiring), so powering on in the detent position
/// does not count as an edge.
#[derive(Clone, Debug)]
pub struct QuadratureDecoder {
    last_clk: bool,
    last_dt:  bool,
    count:    i32,
}

impl QuadratureDecoder {
    pub fn new() -> Self {
        QuadratureDecoder { last_clk: true, last_dt: true, count: 0 }
    }

    /// Start from a known pin pair (e.g. an initial hardware read).
    pub fn with_initial(clk: bool, dt: bool) -> Self {
        QuadratureDecoder { last_clk: clk, last_dt: dt, count: 0 }
    }

    /// Feed one pin-pair reading.
    ///
    /// Returns the counter delta: +1 on a rising clock edge with data low
    /// (clockwise), −1 on a rising clock edge with data high
    /// (counter-clockwise), 0 for every other reading.
    pub fn update(&mut self, clk: bool, dt: bool) -> i32 {
        if clk == self.last_clk && dt == self.last_dt {
            return 0; // bounce: identical pair, not a transition
        }
        let delta = if clk && !self.last_clk {
            if !dt { 1 } else { -1 }
        } else {
            0
        };
        self.last_clk = clk;
        self.last_dt  = dt;
        self.count += delta;
        delta
    }

    /// Cumulative tick count since construction or the last reset.
    pub fn count(&self) -> i32 { self.count }

    /// Clear the counter. The remembered pin pair is kept, so a reset
    /// mid-pulse cannot fabricate an edge on the next reading.
    pub fn reset_count(&mut self) { self.count = 0; }
}

impl Default for QuadratureDecoder {
    fn default() -> Self { Self::new() }
}

// ════════════════════════════════════════════════════════════════════════════
// AccelFilter — per-axis exponential moving average
// ════════════════════════════════════════════════════════════════════════════

/// Shipped smoothing factor for the accelerometer EMA.
pub const SMOOTHING_ALPHA: f32 = 0.2;

/// Smoothed accelerometer reading, one value per axis (m/s²).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilteredAxes {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Per-axis exponential moving average:
/// `filtered = α·raw + (1−α)·filtered_prev`.
///
/// State starts at zero and is never cleared during play, only decayed: a
/// spike propagates proportionally and fades at rate (1−α) per update. No
/// clamping is applied to the values themselves.
#[derive(Clone, Debug)]
pub struct AccelFilter {
    alpha: f32,
    state: FilteredAxes,
}

impl AccelFilter {
    pub fn new() -> Self {
        Self::with_alpha(SMOOTHING_ALPHA)
    }

    /// Alternate smoothing factor, clamped to (0, 1].
    pub fn with_alpha(alpha: f32) -> Self {
        AccelFilter {
            alpha: alpha.clamp(f32::EPSILON, 1.0),
            state: FilteredAxes::default(),
        }
    }

    /// Feed one raw 3-axis sample, returning the updated smoothed axes.
    pub fn update(&mut self, raw_x: f32, raw_y: f32, raw_z: f32) -> FilteredAxes {
        let a = self.alpha;
        self.state.x = a * raw_x + (1.0 - a) * self.state.x;
        self.state.y = a * raw_y + (1.0 - a) * self.state.y;
        self.state.z = a * raw_z + (1.0 - a) * self.state.z;
        self.state
    }

    /// Current smoothed axes without advancing the filter.
    pub fn axes(&self) -> FilteredAxes { self.state }

    /// Reinitialize all three axes to zero.
    pub fn reset(&mut self) { self.state = FilteredAxes::default(); }
}

impl Default for AccelFilter {
    fn default() -> Self { Self::new() }
}

// ════════════════════════════════════════════════════════════════════════════
// Dial — encoder-driven menu selector
// ════════════════════════════════════════════════════════════════════════════

/// Menu selector over the encoder counter.
///
/// The selected index is `|counter| mod options`, so turning in either
/// direction walks the entries and the dial never runs off the end.
#[derive(Clone, Debug)]
pub struct Dial {
    decoder: QuadratureDecoder,
    options: usize,
}

impl Dial {
    /// `options` is clamped to at least 1.
    pub fn new(options: usize) -> Self {
        Dial { decoder: QuadratureDecoder::new(), options: options.max(1) }
    }

    /// Feed one encoder pin pair.
    pub fn update(&mut self, clk: bool, dt: bool) {
        self.decoder.update(clk, dt);
    }

    /// Currently selected index in `0..options`.
    pub fn index(&self) -> usize {
        (self.decoder.count().unsigned_abs() as usize) % self.options
    }

    /// Jump back to index 0 by clearing the underlying counter.
    pub fn reset(&mut self) {
        self.decoder.reset_count();
    }

    pub fn options(&self) -> usize { self.options }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
