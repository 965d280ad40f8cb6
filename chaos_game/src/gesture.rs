//! The closed five-action gesture vocabulary.

use std::fmt;

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

/// One physical action the player can be asked to perform.
///
/// The set is fixed: no parameters, no extension point. Recognition
/// thresholds live in [`crate::detect::Thresholds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Push the encoder button (active-low switch).
    Press,
    /// Spin the encoder counter-clockwise past the tick threshold.
    RotateLeft,
    /// Spin the encoder clockwise past the tick threshold.
    RotateRight,
    /// Shake the rig hard along X.
    Shake,
    /// Turn the rig upside down.
    Flip,
}

impl Gesture {
    /// Every gesture, in prompt order.
    pub const ALL: [Gesture; 5] = [
        Gesture::Press,
        Gesture::RotateLeft,
        Gesture::RotateRight,
        Gesture::Shake,
        Gesture::Flip,
    ];

    /// Prompt name shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            Gesture::Press       => "PRESS",
            Gesture::RotateLeft  => "ROTATE LEFT",
            Gesture::RotateRight => "ROTATE RIGHT",
            Gesture::Shake       => "SHAKE",
            Gesture::Flip        => "FLIP",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
