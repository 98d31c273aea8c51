//! Compact viewport gate.
//!
//! Touch-driven or narrow viewports get a static message instead of the
//! interactive prompt: evasion needs a hovering pointer and room to move.

use crate::tuning::ViewportTuning;
use serde::{Deserialize, Serialize};

/// What the host reports about the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportProfile {
    /// Logical width in pixels.
    pub width: f32,
    /// The primary pointer is coarse (touch).
    pub coarse_pointer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    Wide,
    Compact,
}

impl ViewportClass {
    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportGate {
    tuning: ViewportTuning,
    force_compact: Option<bool>,
}

impl ViewportGate {
    pub fn new(tuning: ViewportTuning) -> Self {
        Self {
            tuning,
            force_compact: None,
        }
    }

    /// Pins the classification regardless of the profile (`None` clears it).
    pub fn with_override(mut self, force_compact: Option<bool>) -> Self {
        self.force_compact = force_compact;
        self
    }

    /// `Compact` iff the pointer is coarse or the width is below the threshold.
    pub fn classify(&self, profile: &ViewportProfile) -> ViewportClass {
        let compact = match self.force_compact {
            Some(forced) => forced,
            None => profile.coarse_pointer || profile.width < self.tuning.compact_below,
        };
        if compact {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}
