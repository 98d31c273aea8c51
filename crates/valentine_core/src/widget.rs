//! The widget's state record.
//!
//! One explicit value owns everything that changes while the prompt is open:
//! the [`Stage`], the affirmative control's [`EmphasisLevel`] and the
//! evasive control's [`EvasivePosition`]. Reset is a plain assignment of the
//! default record.

use crate::evasion::compute_next_position;
use crate::geometry::{Bounds, Point, Size};
use crate::tuning::{EmphasisTuning, EvasionTuning};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Asking,
    Accepted,
}

/// Scale factor of the affirmative control. Starts at 1 and only grows while
/// the cap stays put; a lowered cap pulls it back down.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EmphasisLevel(f32);

impl EmphasisLevel {
    pub const BASE: Self = Self(1.0);

    pub fn value(self) -> f32 {
        self.0
    }

    /// Next level after one hover: `+step`, capped at `max`.
    /// Never returns a smaller level than the current one.
    pub fn bumped(self, tuning: &EmphasisTuning) -> Self {
        let next = (self.0 + tuning.step).min(tuning.max);
        Self(next.max(self.0))
    }

    /// The level under a possibly lowered `max`, never below [`BASE`](Self::BASE).
    pub fn capped(self, tuning: &EmphasisTuning) -> Self {
        Self(self.0.min(tuning.max).max(Self::BASE.0))
    }
}

impl Default for EmphasisLevel {
    fn default() -> Self {
        Self::BASE
    }
}

/// Where the evasive control is drawn.
///
/// `Natural` keeps it in the layout flow next to the affirmative control.
/// After the first evasion it is pinned at an absolute, surface-relative
/// top-left offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum EvasivePosition {
    #[default]
    Natural,
    Offset(Point),
}

impl EvasivePosition {
    pub fn offset(self) -> Option<Point> {
        match self {
            Self::Natural => None,
            Self::Offset(point) => Some(point),
        }
    }

    /// Coordinates with the `(0, 0)` convention for the natural position.
    pub fn coordinates(self) -> Point {
        self.offset().unwrap_or(Point::ORIGIN)
    }

    pub fn is_natural(self) -> bool {
        matches!(self, Self::Natural)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Widget {
    stage: Stage,
    emphasis: EmphasisLevel,
    evasive: EvasivePosition,
}

impl Widget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn emphasis(&self) -> EmphasisLevel {
        self.emphasis
    }

    pub fn evasive(&self) -> EvasivePosition {
        self.evasive
    }

    pub fn is_resolved(&self) -> bool {
        self.stage == Stage::Accepted
    }

    /// Asking -> Accepted. Returns `false` if the prompt was already accepted.
    pub fn activate_affirmative(&mut self) -> bool {
        if self.stage == Stage::Accepted {
            return false;
        }
        self.stage = Stage::Accepted;
        true
    }

    /// Back to the initial record. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let pristine = Self::default();
        if *self == pristine {
            return false;
        }
        *self = pristine;
        true
    }

    /// The pointer entered the affirmative control. Only counts while asking.
    pub fn hover_affirmative(&mut self, tuning: &EmphasisTuning) -> bool {
        if self.stage != Stage::Asking {
            return false;
        }
        let next = self.emphasis.bumped(tuning);
        let changed = next != self.emphasis;
        self.emphasis = next;
        changed
    }

    /// Re-applies the emphasis cap after the tuning changed.
    /// Returns whether the level had to shrink.
    pub fn cap_emphasis(&mut self, tuning: &EmphasisTuning) -> bool {
        let capped = self.emphasis.capped(tuning);
        let changed = capped != self.emphasis;
        self.emphasis = capped;
        changed
    }

    /// Feeds one pointer-move event into the evasion controller.
    ///
    /// `control` and `surface` are `None` (or unmeasurable) before the first
    /// layout pass; the event is dropped in that case. Returns the new offset
    /// when the control moved.
    pub fn pointer_moved<R: Rng + ?Sized>(
        &mut self,
        pointer: Point,
        control: Option<Bounds>,
        surface: Option<Size>,
        tuning: &EvasionTuning,
        rng: &mut R,
    ) -> Option<Point> {
        if self.stage == Stage::Accepted {
            return None;
        }
        let control = control.filter(Bounds::is_measurable)?;
        let surface = surface.filter(|size| size.is_measurable())?;

        let next = compute_next_position(pointer, control, surface, tuning, rng)?;
        self.evasive = EvasivePosition::Offset(next);
        Some(next)
    }
}
