//! Pointer-proximity evasion.
//!
//! The control is considered "approached" when the pointer is strictly closer
//! than `trigger_distance` to the centre of its bounding box. It then jumps to
//! a uniformly random top-left corner inside the safe area, which keeps the
//! whole box at least `margin` away from every surface edge.
//!
//! If the surface is smaller than the control plus both margins the span goes
//! negative and the result can land outside the surface. That only happens on
//! viewports the compact gate already routes to the static view.

use crate::geometry::{Bounds, Point, Size};
use crate::tuning::EvasionTuning;
use rand::Rng;

/// Returns `true` when `pointer` is inside the trigger radius of `control`.
pub fn pointer_intrudes(pointer: Point, control: Bounds, tuning: &EvasionTuning) -> bool {
    pointer.distance(control.center()) < tuning.trigger_distance
}

/// The range of valid top-left corners for a control of `control` size:
/// `[margin, W - margin - w] x [margin, H - margin - h]`.
pub fn safe_area(control: Size, surface: Size, margin: f32) -> (Point, Point) {
    (
        Point::new(margin, margin),
        Point::new(
            surface.width - margin - control.width,
            surface.height - margin - control.height,
        ),
    )
}

/// Computes where the evasive control should move for a pointer event.
///
/// `None` means the pointer is far enough away and nothing changes. The x
/// coordinate is drawn before y, so a seeded `rng` gives reproducible output.
pub fn compute_next_position<R: Rng + ?Sized>(
    pointer: Point,
    control: Bounds,
    surface: Size,
    tuning: &EvasionTuning,
    rng: &mut R,
) -> Option<Point> {
    if !pointer_intrudes(pointer, control, tuning) {
        return None;
    }

    let margin = tuning.margin;
    let span_x = surface.width - control.size.width - 2.0 * margin;
    let span_y = surface.height - control.size.height - 2.0 * margin;

    let x = rng.gen::<f32>() * span_x + margin;
    let y = rng.gen::<f32>() * span_y + margin;
    Some(Point::new(x, y))
}
