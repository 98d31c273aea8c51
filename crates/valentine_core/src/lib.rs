//! Valentine prompt logic.
//!
//! Everything in here is independent of the rendering layer:
//! - [`widget`]: the explicit state record (stage, emphasis, evasive position)
//! - [`evasion`]: pointer proximity check and bounded random relocation
//! - [`viewport`]: the compact viewport gate
//! - [`tuning`]: the numbers behind all of the above, with validation
//!
//! The Bevy client owns a [`Widget`] as a resource and feeds it measured
//! geometry; tests drive it directly.

pub mod evasion;
pub mod geometry;
pub mod tuning;
pub mod viewport;
pub mod widget;

pub use evasion::{compute_next_position, pointer_intrudes, safe_area};
pub use geometry::{Bounds, Point, Size};
pub use tuning::{EmphasisTuning, EvasionTuning, Tuning, TuningError, ViewportTuning};
pub use viewport::{ViewportClass, ViewportGate, ViewportProfile};
pub use widget::{EmphasisLevel, EvasivePosition, Stage, Widget};
