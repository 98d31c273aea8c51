//! Numeric knobs for the widget.
//!
//! Defaults reproduce the classic behaviour (150 px trigger radius, 80 px
//! edge margin, +0.25 emphasis per hover up to 10x, compact below 768 px).
//! The client loads these from the settings file, so every value goes
//! through [`Tuning::validate`] before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvasionTuning {
    /// The control relocates when the pointer is strictly closer than this.
    pub trigger_distance: f32,
    /// Minimum gap between the relocated control and every surface edge.
    pub margin: f32,
}

impl Default for EvasionTuning {
    fn default() -> Self {
        Self {
            trigger_distance: 150.0,
            margin: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisTuning {
    pub step: f32,
    pub max: f32,
}

impl Default for EmphasisTuning {
    fn default() -> Self {
        Self {
            step: 0.25,
            max: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportTuning {
    /// Viewports narrower than this (logical px) get the static fallback.
    pub compact_below: f32,
}

impl Default for ViewportTuning {
    fn default() -> Self {
        Self {
            compact_below: 768.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub evasion: EvasionTuning,
    pub emphasis: EmphasisTuning,
    pub viewport: ViewportTuning,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("evasion margin must not be negative, got {0}")]
    NegativeMargin(f32),

    #[error("emphasis max must be at least 1, got {0}")]
    MaxBelowBase(f32),
}

fn finite(field: &'static str, value: f32) -> Result<f32, TuningError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TuningError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32, TuningError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

impl EvasionTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("evasion.trigger_distance", self.trigger_distance)?;
        if finite("evasion.margin", self.margin)? < 0.0 {
            return Err(TuningError::NegativeMargin(self.margin));
        }
        Ok(())
    }
}

impl EmphasisTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("emphasis.step", self.step)?;
        if finite("emphasis.max", self.max)? < 1.0 {
            return Err(TuningError::MaxBelowBase(self.max));
        }
        Ok(())
    }
}

impl ViewportTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("viewport.compact_below", self.compact_below)?;
        Ok(())
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        self.evasion.validate()?;
        self.emphasis.validate()?;
        self.viewport.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let tuning = Tuning::default();
        assert_eq!(tuning.evasion.trigger_distance, 150.0);
        assert_eq!(tuning.evasion.margin, 80.0);
        assert_eq!(tuning.emphasis.step, 0.25);
        assert_eq!(tuning.emphasis.max, 10.0);
        assert_eq!(tuning.viewport.compact_below, 768.0);
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let mut tuning = Tuning::default();
        tuning.emphasis.step = 0.0;
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotPositive {
                field: "emphasis.step",
                value: 0.0
            })
        );

        let mut tuning = Tuning::default();
        tuning.emphasis.max = 0.5;
        assert_eq!(tuning.validate(), Err(TuningError::MaxBelowBase(0.5)));

        let mut tuning = Tuning::default();
        tuning.evasion.margin = -1.0;
        assert_eq!(tuning.validate(), Err(TuningError::NegativeMargin(-1.0)));

        let mut tuning = Tuning::default();
        tuning.viewport.compact_below = f32::INFINITY;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotFinite {
                field: "viewport.compact_below",
                ..
            })
        ));
    }

    #[test]
    fn zero_margin_is_allowed() {
        let tuning = EvasionTuning {
            margin: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn partial_ron_fills_in_defaults() {
        let tuning: Tuning = ron::from_str("(evasion: (margin: 40.0))").unwrap();
        assert_eq!(tuning.evasion.margin, 40.0);
        assert_eq!(tuning.evasion.trigger_distance, 150.0);
        assert_eq!(tuning.emphasis, EmphasisTuning::default());
    }
}
