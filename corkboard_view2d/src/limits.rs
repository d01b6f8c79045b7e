// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Direction of a single wheel notch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Wheel rolled away from the user; the canvas grows.
    In,
    /// Wheel rolled towards the user; the canvas shrinks.
    Out,
}

impl WheelDirection {
    /// Classifies a wheel `delta_y` as reported by DOM-style wheel events.
    ///
    /// Negative deltas zoom in, positive deltas zoom out. A zero delta (for
    /// example a purely horizontal scroll) carries no direction.
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// Multiplicative scale factor for one notch with the given step.
    #[must_use]
    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::In => 1.0 + step,
            Self::Out => 1.0 - step,
        }
    }
}

/// Zoom range and per-notch step for a canvas.
///
/// The defaults match the lesson canvas: scale stays within `[0.5, 2.0]` and
/// each wheel notch changes it by 10%.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ZoomLimitsRepr"))]
pub struct ZoomLimits {
    min: f64,
    max: f64,
    step: f64,
}

impl ZoomLimits {
    /// Smallest scale reachable by zooming out.
    pub const DEFAULT_MIN: f64 = 0.5;
    /// Largest scale reachable by zooming in.
    pub const DEFAULT_MAX: f64 = 2.0;
    /// Relative scale change per wheel notch.
    pub const DEFAULT_STEP: f64 = 0.1;

    /// Creates validated zoom limits.
    ///
    /// `min` and `max` must be finite and positive with `min <= max`; `step`
    /// must lie in the open interval `(0, 1)` so that zooming out never
    /// reaches a non-positive scale.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ZoomLimitsError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(ZoomLimitsError::NonFinite);
        }
        if min <= 0.0 || max <= 0.0 {
            return Err(ZoomLimitsError::NonPositive);
        }
        if min > max {
            return Err(ZoomLimitsError::Inverted { min, max });
        }
        if step <= 0.0 || step >= 1.0 {
            return Err(ZoomLimitsError::Step(step));
        }
        Ok(Self { min, max, step })
    }

    /// Minimum scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Relative change applied per wheel notch.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamps `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns the scale after one wheel notch in `direction`, saturating at the limits.
    #[must_use]
    pub fn next_scale(&self, scale: f64, direction: WheelDirection) -> f64 {
        self.clamp(scale * direction.factor(self.step))
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            step: Self::DEFAULT_STEP,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ZoomLimitsRepr {
    min: f64,
    max: f64,
    step: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ZoomLimitsRepr> for ZoomLimits {
    type Error = ZoomLimitsError;

    fn try_from(repr: ZoomLimitsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.min, repr.max, repr.step)
    }
}

/// Error returned when [`ZoomLimits::new`] is given an unusable range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomLimitsError {
    /// A bound or the step was NaN or infinite.
    NonFinite,
    /// A bound was zero or negative.
    NonPositive,
    /// The minimum exceeded the maximum.
    Inverted {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },
    /// The step was outside `(0, 1)`.
    Step(f64),
}

impl fmt::Display for ZoomLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("zoom limits must be finite"),
            Self::NonPositive => f.write_str("zoom limits must be positive"),
            Self::Inverted { min, max } => {
                write!(f, "minimum zoom {min} exceeds maximum zoom {max}")
            }
            Self::Step(step) => write!(f, "zoom step {step} is outside (0, 1)"),
        }
    }
}

impl core::error::Error for ZoomLimitsError {}

#[cfg(test)]
mod tests {
    use super::{WheelDirection, ZoomLimits, ZoomLimitsError};

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(WheelDirection::from_delta_y(-3.0), Some(WheelDirection::In));
        assert_eq!(WheelDirection::from_delta_y(120.0), Some(WheelDirection::Out));
        assert_eq!(WheelDirection::from_delta_y(0.0), None);
    }

    #[test]
    fn next_scale_saturates() {
        let limits = ZoomLimits::default();
        assert_eq!(limits.next_scale(1.95, WheelDirection::In), 2.0);
        assert_eq!(limits.next_scale(0.52, WheelDirection::Out), 0.5);
        assert!((limits.next_scale(1.0, WheelDirection::In) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn invalid_limits_are_rejected() {
        assert_eq!(
            ZoomLimits::new(f64::NAN, 2.0, 0.1),
            Err(ZoomLimitsError::NonFinite)
        );
        assert_eq!(
            ZoomLimits::new(0.0, 2.0, 0.1),
            Err(ZoomLimitsError::NonPositive)
        );
        assert_eq!(
            ZoomLimits::new(3.0, 2.0, 0.1),
            Err(ZoomLimitsError::Inverted { min: 3.0, max: 2.0 })
        );
        assert_eq!(ZoomLimits::new(0.5, 2.0, 1.0), Err(ZoomLimitsError::Step(1.0)));
        assert!(ZoomLimits::new(0.25, 4.0, 0.2).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let ok: ZoomLimits = serde_json::from_str(r#"{"min":0.25,"max":3.0,"step":0.05}"#)
            .expect("valid limits deserialize");
        assert_eq!(ok.max(), 3.0);

        let bad = serde_json::from_str::<ZoomLimits>(r#"{"min":2.0,"max":1.0,"step":0.1}"#);
        assert!(bad.is_err(), "inverted limits must not deserialize");
    }
}
