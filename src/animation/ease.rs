use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Easing curves applied to normalized progress.
///
/// Names follow the power-curve family used by web timeline libraries: `power1` is quadratic and
/// `power2` is cubic, so `OutQuad` corresponds to `power1.out`.
///
/// Config accepts either spelling: `"OutCubic"` or `"power2.out"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Ease {
    /// No easing.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Parse a variant name (`"OutCubic"`) or a timeline-library name such as `"none"`,
    /// `"power2.out"` or `"power1.inOut"`.
    pub fn from_name(name: &str) -> ScrollreelResult<Self> {
        let ease = match name {
            "Linear" => Self::Linear,
            "InQuad" => Self::InQuad,
            "OutQuad" => Self::OutQuad,
            "InOutQuad" => Self::InOutQuad,
            "InCubic" => Self::InCubic,
            "OutCubic" => Self::OutCubic,
            "InOutCubic" => Self::InOutCubic,
            "none" | "linear" => Self::Linear,
            "power1.in" => Self::InQuad,
            "power1.out" | "power1" => Self::OutQuad,
            "power1.inOut" => Self::InOutQuad,
            "power2.in" => Self::InCubic,
            "power2.out" | "power2" => Self::OutCubic,
            "power2.inOut" => Self::InOutCubic,
            other => {
                return Err(ScrollreelError::validation(format!(
                    "unknown ease '{other}'"
                )));
            }
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = ScrollreelError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
