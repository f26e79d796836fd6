//! CSS `<easing-function>` values
//!
//! An easing function is either a cubic Bézier curve anchored at `(0, 0)`
//! and `(1, 1)` or a step function. Both shapes validate their invariants
//! on construction, so any [`EasingFunction`] in hand is well formed.
//!
//! # Example
//!
//! ```
//! use timing_fn::easing::{parse, EasingFunction};
//!
//! let value = parse("  steps(3, end) ").unwrap();
//! assert_eq!(value.to_canonical_string(), "steps(3)");
//!
//! let ease: EasingFunction = "ease".parse().unwrap();
//! assert_eq!(ease.to_string(), "cubic-bezier(0.25, 0.1, 0.25, 1)");
//! ```

mod error;
pub mod parser;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use error::InvalidSyntax;
pub use parser::parse;

/// A cubic Bézier timing curve with control points `(x1, y1)` and `(x2, y2)`.
///
/// `x1` and `x2` are restricted to `[0, 1]` so the curve stays a function of
/// time. The y coordinates are unbounded, which is what allows overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Build a curve, rejecting non-finite coordinates and x outside `[0, 1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, InvalidSyntax> {
        for value in [x1, y1, x2, y2] {
            if !value.is_finite() {
                return Err(InvalidSyntax::NonFinite {
                    func: "cubic-bezier",
                    value: value.to_string(),
                });
            }
        }
        for (name, value) in [("x1", x1), ("x2", x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidSyntax::ControlPointOutOfRange { name, value });
            }
        }
        Ok(Self::from_raw(x1, y1, x2, y2))
    }

    fn from_raw(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: positive_zero(x1),
            y1: positive_zero(y1),
            x2: positive_zero(x2),
            y2: positive_zero(y2),
        }
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// The two control points as `((x1, y1), (x2, y2))`
    pub fn control_points(&self) -> ((f64, f64), (f64, f64)) {
        ((self.x1, self.y1), (self.x2, self.y2))
    }
}

// -0.0 prints as "-0"; the computed value never carries the sign of zero.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Where the jump happens inside each step interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepPosition {
    /// Jump at the start of each interval
    Start,
    /// Jump at the end of each interval (the default, elided when serialized)
    #[default]
    End,
}

impl StepPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            StepPosition::Start => "start",
            StepPosition::End => "end",
        }
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepPosition {
    type Err = InvalidSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(StepPosition::Start),
            "end" => Ok(StepPosition::End),
            other => Err(InvalidSyntax::InvalidStepPosition(other.to_string())),
        }
    }
}

/// A step timing function holding `count` discrete values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Steps {
    count: u32,
    position: StepPosition,
}

impl Steps {
    /// Build a step function; `count` must be at least 1.
    pub fn new(count: i64, position: StepPosition) -> Result<Self, InvalidSyntax> {
        if count < 1 {
            return Err(InvalidSyntax::NonPositiveStepCount(count.to_string()));
        }
        let count = u32::try_from(count)
            .map_err(|_| InvalidSyntax::StepCountTooLarge(count.to_string()))?;
        Ok(Self { count, position })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn position(&self) -> StepPosition {
        self.position
    }
}

/// A parsed `transition-timing-function` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    CubicBezier(CubicBezier),
    Steps(Steps),
}

impl EasingFunction {
    /// The serialization a computed-style query reports for this value.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// The keyword whose expansion equals this value, if there is one.
    pub fn keyword(&self) -> Option<TimingKeyword> {
        TimingKeyword::ALL.into_iter().find(|k| k.expand() == *self)
    }

    pub fn is_cubic_bezier(&self) -> bool {
        matches!(self, EasingFunction::CubicBezier(_))
    }

    pub fn is_steps(&self) -> bool {
        matches!(self, EasingFunction::Steps(_))
    }
}

impl From<CubicBezier> for EasingFunction {
    fn from(curve: CubicBezier) -> Self {
        EasingFunction::CubicBezier(curve)
    }
}

impl From<Steps> for EasingFunction {
    fn from(steps: Steps) -> Self {
        EasingFunction::Steps(steps)
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasingFunction::CubicBezier(c) => {
                f.write_str("cubic-bezier(")?;
                for (i, value) in [c.x1, c.y1, c.x2, c.y2].into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_number(f, value)?;
                }
                f.write_str(")")
            }
            EasingFunction::Steps(s) => match s.position {
                StepPosition::End => write!(f, "steps({})", s.count),
                StepPosition::Start => write!(f, "steps({}, start)", s.count),
            },
        }
    }
}

/// Shortest round-trip form, switching to exponent notation for very large
/// or very small magnitudes so the canonical string stays short.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        write!(f, "{:e}", value)
    } else {
        write!(f, "{}", value)
    }
}

impl FromStr for EasingFunction {
    type Err = InvalidSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Serialize for EasingFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EasingFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}

/// The named easing keywords and the values they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingKeyword {
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    StepStart,
    StepEnd,
}

impl TimingKeyword {
    pub const ALL: [TimingKeyword; 7] = [
        TimingKeyword::Ease,
        TimingKeyword::Linear,
        TimingKeyword::EaseIn,
        TimingKeyword::EaseOut,
        TimingKeyword::EaseInOut,
        TimingKeyword::StepStart,
        TimingKeyword::StepEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimingKeyword::Ease => "ease",
            TimingKeyword::Linear => "linear",
            TimingKeyword::EaseIn => "ease-in",
            TimingKeyword::EaseOut => "ease-out",
            TimingKeyword::EaseInOut => "ease-in-out",
            TimingKeyword::StepStart => "step-start",
            TimingKeyword::StepEnd => "step-end",
        }
    }

    /// Exact, case-sensitive keyword lookup
    pub fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == ident)
    }

    /// The value this keyword is shorthand for
    pub fn expand(self) -> EasingFunction {
        match self {
            TimingKeyword::Ease => bezier(0.25, 0.1, 0.25, 1.0),
            TimingKeyword::Linear => bezier(0.0, 0.0, 1.0, 1.0),
            TimingKeyword::EaseIn => bezier(0.42, 0.0, 1.0, 1.0),
            TimingKeyword::EaseOut => bezier(0.0, 0.0, 0.58, 1.0),
            TimingKeyword::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0),
            TimingKeyword::StepStart => {
                EasingFunction::Steps(Steps { count: 1, position: StepPosition::Start })
            }
            TimingKeyword::StepEnd => {
                EasingFunction::Steps(Steps { count: 1, position: StepPosition::End })
            }
        }
    }
}

fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> EasingFunction {
    EasingFunction::CubicBezier(CubicBezier::from_raw(x1, y1, x2, y2))
}

impl fmt::Display for TimingKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
