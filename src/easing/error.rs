//! Rejection reasons for easing function values

/// A value that is not a valid `<easing-function>`.
///
/// Every variant means the same thing to a caller: the declaration is
/// discarded and the initial value applies. The variants only exist so
/// diagnostics can say *why*.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidSyntax {
    /// Nothing left after trimming whitespace
    #[error("empty easing function value")]
    Empty,
    /// A bare identifier that is not one of the timing keywords
    #[error("unknown timing keyword: {0}")]
    UnknownKeyword(String),
    /// A function other than `cubic-bezier()` or `steps()`
    #[error("unknown timing function: {0}()")]
    UnknownFunction(String),
    /// Structural problems: stray tokens or nested blocks
    #[error("malformed easing function: {0}")]
    Malformed(String),
    /// Wrong number of comma-separated arguments
    #[error("{func}() expects {expected} argument(s), got {found}")]
    ArgumentCount { func: &'static str, expected: &'static str, found: usize },
    /// An argument slot between commas holds nothing
    #[error("{func}() has an empty argument at position {position}")]
    EmptyArgument { func: &'static str, position: usize },
    /// A number was required
    #[error("{func}() expects a number, got '{value}'")]
    NotANumber { func: &'static str, value: String },
    /// An integer was required and the token is a non-integral number
    #[error("{func}() expects an integer, got '{value}'")]
    NotAnInteger { func: &'static str, value: String },
    /// The number overflows to infinity
    #[error("{func}() argument '{value}' is not a finite number")]
    NonFinite { func: &'static str, value: String },
    /// `x1` or `x2` outside `[0, 1]`
    #[error("cubic-bezier() {name} must be within [0, 1], got {value}")]
    ControlPointOutOfRange { name: &'static str, value: f64 },
    /// `steps()` with a count of zero or below
    #[error("steps() count must be a positive integer, got {0}")]
    NonPositiveStepCount(String),
    /// `steps()` count that does not fit in 32 bits
    #[error("steps() count is too large: {0}")]
    StepCountTooLarge(String),
    /// Second `steps()` argument other than `start` or `end`
    #[error("steps() position must be 'start' or 'end', got '{0}'")]
    InvalidStepPosition(String),
}

impl InvalidSyntax {
    /// Stable snake_case identifier, used as the telemetry `error_type`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_value",
            Self::UnknownKeyword(_) => "unknown_keyword",
            Self::UnknownFunction(_) => "unknown_function",
            Self::Malformed(_) => "malformed",
            Self::ArgumentCount { .. } => "argument_count",
            Self::EmptyArgument { .. } => "empty_argument",
            Self::NotANumber { .. } => "not_a_number",
            Self::NotAnInteger { .. } => "not_an_integer",
            Self::NonFinite { .. } => "non_finite",
            Self::ControlPointOutOfRange { .. } => "control_point_out_of_range",
            Self::NonPositiveStepCount(_) => "non_positive_step_count",
            Self::StepCountTooLarge(_) => "step_count_too_large",
            Self::InvalidStepPosition(_) => "invalid_step_position",
        }
    }

    /// A short hint for fixing the value, when one is obvious
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownKeyword(_) => Some(
                "use one of: ease, linear, ease-in, ease-out, ease-in-out, step-start, step-end",
            ),
            Self::UnknownFunction(_) => Some("use cubic-bezier(x1, y1, x2, y2) or steps(n[, start|end])"),
            Self::ControlPointOutOfRange { .. } => {
                Some("x1 and x2 are times and must lie within [0, 1]; only y may overshoot")
            }
            Self::NotAnInteger { .. } => Some("steps() needs a whole number such as steps(3)"),
            Self::NonPositiveStepCount(_) => Some("steps() needs at least one interval"),
            Self::InvalidStepPosition(_) => Some("write steps(n, start) or steps(n, end)"),
            _ => None,
        }
    }
}
