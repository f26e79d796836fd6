//! Declaration resolution with fallback to the initial value
//!
//! The parser only says whether a value is valid. Whoever owns the
//! declaration decides what an invalid one turns into; for
//! `transition-timing-function` that is the initial value, `ease`.

use crate::easing::{parse, EasingFunction, InvalidSyntax, TimingKeyword};

/// The initial value of `transition-timing-function`: `cubic-bezier(0.25, 0.1, 0.25, 1)`
pub fn initial_value() -> EasingFunction {
    TimingKeyword::Ease.expand()
}

/// Outcome of resolving one declared value
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The declared text, untrimmed
    pub specified: String,
    /// The value in effect after resolution
    pub computed: EasingFunction,
    /// Why the declared value was discarded, if it was
    pub rejected: Option<InvalidSyntax>,
}

impl Resolution {
    /// True when the initial value was substituted
    pub fn is_fallback(&self) -> bool {
        self.rejected.is_some()
    }

    /// The canonical computed value, as a style query would report it
    pub fn computed_string(&self) -> String {
        self.computed.to_canonical_string()
    }
}

/// Resolve a declared value, substituting `initial` when it does not parse.
pub fn resolve(specified: &str, initial: &EasingFunction) -> Resolution {
    match parse(specified) {
        Ok(computed) => Resolution { specified: specified.to_string(), computed, rejected: None },
        Err(err) => Resolution {
            specified: specified.to_string(),
            computed: *initial,
            rejected: Some(err),
        },
    }
}

/// Resolve against the property's initial value
pub fn resolve_with_initial(specified: &str) -> Resolution {
    resolve(specified, &initial_value())
}
