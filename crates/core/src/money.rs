//! Monetary amounts in whole currency units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in whole currency units (no subunits).
///
/// The domain never converts between currencies or applies taxes; this type
/// only carries the figure and knows how to render it for display, with a
/// `$` prefix and dot-grouped thousands (`$2.500.000`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Money {}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        f.write_str("$")?;
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_str(".")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
