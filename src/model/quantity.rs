//! Quantity (poson, "how much"): a plural marker or a definite count.

use serde::{Deserialize, Serialize};

use crate::linguistic::Noun;

/// Quantity attached to a substance occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Quantity {
    /// Bare plural: "men", "three *litres*" without a count.
    Plural { unit: Option<Noun> },
    /// Definite count with an optional unit; `cardinal` distinguishes
    /// "three men" from "the third man".
    Number {
        value: f64,
        unit: Option<Noun>,
        cardinal: bool,
    },
}

impl Quantity {
    pub fn plural() -> Self {
        Quantity::Plural { unit: None }
    }

    pub fn cardinal(value: f64) -> Self {
        Quantity::Number {
            value,
            unit: None,
            cardinal: true,
        }
    }

    pub fn ordinal(value: f64) -> Self {
        Quantity::Number {
            value,
            unit: None,
            cardinal: false,
        }
    }

    pub fn with_unit(mut self, noun: Noun) -> Self {
        match &mut self {
            Quantity::Plural { unit } | Quantity::Number { unit, .. } => {
                *unit = Some(noun);
            }
        }
        self
    }
}
