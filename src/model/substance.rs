//! Substance (ousia, essence): discrete particulars and their role
//! occurrences.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::linguistic::Noun;
use super::{ActionId, Quality, Quantity, Relative, SubstanceId};

// ============================================================================
// Substance
// ============================================================================

/// A discrete entity: this particular man, that particular tree.
///
/// Identity is the arena handle, never structure — two substances with the
/// same noun and qualities remain separate entities unless a handle is
/// shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substance {
    pub noun: Noun,
    pub qualities: Vec<Quality>,
    pub quantity: Option<Quantity>,
}

impl Substance {
    pub fn new(noun: Noun) -> Self {
        Substance {
            noun,
            qualities: Vec::new(),
            quantity: None,
        }
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.qualities.push(quality);
        self
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn add_quality(&mut self, quality: Quality) {
        self.qualities.push(quality);
    }
}

// ============================================================================
// QuantSubstance
// ============================================================================

/// A substance as it fills one grammatical slot, with quantity, states and
/// relatives local to that occurrence.
///
/// Several occurrences may wrap the same underlying substance ("the tall
/// man" as agent, referenced later as "him"); the generator still dedupes
/// by occurrence handle, not by the wrapped substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantSubstance {
    pub substance: SubstanceId,
    /// Overrides the wrapped substance's own quantity when present.
    pub quantity: Option<Quantity>,
    pub states: Vec<State>,
    pub relatives: Vec<Relative>,
}

impl QuantSubstance {
    pub fn new(substance: SubstanceId) -> Self {
        QuantSubstance {
            substance,
            quantity: None,
            states: Vec::new(),
            relatives: Vec::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn add_state(&mut self, state: State) {
        self.states.push(state);
    }

    pub fn add_relative(&mut self, relative: Relative) {
        self.relatives.push(relative);
    }
}

// ============================================================================
// State
// ============================================================================

/// A conditional restatement of another action applied to one substance:
/// "the man, *driving*, ...".
///
/// A state only takes part in generation while one of its `main_actions` is
/// being expanded and the described substance is agent or theme of the
/// state's action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub action: ActionId,
    pub main_actions: SmallVec<[ActionId; 2]>,
}

impl State {
    pub fn new(action: ActionId) -> Self {
        State {
            action,
            main_actions: SmallVec::new(),
        }
    }

    /// Register a main action during which this state applies.
    pub fn applies_during(mut self, main: ActionId) -> Self {
        self.main_actions.push(main);
        self
    }
}
