//! The entity arena and its typed handles.
//!
//! Every [`Substance`], [`QuantSubstance`], and [`Action`] lives here and is
//! addressed by a handle assigned at insertion. Handle equality is the
//! identity the generator memoizes on: two structurally identical substances
//! remain two entities unless they share a handle.
//!
//! The arena is mutable while the graph is being built and must be treated as
//! read-only for the duration of any traversal.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{Action, QuantSubstance, Substance};

// ============================================================================
// Handles
// ============================================================================

/// Handle of a [`Substance`] in the arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SubstanceId(pub u64);

/// Handle of a [`QuantSubstance`] (one role occurrence) in the arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct QSubstanceId(pub u64);

/// Handle of an [`Action`] in the arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ActionId(pub u64);

impl fmt::Display for SubstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QSubstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ontology
// ============================================================================

/// The arena holding every entity of one knowledge graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ontology {
    substances: HashMap<SubstanceId, Substance>,
    qsubstances: HashMap<QSubstanceId, QuantSubstance>,
    actions: HashMap<ActionId, Action>,
    next_substance: u64,
    next_qsubstance: u64,
    next_action: u64,
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Insertion — each returns the entity's permanent handle
    // ========================================================================

    pub fn add_substance(&mut self, substance: Substance) -> SubstanceId {
        let id = SubstanceId(self.next_substance);
        self.next_substance += 1;
        self.substances.insert(id, substance);
        id
    }

    pub fn add_qsubstance(&mut self, qsubstance: QuantSubstance) -> QSubstanceId {
        let id = QSubstanceId(self.next_qsubstance);
        self.next_qsubstance += 1;
        self.qsubstances.insert(id, qsubstance);
        id
    }

    pub fn add_action(&mut self, action: Action) -> ActionId {
        let id = ActionId(self.next_action);
        self.next_action += 1;
        self.actions.insert(id, action);
        id
    }

    /// Wrap an existing substance in a fresh role occurrence.
    pub fn occurrence(&mut self, substance: SubstanceId) -> QSubstanceId {
        self.add_qsubstance(QuantSubstance::new(substance))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn substance(&self, id: SubstanceId) -> Option<&Substance> {
        self.substances.get(&id)
    }

    pub fn qsubstance(&self, id: QSubstanceId) -> Option<&QuantSubstance> {
        self.qsubstances.get(&id)
    }

    pub fn action(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(&id)
    }

    // Mutable access is for graph construction only; never mutate during a
    // traversal.

    pub fn substance_mut(&mut self, id: SubstanceId) -> Option<&mut Substance> {
        self.substances.get_mut(&id)
    }

    pub fn qsubstance_mut(&mut self, id: QSubstanceId) -> Option<&mut QuantSubstance> {
        self.qsubstances.get_mut(&id)
    }

    pub fn action_mut(&mut self, id: ActionId) -> Option<&mut Action> {
        self.actions.get_mut(&id)
    }

    // ========================================================================
    // Counts
    // ========================================================================

    pub fn substance_count(&self) -> usize {
        self.substances.len()
    }

    pub fn qsubstance_count(&self) -> usize {
        self.qsubstances.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}
