//! The handler contract — what a backend implements.
//!
//! The generator pushes events in document order, like a structured-document
//! writer. Identifiers are backend-opaque strings ("a0", "r3"); uniqueness
//! and stability within one traversal is the only guarantee — backends must
//! not read numeric meaning beyond order of first assignment.
//!
//! Every method has an empty default body; a backend overrides only the
//! events it consumes.

use chrono::NaiveDateTime;

use crate::linguistic::{Adjective, Adposition, Adverb, Comparison, Noun, Verb};

/// Push-style receiver of the generation event stream.
///
/// | Event | Brackets |
/// |-------|----------|
/// | `begin/end_action` | one action's full expansion |
/// | `begin/end_agents`, `begin/end_themes` | the role's disjunction |
/// | `begin/end_disjunction` | one conjunction group |
/// | `begin/end_substance` | one entity's expansion |
/// | `begin/end_state` | a state restatement block |
/// | `begin/end_place`, `begin/end_time` | a spatial/temporal qualifier |
/// | `begin/end_action_relative`, `begin/end_substance_relative` | relatives of an owner |
///
/// `substance_found`/`action_found` replace a full expansion when the entity
/// was already emitted earlier in the same traversal.
pub trait Handler {
    // ========================================================================
    // Actions
    // ========================================================================

    fn begin_action(&mut self, _id: &str, _verb: &Verb, _adverbs: &[Adverb]) {}

    fn end_action(&mut self, _id: &str, _verb: &Verb, _adverbs: &[Adverb]) {}

    /// The action was already expanded; only its identifier is repeated.
    fn action_found(&mut self, _id: &str) {}

    fn begin_agents(&mut self, _action_id: &str) {}

    fn end_agents(&mut self, _action_id: &str) {}

    fn begin_themes(&mut self, _action_id: &str) {}

    fn end_themes(&mut self, _action_id: &str) {}

    /// Opens one conjunction group inside the current role's disjunction.
    fn begin_disjunction(&mut self) {}

    fn end_disjunction(&mut self) {}

    // ========================================================================
    // Substances
    // ========================================================================

    fn begin_substance(&mut self, _id: &str, _noun: &Noun) {}

    fn end_substance(&mut self, _id: &str, _noun: &Noun) {}

    /// The substance was already expanded; only its identifier is repeated.
    fn substance_found(&mut self, _id: &str) {}

    /// Bare plural quantity on the current substance.
    fn add_quantity_plural(&mut self, _unit: Option<&Noun>) {}

    /// Definite count on the current substance.
    fn add_quantity(&mut self, _value: f64, _unit: Option<&Noun>, _cardinal: bool) {}

    fn add_quality(&mut self, _adjective: &Adjective, _adverbs: &[Adverb]) {}

    // ========================================================================
    // States
    // ========================================================================

    fn begin_state(&mut self, _substance_id: &str, _action_id: &str) {}

    fn end_state(&mut self, _substance_id: &str, _action_id: &str) {}

    /// Records which role of the restated action the substance covers.
    fn add_state(&mut self, _is_agent: bool, _action_id: &str) {}

    // ========================================================================
    // Places and times
    // ========================================================================

    fn begin_place(&mut self, _relation: Adposition, _adverb: Option<&Adverb>) {}

    fn end_place(&mut self, _relation: Adposition, _adverb: Option<&Adverb>) {}

    fn begin_time(
        &mut self,
        _relation: Adposition,
        _adverb: Option<&Adverb>,
        _datetime: Option<NaiveDateTime>,
    ) {
    }

    fn end_time(
        &mut self,
        _relation: Adposition,
        _adverb: Option<&Adverb>,
        _datetime: Option<NaiveDateTime>,
    ) {
    }

    // ========================================================================
    // Relatives
    // ========================================================================

    fn begin_action_relative(&mut self, _action_id: &str) {}

    fn end_action_relative(&mut self, _action_id: &str) {}

    fn begin_substance_relative(&mut self, _substance_id: &str) {}

    fn end_substance_relative(&mut self, _substance_id: &str) {}

    /// One relative link. `comparison` is `None` for a plain OF relation;
    /// `target_id` is the already-resolved role of the far entity.
    fn add_relative(
        &mut self,
        _comparison: Option<Comparison>,
        _adjective: Option<&Adjective>,
        _target_id: &str,
    ) {
    }

    // ========================================================================
    // Ideas
    // ========================================================================

    /// The named action was selected as the sentence's main idea.
    fn idea_assembled(&mut self, _action_id: &str) {}
}
