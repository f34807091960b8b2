//! The traversal engine.
//!
//! Walks the knowledge graph exactly once per distinct entity, assigns
//! stable identifiers, and pushes begin/end events into a [`Handler`].
//!
//! One `Generator` runs one traversal: its memo tables and context slots are
//! traversal-scoped mutable state, so rendering the same graph into two
//! formats means two fresh generators. The graph itself is read-only during
//! traversal and may be shared between generators.
//!
//! Ordering is fully determined by role declaration order (agents before
//! themes), insertion order within conjunction groups, and first-encounter
//! order for memoized identifiers — re-running the same traversal reproduces
//! a byte-identical event stream.

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::model::{
    Action, ActionId, Disjunction, Ontology, Place, QSubstanceId, QuantSubstance, Quantity,
    Relative, State, Substance, SubstanceId, Time,
};
use crate::{Error, Result};
use super::Handler;

/// Prefix of emitted action identifiers.
pub const ACTION_PREFIX: &str = "a";
/// Prefix of emitted role identifiers.
pub const ROLE_PREFIX: &str = "r";

// ============================================================================
// Traversal context
// ============================================================================

/// Identity and emitted sequence number of the action being expanded.
/// Role-stripped copies have a sequence number but no graph identity.
#[derive(Debug, Clone, Copy)]
struct ActionScope {
    id: Option<ActionId>,
    seq: u32,
}

/// Current-action/current-substance slots. Snapshotted on entry to an
/// expansion and re-applied at every phase boundary, so context mutated by a
/// nested traversal never leaks into the next phase.
#[derive(Debug, Clone, Copy, Default)]
struct Context {
    action: Option<ActionScope>,
    substance: Option<QSubstanceId>,
}

// ============================================================================
// Generator
// ============================================================================

/// The traversal engine. Drives a [`Handler`] over one knowledge graph.
pub struct Generator<'g, H> {
    graph: &'g Ontology,
    handler: H,

    action_ids: HashMap<ActionId, u32>,
    substance_ids: HashMap<SubstanceId, u32>,
    qsubstance_ids: HashMap<QSubstanceId, u32>,
    next_action: u32,
    /// Substances and role occurrences share one counter space.
    next_role: u32,

    ctx: Context,
    minds: Vec<QSubstanceId>,
    main_idea: bool,
}

impl<'g, H: Handler> Generator<'g, H> {
    pub fn new(graph: &'g Ontology, handler: H) -> Self {
        Generator {
            graph,
            handler,
            action_ids: HashMap::new(),
            substance_ids: HashMap::new(),
            qsubstance_ids: HashMap::new(),
            next_action: 0,
            next_role: 0,
            ctx: Context::default(),
            minds: Vec::new(),
            main_idea: false,
        }
    }

    /// Consume the generator, returning the backend with what it collected.
    pub fn finish(self) -> H {
        self.handler
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Depth of the mind-scope stack.
    pub fn mind_depth(&self) -> usize {
        self.minds.len()
    }

    fn action_tag(seq: u32) -> String {
        format!("{ACTION_PREFIX}{seq}")
    }

    fn role_tag(seq: u32) -> String {
        format!("{ROLE_PREFIX}{seq}")
    }

    // ========================================================================
    // Graph lookups
    // ========================================================================

    fn lookup_action(&self, id: ActionId) -> Result<&'g Action> {
        let graph: &'g Ontology = self.graph;
        graph.action(id).ok_or(Error::UnknownHandle {
            kind: "action",
            id: id.0,
        })
    }

    fn lookup_substance(&self, id: SubstanceId) -> Result<&'g Substance> {
        let graph: &'g Ontology = self.graph;
        graph.substance(id).ok_or(Error::UnknownHandle {
            kind: "substance",
            id: id.0,
        })
    }

    fn lookup_qsubstance(&self, id: QSubstanceId) -> Result<&'g QuantSubstance> {
        let graph: &'g Ontology = self.graph;
        graph.qsubstance(id).ok_or(Error::UnknownHandle {
            kind: "quantified substance",
            id: id.0,
        })
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Expand one action, or emit `action_found` when it was already
    /// expanded in this traversal.
    pub fn process_action(&mut self, id: ActionId) -> Result<()> {
        if let Some(&seq) = self.action_ids.get(&id) {
            trace!(action = seq, "action already expanded");
            self.handler.action_found(&Self::action_tag(seq));
            return Ok(());
        }

        let action = self.lookup_action(id)?;
        let seq = self.next_action;
        self.next_action += 1;
        self.action_ids.insert(id, seq);
        debug!(action = seq, "expanding action");

        self.expand_action(action, ActionScope { id: Some(id), seq })
    }

    /// Expand a role-stripped copy that has no graph identity: fresh
    /// sequence number, never memoized. Returns the emitted tag.
    fn expand_derived_action(&mut self, action: &Action) -> Result<String> {
        let seq = self.next_action;
        self.next_action += 1;
        debug!(action = seq, "expanding derived (role-stripped) action");
        self.expand_action(action, ActionScope { id: None, seq })?;
        Ok(Self::action_tag(seq))
    }

    fn expand_action(&mut self, action: &Action, scope: ActionScope) -> Result<()> {
        let saved = self.ctx;
        // Phase context: this action is current; the caller's substance
        // stays visible to nested states.
        let phase = Context {
            action: Some(scope),
            substance: saved.substance,
        };
        let tag = Self::action_tag(scope.seq);

        self.handler.begin_action(&tag, &action.verb, &action.adverbs);

        self.ctx = phase;
        self.handler.begin_agents(&tag);
        self.process_role_disjunction(&action.agents)?;
        self.handler.end_agents(&tag);

        self.ctx = phase;
        self.handler.begin_themes(&tag);
        self.process_role_disjunction(&action.themes)?;
        self.handler.end_themes(&tag);

        self.ctx = phase;
        for place in &action.places {
            self.process_place(place)?;
        }

        self.ctx = phase;
        for time in &action.times {
            self.process_time(time)?;
        }

        self.ctx = phase;
        if !action.relatives.is_empty() {
            self.handler.begin_action_relative(&tag);
            for relative in &action.relatives {
                self.process_relative(relative)?;
            }
            self.handler.end_action_relative(&tag);
        }

        self.handler.end_action(&tag, &action.verb, &action.adverbs);

        if self.main_idea && self.in_root_scope() {
            debug!(action = scope.seq, "idea assembled");
            self.handler.idea_assembled(&tag);
            self.main_idea = false;
        }

        self.ctx = saved;
        Ok(())
    }

    /// Expand a role's disjunction: one begin/end pair per conjunction
    /// group, members generated in insertion order.
    fn process_role_disjunction(&mut self, disjunction: &Disjunction<QSubstanceId>) -> Result<()> {
        for group in disjunction.groups() {
            self.handler.begin_disjunction();
            for &member in group {
                self.process_qsubstance(member)?;
            }
            self.handler.end_disjunction();
        }
        Ok(())
    }

    /// Same expansion for place/time sites, which are bare substances.
    fn process_site_disjunction(&mut self, disjunction: &Disjunction<SubstanceId>) -> Result<()> {
        for group in disjunction.groups() {
            self.handler.begin_disjunction();
            for &member in group {
                self.process_substance(member)?;
            }
            self.handler.end_disjunction();
        }
        Ok(())
    }

    // ========================================================================
    // Substances
    // ========================================================================

    /// Expand one role occurrence, or emit `substance_found` when it was
    /// already expanded. Dedup is by occurrence handle, not by the wrapped
    /// substance.
    pub fn process_qsubstance(&mut self, id: QSubstanceId) -> Result<()> {
        if let Some(&seq) = self.qsubstance_ids.get(&id) {
            trace!(role = seq, "occurrence already expanded");
            self.handler.substance_found(&Self::role_tag(seq));
            return Ok(());
        }

        let qsub = self.lookup_qsubstance(id)?;
        let substance = self.lookup_substance(qsub.substance)?;

        self.ctx.substance = Some(id);
        let seq = self.next_role;
        self.next_role += 1;
        self.qsubstance_ids.insert(id, seq);
        let tag = Self::role_tag(seq);
        debug!(role = seq, "expanding role occurrence");

        self.handler.begin_substance(&tag, &substance.noun);

        // Occurrence quantity overrides the substance's own.
        if let Some(quantity) = qsub.quantity.as_ref().or(substance.quantity.as_ref()) {
            self.emit_quantity(quantity);
        }

        for quality in &substance.qualities {
            self.handler.add_quality(&quality.adjective, &quality.adverbs);
        }

        self.process_states(&tag, &qsub.states)?;

        if !qsub.relatives.is_empty() {
            self.handler.begin_substance_relative(&tag);
            for relative in &qsub.relatives {
                self.process_relative(relative)?;
            }
            self.handler.end_substance_relative(&tag);
        }

        self.handler.end_substance(&tag, &substance.noun);
        Ok(())
    }

    /// Expand one bare substance (place/time sites), or emit
    /// `substance_found`. Keyed by its own memo table but numbered from the
    /// shared role counter.
    pub fn process_substance(&mut self, id: SubstanceId) -> Result<()> {
        if let Some(&seq) = self.substance_ids.get(&id) {
            trace!(role = seq, "substance already expanded");
            self.handler.substance_found(&Self::role_tag(seq));
            return Ok(());
        }

        let substance = self.lookup_substance(id)?;
        let seq = self.next_role;
        self.next_role += 1;
        self.substance_ids.insert(id, seq);
        let tag = Self::role_tag(seq);
        debug!(role = seq, "expanding substance");

        self.handler.begin_substance(&tag, &substance.noun);
        if let Some(quantity) = &substance.quantity {
            self.emit_quantity(quantity);
        }
        for quality in &substance.qualities {
            self.handler.add_quality(&quality.adjective, &quality.adverbs);
        }
        self.handler.end_substance(&tag, &substance.noun);
        Ok(())
    }

    fn emit_quantity(&mut self, quantity: &Quantity) {
        match quantity {
            Quantity::Plural { unit } => self.handler.add_quantity_plural(unit.as_ref()),
            Quantity::Number { value, unit, cardinal } => {
                self.handler.add_quantity(*value, unit.as_ref(), *cardinal)
            }
        }
    }

    // ========================================================================
    // States
    // ========================================================================

    /// Expand every applicable state of the occurrence being described.
    ///
    /// A state applies only when the action currently being expanded is one
    /// of the state's main actions and the occurrence is agent or theme of
    /// the state's action. The bracket is emitted lazily, so inapplicable
    /// states leave no trace in the stream.
    fn process_states(&mut self, substance_tag: &str, states: &[State]) -> Result<()> {
        if states.is_empty() {
            return Ok(());
        }
        let Some(occurrence) = self.ctx.substance else {
            return Ok(());
        };
        let Some(scope) = self.ctx.action else {
            return Ok(());
        };
        // Derived copies have no graph identity; states never apply inside
        // them.
        let Some(current_action) = scope.id else {
            return Ok(());
        };
        let action_tag = Self::action_tag(scope.seq);

        let mut begun = false;
        for state in states {
            if !state.main_actions.contains(&current_action) {
                trace!("state skipped: not among the current action's main actions");
                continue;
            }
            let state_action = self.lookup_action(state.action)?;
            let is_agent = state_action.has_agent(occurrence);
            let is_theme = state_action.has_theme(occurrence);
            if !is_agent && !is_theme {
                trace!("state skipped: occurrence plays no role in the state's action");
                continue;
            }

            if !begun {
                self.handler.begin_state(substance_tag, &action_tag);
                begun = true;
            }

            // Restate only the participant being described: agent-only when
            // it acts, theme-only when it undergoes.
            let stripped = if is_agent {
                state_action.role_stripped(true, false)
            } else {
                state_action.role_stripped(false, true)
            };

            let saved = self.ctx;
            let derived_tag = self.expand_derived_action(&stripped)?;
            self.ctx = saved;

            self.handler.add_state(is_agent, &derived_tag);
        }
        if begun {
            self.handler.end_state(substance_tag, &action_tag);
        }
        Ok(())
    }

    // ========================================================================
    // Relatives
    // ========================================================================

    /// Emit one relative link, forcing an out-of-order expansion of its
    /// target when it has not been visited yet.
    pub fn process_relative(&mut self, relative: &Relative) -> Result<()> {
        let target = relative.target();
        if !self.qsubstance_ids.contains_key(&target) {
            trace!("relative target unseen, forcing expansion");
            self.process_qsubstance(target)?;
        }
        let seq = self
            .qsubstance_ids
            .get(&target)
            .copied()
            .ok_or(Error::UnknownHandle {
                kind: "quantified substance",
                id: target.0,
            })?;

        self.handler.add_relative(
            relative.kind().comparison(),
            relative.adjective(),
            &Self::role_tag(seq),
        );
        Ok(())
    }

    // ========================================================================
    // Places and times
    // ========================================================================

    pub fn process_place(&mut self, place: &Place) -> Result<()> {
        self.handler.begin_place(place.relation, place.adverb.as_ref());
        self.process_site_disjunction(&place.sites)?;
        self.handler.end_place(place.relation, place.adverb.as_ref());
        Ok(())
    }

    pub fn process_time(&mut self, time: &Time) -> Result<()> {
        self.handler
            .begin_time(time.relation, time.adverb.as_ref(), time.datetime);
        self.process_site_disjunction(&time.sites)?;
        self.handler
            .end_time(time.relation, time.adverb.as_ref(), time.datetime);
        Ok(())
    }

    // ========================================================================
    // Mind scopes
    // ========================================================================

    /// Enter a mind scope. The generic root marker (the "it" mind) is
    /// recorded but not traversed as an entity; any other scope is expanded
    /// as the substance whose thoughts are being embedded.
    ///
    /// A scope whose handles dangle is treated as the root rather than
    /// failing: mind owners come from the knowledge layer, not from role
    /// slots.
    pub fn process_mind(&mut self, scope: QSubstanceId) -> Result<()> {
        self.minds.push(scope);
        debug!(depth = self.minds.len(), "mind scope pushed");

        let Some(qsub) = self.graph.qsubstance(scope) else {
            return Ok(());
        };
        let Some(substance) = self.graph.substance(qsub.substance) else {
            return Ok(());
        };
        if substance.noun.is_root_marker() {
            return Ok(());
        }

        self.process_qsubstance(scope)
    }

    /// Leave a mind scope. Pops only when `scope` is the current top;
    /// a mismatch is a deliberate no-op, since nested generation may have
    /// returned early.
    pub fn end_mind_processing(&mut self, scope: QSubstanceId) {
        if self.minds.last() == Some(&scope) {
            self.minds.pop();
            debug!(depth = self.minds.len(), "mind scope popped");
        } else {
            trace!("mismatched mind scope pop ignored");
        }
    }

    /// Mark the next root-scope action expansion as the sentence's main
    /// idea. The flag is sticky until consumed.
    pub fn mark_main_idea(&mut self) {
        self.main_idea = true;
    }

    /// The active scope is the root when the stack is empty or its top is
    /// the generic "it" mind.
    fn in_root_scope(&self) -> bool {
        match self.minds.last() {
            None => true,
            Some(&scope) => self
                .graph
                .qsubstance(scope)
                .and_then(|q| self.graph.substance(q.substance))
                .is_some_and(|s| s.noun.is_root_marker()),
        }
    }
}
