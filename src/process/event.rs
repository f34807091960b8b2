//! Event stream as data: a serializable mirror of the [`Handler`] contract
//! plus the [`EventLog`] recording backend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::linguistic::{Adjective, Adposition, Adverb, Comparison, Noun, Verb};
use crate::Result;
use super::Handler;

/// One generation event. Mirrors the [`Handler`] methods 1:1, so a recorded
/// stream can be replayed, diffed, or serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    BeginAction { id: String, verb: Verb, adverbs: Vec<Adverb> },
    EndAction { id: String, verb: Verb, adverbs: Vec<Adverb> },
    ActionFound { id: String },
    BeginAgents { action: String },
    EndAgents { action: String },
    BeginThemes { action: String },
    EndThemes { action: String },
    BeginDisjunction,
    EndDisjunction,
    BeginSubstance { id: String, noun: Noun },
    EndSubstance { id: String, noun: Noun },
    SubstanceFound { id: String },
    AddQuantityPlural { unit: Option<Noun> },
    AddQuantity { value: f64, unit: Option<Noun>, cardinal: bool },
    AddQuality { adjective: Adjective, adverbs: Vec<Adverb> },
    BeginState { substance: String, action: String },
    EndState { substance: String, action: String },
    AddState { is_agent: bool, action: String },
    BeginPlace { relation: Adposition, adverb: Option<Adverb> },
    EndPlace { relation: Adposition, adverb: Option<Adverb> },
    BeginTime {
        relation: Adposition,
        adverb: Option<Adverb>,
        datetime: Option<NaiveDateTime>,
    },
    EndTime {
        relation: Adposition,
        adverb: Option<Adverb>,
        datetime: Option<NaiveDateTime>,
    },
    BeginActionRelative { action: String },
    EndActionRelative { action: String },
    BeginSubstanceRelative { substance: String },
    EndSubstanceRelative { substance: String },
    AddRelative {
        comparison: Option<Comparison>,
        adjective: Option<Adjective>,
        target: String,
    },
    IdeaAssembled { action: String },
}

/// Records the raw event stream.
///
/// The reference backend: tests assert on it, and a traversal can be dumped
/// as JSON for inspection or replay elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    /// Count of events matching a predicate.
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Handler for EventLog {
    fn begin_action(&mut self, id: &str, verb: &Verb, adverbs: &[Adverb]) {
        self.events.push(Event::BeginAction {
            id: id.into(),
            verb: *verb,
            adverbs: adverbs.to_vec(),
        });
    }

    fn end_action(&mut self, id: &str, verb: &Verb, adverbs: &[Adverb]) {
        self.events.push(Event::EndAction {
            id: id.into(),
            verb: *verb,
            adverbs: adverbs.to_vec(),
        });
    }

    fn action_found(&mut self, id: &str) {
        self.events.push(Event::ActionFound { id: id.into() });
    }

    fn begin_agents(&mut self, action_id: &str) {
        self.events.push(Event::BeginAgents { action: action_id.into() });
    }

    fn end_agents(&mut self, action_id: &str) {
        self.events.push(Event::EndAgents { action: action_id.into() });
    }

    fn begin_themes(&mut self, action_id: &str) {
        self.events.push(Event::BeginThemes { action: action_id.into() });
    }

    fn end_themes(&mut self, action_id: &str) {
        self.events.push(Event::EndThemes { action: action_id.into() });
    }

    fn begin_disjunction(&mut self) {
        self.events.push(Event::BeginDisjunction);
    }

    fn end_disjunction(&mut self) {
        self.events.push(Event::EndDisjunction);
    }

    fn begin_substance(&mut self, id: &str, noun: &Noun) {
        self.events.push(Event::BeginSubstance {
            id: id.into(),
            noun: noun.clone(),
        });
    }

    fn end_substance(&mut self, id: &str, noun: &Noun) {
        self.events.push(Event::EndSubstance {
            id: id.into(),
            noun: noun.clone(),
        });
    }

    fn substance_found(&mut self, id: &str) {
        self.events.push(Event::SubstanceFound { id: id.into() });
    }

    fn add_quantity_plural(&mut self, unit: Option<&Noun>) {
        self.events.push(Event::AddQuantityPlural { unit: unit.cloned() });
    }

    fn add_quantity(&mut self, value: f64, unit: Option<&Noun>, cardinal: bool) {
        self.events.push(Event::AddQuantity {
            value,
            unit: unit.cloned(),
            cardinal,
        });
    }

    fn add_quality(&mut self, adjective: &Adjective, adverbs: &[Adverb]) {
        self.events.push(Event::AddQuality {
            adjective: *adjective,
            adverbs: adverbs.to_vec(),
        });
    }

    fn begin_state(&mut self, substance_id: &str, action_id: &str) {
        self.events.push(Event::BeginState {
            substance: substance_id.into(),
            action: action_id.into(),
        });
    }

    fn end_state(&mut self, substance_id: &str, action_id: &str) {
        self.events.push(Event::EndState {
            substance: substance_id.into(),
            action: action_id.into(),
        });
    }

    fn add_state(&mut self, is_agent: bool, action_id: &str) {
        self.events.push(Event::AddState {
            is_agent,
            action: action_id.into(),
        });
    }

    fn begin_place(&mut self, relation: Adposition, adverb: Option<&Adverb>) {
        self.events.push(Event::BeginPlace {
            relation,
            adverb: adverb.copied(),
        });
    }

    fn end_place(&mut self, relation: Adposition, adverb: Option<&Adverb>) {
        self.events.push(Event::EndPlace {
            relation,
            adverb: adverb.copied(),
        });
    }

    fn begin_time(
        &mut self,
        relation: Adposition,
        adverb: Option<&Adverb>,
        datetime: Option<NaiveDateTime>,
    ) {
        self.events.push(Event::BeginTime {
            relation,
            adverb: adverb.copied(),
            datetime,
        });
    }

    fn end_time(
        &mut self,
        relation: Adposition,
        adverb: Option<&Adverb>,
        datetime: Option<NaiveDateTime>,
    ) {
        self.events.push(Event::EndTime {
            relation,
            adverb: adverb.copied(),
            datetime,
        });
    }

    fn begin_action_relative(&mut self, action_id: &str) {
        self.events.push(Event::BeginActionRelative { action: action_id.into() });
    }

    fn end_action_relative(&mut self, action_id: &str) {
        self.events.push(Event::EndActionRelative { action: action_id.into() });
    }

    fn begin_substance_relative(&mut self, substance_id: &str) {
        self.events.push(Event::BeginSubstanceRelative {
            substance: substance_id.into(),
        });
    }

    fn end_substance_relative(&mut self, substance_id: &str) {
        self.events.push(Event::EndSubstanceRelative {
            substance: substance_id.into(),
        });
    }

    fn add_relative(
        &mut self,
        comparison: Option<Comparison>,
        adjective: Option<&Adjective>,
        target_id: &str,
    ) {
        self.events.push(Event::AddRelative {
            comparison,
            adjective: adjective.copied(),
            target: target_id.into(),
        });
    }

    fn idea_assembled(&mut self, action_id: &str) {
        self.events.push(Event::IdeaAssembled { action: action_id.into() });
    }
}
