//! Structured-request backend.
//!
//! Renders the event stream as nested block text suitable for feeding a
//! surface realizer: one `@act` block per action, `@role` blocks for
//! entities, `@ref`/`@found` lines where an entity was already expanded.
//!
//! ```text
//! @act a0 (v1926 present)
//!   @agents
//!     @or
//!       @role r0 (Alice)
//!   @themes
//! ```
//!
//! The exact formatting is owned by this crate; it exists to prove the
//! handler contract against a realistic text backend and to give tests a
//! readable rendering.

use chrono::NaiveDateTime;

use crate::linguistic::{Adjective, Adposition, Adverb, Comparison, Noun, Tense, Verb};
use super::Handler;

/// Builds a structured-request string from the event stream.
#[derive(Debug, Clone, Default)]
pub struct StructuredRequest {
    out: String,
    indent: usize,
}

impl StructuredRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.indent += 1;
    }

    fn close(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
}

fn tense_str(tense: Tense) -> &'static str {
    match tense {
        Tense::Past => "past",
        Tense::Present => "present",
        Tense::Future => "future",
    }
}

/// " [adv1 adv2]" or nothing.
fn adverb_suffix(adverbs: &[Adverb]) -> String {
    if adverbs.is_empty() {
        return String::new();
    }
    let inner: Vec<String> = adverbs.iter().map(ToString::to_string).collect();
    format!(" [{}]", inner.join(" "))
}

impl Handler for StructuredRequest {
    fn begin_action(&mut self, id: &str, verb: &Verb, adverbs: &[Adverb]) {
        self.open(&format!(
            "@act {id} ({verb} {}){}",
            tense_str(verb.tense),
            adverb_suffix(adverbs),
        ));
    }

    fn end_action(&mut self, _id: &str, _verb: &Verb, _adverbs: &[Adverb]) {
        self.close();
    }

    fn action_found(&mut self, id: &str) {
        self.line(&format!("@found {id}"));
    }

    fn begin_agents(&mut self, _action_id: &str) {
        self.open("@agents");
    }

    fn end_agents(&mut self, _action_id: &str) {
        self.close();
    }

    fn begin_themes(&mut self, _action_id: &str) {
        self.open("@themes");
    }

    fn end_themes(&mut self, _action_id: &str) {
        self.close();
    }

    fn begin_disjunction(&mut self) {
        self.open("@or");
    }

    fn end_disjunction(&mut self) {
        self.close();
    }

    fn begin_substance(&mut self, id: &str, noun: &Noun) {
        self.open(&format!("@role {id} ({noun})"));
    }

    fn end_substance(&mut self, _id: &str, _noun: &Noun) {
        self.close();
    }

    fn substance_found(&mut self, id: &str) {
        self.line(&format!("@ref {id}"));
    }

    fn add_quantity_plural(&mut self, unit: Option<&Noun>) {
        match unit {
            Some(unit) => self.line(&format!("qty: plural {unit}")),
            None => self.line("qty: plural"),
        }
    }

    fn add_quantity(&mut self, value: f64, unit: Option<&Noun>, cardinal: bool) {
        let kind = if cardinal { "cardinal" } else { "ordinal" };
        match unit {
            Some(unit) => self.line(&format!("qty: {value} {unit} {kind}")),
            None => self.line(&format!("qty: {value} {kind}")),
        }
    }

    fn add_quality(&mut self, adjective: &Adjective, adverbs: &[Adverb]) {
        self.line(&format!("adj: {adjective}{}", adverb_suffix(adverbs)));
    }

    fn begin_state(&mut self, substance_id: &str, action_id: &str) {
        self.open(&format!("@state {substance_id} in {action_id}"));
    }

    fn end_state(&mut self, _substance_id: &str, _action_id: &str) {
        self.close();
    }

    fn add_state(&mut self, is_agent: bool, action_id: &str) {
        let role = if is_agent { "agent" } else { "theme" };
        self.line(&format!("as: {role} of {action_id}"));
    }

    fn begin_place(&mut self, relation: Adposition, adverb: Option<&Adverb>) {
        match adverb {
            Some(adv) => self.open(&format!("@place {relation} [{adv}]")),
            None => self.open(&format!("@place {relation}")),
        }
    }

    fn end_place(&mut self, _relation: Adposition, _adverb: Option<&Adverb>) {
        self.close();
    }

    fn begin_time(
        &mut self,
        relation: Adposition,
        adverb: Option<&Adverb>,
        datetime: Option<NaiveDateTime>,
    ) {
        let mut text = format!("@time {relation}");
        if let Some(adv) = adverb {
            text.push_str(&format!(" [{adv}]"));
        }
        if let Some(dt) = datetime {
            text.push_str(&format!(" @ {dt}"));
        }
        self.open(&text);
    }

    fn end_time(
        &mut self,
        _relation: Adposition,
        _adverb: Option<&Adverb>,
        _datetime: Option<NaiveDateTime>,
    ) {
        self.close();
    }

    fn begin_action_relative(&mut self, action_id: &str) {
        self.open(&format!("@rels {action_id}"));
    }

    fn end_action_relative(&mut self, _action_id: &str) {
        self.close();
    }

    fn begin_substance_relative(&mut self, substance_id: &str) {
        self.open(&format!("@rels {substance_id}"));
    }

    fn end_substance_relative(&mut self, _substance_id: &str) {
        self.close();
    }

    fn add_relative(
        &mut self,
        comparison: Option<Comparison>,
        adjective: Option<&Adjective>,
        target_id: &str,
    ) {
        match (comparison, adjective) {
            (Some(cmp), Some(adj)) => self.line(&format!("rel: {cmp} {adj} -> {target_id}")),
            (Some(cmp), None) => self.line(&format!("rel: {cmp} -> {target_id}")),
            _ => self.line(&format!("rel: of -> {target_id}")),
        }
    }

    fn idea_assembled(&mut self, action_id: &str) {
        self.line(&format!("@idea {action_id}"));
    }
}
