//! Minds: named scopes holding truth-graded ideas.
//!
//! A mind owns a table from truth level to an ordered list of ideas. The
//! owner is a quantified substance; the root mind (the narrator's) is owned
//! by the generic "it" marker and is never itself traversed as an entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ActionId, QSubstanceId};
use crate::process::{Generator, Handler};
use crate::Result;

/// Truth level a mind assigns to an idea.
///
/// Ordering is declaration order; the truth table iterates in it, which
/// keeps generation deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Truth {
    Think,
    Believe,
    Hope,
    /// A belief about what someone said.
    Quote,
    Fact,
}

/// One entry in a mind's truth table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Idea {
    /// A plain thought wrapping one action.
    Thought(ActionId),
    /// "if premises, then conclusions" — kept at a truth level of its own:
    /// "I think if ..., then ...".
    Conditional {
        premises: Vec<ActionId>,
        conclusions: Vec<ActionId>,
    },
}

/// A named scope of embedded thought: "X believes that Y acted".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mind {
    name: String,
    owner: QSubstanceId,
    truths: BTreeMap<Truth, Vec<Idea>>,
}

impl Mind {
    pub fn new(name: impl Into<String>, owner: QSubstanceId) -> Self {
        Mind {
            name: name.into(),
            owner,
            truths: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> QSubstanceId {
        self.owner
    }

    /// Record an action at the given truth level. The level's idea list is
    /// created on first insertion; lists keep insertion order.
    pub fn add_action(&mut self, truth: Truth, action: ActionId) {
        self.ideas_mut(truth).push(Idea::Thought(action));
    }

    /// Record a conditional at the given truth level.
    pub fn add_conditional(
        &mut self,
        truth: Truth,
        premises: Vec<ActionId>,
        conclusions: Vec<ActionId>,
    ) {
        self.ideas_mut(truth)
            .push(Idea::Conditional { premises, conclusions });
    }

    fn ideas_mut(&mut self, truth: Truth) -> &mut Vec<Idea> {
        self.truths.entry(truth).or_default()
    }

    /// Ideas held at one truth level, in insertion order.
    pub fn ideas(&self, truth: Truth) -> &[Idea] {
        self.truths.get(&truth).map_or(&[], Vec::as_slice)
    }

    /// Occupied truth levels in `Truth` order, with their ideas.
    pub fn truths(&self) -> impl Iterator<Item = (Truth, &[Idea])> {
        self.truths.iter().map(|(t, ideas)| (*t, ideas.as_slice()))
    }

    /// Run a generator over this mind's content.
    ///
    /// The mind scope is pushed for the whole walk; each idea is marked as a
    /// candidate main idea before its action expands, so the backend receives
    /// one `idea_assembled` per root-scope idea.
    pub fn generate<H: Handler>(&self, generator: &mut Generator<'_, H>) -> Result<()> {
        let mut result = generator.process_mind(self.owner);
        if result.is_ok() {
            result = self.generate_ideas(generator);
        }
        // Pop even when a dangling handle aborted the walk midway.
        generator.end_mind_processing(self.owner);
        result
    }

    fn generate_ideas<H: Handler>(&self, generator: &mut Generator<'_, H>) -> Result<()> {
        for (_, ideas) in self.truths.iter() {
            for idea in ideas {
                match idea {
                    Idea::Thought(action) => {
                        generator.mark_main_idea();
                        generator.process_action(*action)?;
                    }
                    Idea::Conditional { premises, conclusions } => {
                        for premise in premises {
                            generator.process_action(*premise)?;
                        }
                        generator.mark_main_idea();
                        for conclusion in conclusions {
                            generator.process_action(*conclusion)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
