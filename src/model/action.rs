//! Action (poiein, to do; paschein, to undergo): events anchored by a verb.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::linguistic::{Adverb, Verb};
use super::{ActionId, Disjunction, Place, QSubstanceId, Relative, Time};

/// Directed, informational relation between actions.
///
/// Stored on the graph but never followed by the generation engine, so the
/// relation graph may be cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRelation {
    Imply,
    Cause,
    Before,
    After,
}

/// An event: a verb with agent and theme role fillers, adverbs, and
/// spatial/temporal/relative qualifiers.
///
/// Agents and themes are each a disjunction of conjunctions — "(Alice and
/// Bob) or Carol" as subject. An empty disjunction means the role is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub verb: Verb,
    pub adverbs: SmallVec<[Adverb; 2]>,
    pub agents: Disjunction<QSubstanceId>,
    pub themes: Disjunction<QSubstanceId>,
    pub places: Vec<Place>,
    pub times: Vec<Time>,
    pub relatives: Vec<Relative>,
    pub relations: Vec<(ActionRelation, ActionId)>,
}

impl Action {
    pub fn new(verb: Verb) -> Self {
        Action {
            verb,
            adverbs: SmallVec::new(),
            agents: Disjunction::new(),
            themes: Disjunction::new(),
            places: Vec::new(),
            times: Vec::new(),
            relatives: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Add one conjunction group of agents ("Alice and Bob").
    /// Empty groups are dropped.
    pub fn add_agent_group(&mut self, group: impl IntoIterator<Item = QSubstanceId>) {
        self.agents.push_group(group);
    }

    /// Add one conjunction group of themes. Empty groups are dropped.
    pub fn add_theme_group(&mut self, group: impl IntoIterator<Item = QSubstanceId>) {
        self.themes.push_group(group);
    }

    pub fn add_adverb(&mut self, adverb: Adverb) {
        self.adverbs.push(adverb);
    }

    pub fn add_place(&mut self, place: Place) {
        self.places.push(place);
    }

    pub fn add_time(&mut self, time: Time) {
        self.times.push(time);
    }

    pub fn add_relative(&mut self, relative: Relative) {
        self.relatives.push(relative);
    }

    /// Record a directed relation to another action (imply/cause/before/
    /// after). Informational only.
    pub fn relate(&mut self, relation: ActionRelation, other: ActionId) {
        self.relations.push((relation, other));
    }

    pub fn has_agent(&self, occurrence: QSubstanceId) -> bool {
        self.agents.contains(&occurrence)
    }

    pub fn has_theme(&self, occurrence: QSubstanceId) -> bool {
        self.themes.contains(&occurrence)
    }

    /// Copy with only the requested roles retained. State restatements use
    /// this to describe a single participant.
    pub fn role_stripped(&self, keep_agents: bool, keep_themes: bool) -> Action {
        let mut copy = self.clone();
        if !keep_agents {
            copy.agents = Disjunction::new();
        }
        if !keep_themes {
            copy.themes = Disjunction::new();
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_stripping_keeps_one_side() {
        let mut action = Action::new(Verb::new(100));
        action.add_agent_group([QSubstanceId(0)]);
        action.add_theme_group([QSubstanceId(1)]);

        let agent_only = action.role_stripped(true, false);
        assert!(agent_only.has_agent(QSubstanceId(0)));
        assert!(!agent_only.has_theme(QSubstanceId(1)));

        let theme_only = action.role_stripped(false, true);
        assert!(!theme_only.has_agent(QSubstanceId(0)));
        assert!(theme_only.has_theme(QSubstanceId(1)));
    }

    #[test]
    fn test_empty_role_group_is_absent() {
        let mut action = Action::new(Verb::new(100));
        action.add_agent_group([]);
        assert!(action.agents.is_empty());
    }
}
