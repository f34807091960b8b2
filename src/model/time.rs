//! Time (pote, "when"): a temporal qualifier on an action.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::linguistic::{Adposition, Adverb};
use super::{Disjunction, SubstanceId};

/// A temporal qualifier: a prepositional relation, an optional modifying
/// adverb, and either a literal point in time or substances standing in
/// that relation ("before the war").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Time {
    pub relation: Adposition,
    pub adverb: Option<Adverb>,
    pub datetime: Option<NaiveDateTime>,
    pub sites: Disjunction<SubstanceId>,
}

impl Time {
    pub fn new(relation: Adposition) -> Self {
        Time {
            relation,
            adverb: None,
            datetime: None,
            sites: Disjunction::new(),
        }
    }

    /// A literal point in time: "at 10:30 on 2017-03-01".
    pub fn literal(relation: Adposition, datetime: NaiveDateTime) -> Self {
        let mut time = Time::new(relation);
        time.datetime = Some(datetime);
        time
    }

    /// Convenience: all `sites` as a single conjunction group
    /// ("after the meal and the speech").
    pub fn at(relation: Adposition, sites: impl IntoIterator<Item = SubstanceId>) -> Self {
        let mut time = Time::new(relation);
        time.sites.push_group(sites);
        time
    }

    pub fn with_adverb(mut self, adverb: Adverb) -> Self {
        self.adverb = Some(adverb);
        self
    }
}
