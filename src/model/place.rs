//! Place (pou, "where"): a spatial qualifier on an action.

use serde::{Deserialize, Serialize};

use crate::linguistic::{Adposition, Adverb};
use super::{Disjunction, SubstanceId};

/// A spatial qualifier: a prepositional relation, an optional modifying
/// adverb, and the substances standing in that relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub relation: Adposition,
    pub adverb: Option<Adverb>,
    pub sites: Disjunction<SubstanceId>,
}

impl Place {
    pub fn new(relation: Adposition) -> Self {
        Place {
            relation,
            adverb: None,
            sites: Disjunction::new(),
        }
    }

    /// Convenience: all `sites` as a single conjunction group
    /// ("in the house and the garden").
    pub fn at(relation: Adposition, sites: impl IntoIterator<Item = SubstanceId>) -> Self {
        let mut place = Place::new(relation);
        place.sites.push_group(sites);
        place
    }

    pub fn with_adverb(mut self, adverb: Adverb) -> Self {
        self.adverb = Some(adverb);
        self
    }
}
