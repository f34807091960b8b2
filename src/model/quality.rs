//! Quality (poion, "of what kind"): an adjective plus modifying adverbs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::linguistic::{Adjective, Adverb};

/// A quality attached to a substance: "a *very tall* man".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    pub adjective: Adjective,
    pub adverbs: SmallVec<[Adverb; 2]>,
}

impl Quality {
    pub fn new(adjective: Adjective) -> Self {
        Quality {
            adjective,
            adverbs: SmallVec::new(),
        }
    }

    pub fn with_adverb(mut self, adverb: Adverb) -> Self {
        self.adverbs.push(adverb);
        self
    }
}
