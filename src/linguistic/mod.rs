//! Linguistic leaf types: word senses and morphological flags.
//!
//! Senses are opaque identifiers into an external lexicon (the WordNet synset
//! numbering, historically). This crate never interprets a sense beyond
//! equality and the [`SynSet::NONE`] sentinel, which marks the generic
//! pronoun "it" and the root mind scope.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// SynSet — opaque word-sense identifier
// ============================================================================

/// Opaque word-sense identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SynSet(pub u32);

impl SynSet {
    /// The "no sense" sentinel: the generic "it" and the root mind marker.
    pub const NONE: SynSet = SynSet(0);

    pub fn is_none(&self) -> bool {
        *self == SynSet::NONE
    }
}

impl From<u32> for SynSet {
    fn from(v: u32) -> Self {
        SynSet(v)
    }
}

impl fmt::Display for SynSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Morphological flags
// ============================================================================

/// Grammatical tense of a verb.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Tense {
    Past,
    #[default]
    Present,
    Future,
}

/// Prepositional relation anchoring a place or time qualifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Adposition {
    In,
    On,
    At,
    From,
    To,
    Under,
    Over,
    Near,
    Before,
    After,
    During,
    Since,
    Until,
    Between,
}

impl fmt::Display for Adposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Adposition::In => "in",
            Adposition::On => "on",
            Adposition::At => "at",
            Adposition::From => "from",
            Adposition::To => "to",
            Adposition::Under => "under",
            Adposition::Over => "over",
            Adposition::Near => "near",
            Adposition::Before => "before",
            Adposition::After => "after",
            Adposition::During => "during",
            Adposition::Since => "since",
            Adposition::Until => "until",
            Adposition::Between => "between",
        };
        f.write_str(s)
    }
}

/// Graded comparison carried by a relative link.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Comparison {
    More,
    Less,
    Most,
    Least,
    Equal,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Comparison::More => "more",
            Comparison::Less => "less",
            Comparison::Most => "most",
            Comparison::Least => "least",
            Comparison::Equal => "equal",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Word classes
// ============================================================================

/// A noun: a sense plus, for proper nouns, the literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Noun {
    pub sense: SynSet,
    /// Proper nouns carry their surface form; common nouns carry none.
    pub text: Option<String>,
}

impl Noun {
    /// The generic "it" — also the root mind marker.
    pub const IT: Noun = Noun {
        sense: SynSet::NONE,
        text: None,
    };

    /// A common noun identified by its sense.
    pub fn common(sense: impl Into<SynSet>) -> Self {
        Noun {
            sense: sense.into(),
            text: None,
        }
    }

    /// A proper noun carrying its surface form.
    pub fn proper(text: impl Into<String>) -> Self {
        Noun {
            sense: SynSet::NONE,
            text: Some(text.into()),
        }
    }

    /// True for the generic "it" marker: no sense and no text.
    pub fn is_root_marker(&self) -> bool {
        self.sense.is_none() && self.text.is_none()
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => f.write_str(text),
            None => write!(f, "n{}", self.sense),
        }
    }
}

/// A verb: a sense plus tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    pub sense: SynSet,
    pub tense: Tense,
}

impl Verb {
    pub fn new(sense: impl Into<SynSet>) -> Self {
        Verb {
            sense: sense.into(),
            tense: Tense::default(),
        }
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = tense;
        self
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.sense)
    }
}

/// An adjective sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjective {
    pub sense: SynSet,
}

impl Adjective {
    pub fn new(sense: impl Into<SynSet>) -> Self {
        Adjective {
            sense: sense.into(),
        }
    }
}

impl fmt::Display for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adj{}", self.sense)
    }
}

/// An adverb sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adverb {
    pub sense: SynSet,
}

impl Adverb {
    pub fn new(sense: impl Into<SynSet>) -> Self {
        Adverb {
            sense: sense.into(),
        }
    }
}

impl fmt::Display for Adverb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adv{}", self.sense)
    }
}

// ============================================================================
// Tests
// ============================================================================
