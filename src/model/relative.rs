//! Relative (pros ti, "toward something"): possession and graded comparison.

use serde::{Deserialize, Serialize};

use crate::linguistic::{Adjective, Comparison};
use crate::{Error, Result};
use super::{ActionId, QSubstanceId};

/// Shape of a relative link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeKind {
    /// Possession or association: "the mother *of* the child".
    Of,
    More,
    Less,
    Most,
    Least,
    Equal,
}

impl RelativeKind {
    /// The comparison this kind carries; `Of` is a plain possession link.
    pub fn comparison(&self) -> Option<Comparison> {
        match self {
            RelativeKind::Of => None,
            RelativeKind::More => Some(Comparison::More),
            RelativeKind::Less => Some(Comparison::Less),
            RelativeKind::Most => Some(Comparison::Most),
            RelativeKind::Least => Some(Comparison::Least),
            RelativeKind::Equal => Some(Comparison::Equal),
        }
    }
}

/// Near side of a relative link. A comparison can be anchored to an action:
/// "Karim *worked* harder than his colleague".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeOwner {
    Substance(QSubstanceId),
    Action(ActionId),
}

/// A possession or graded-comparison link between an owner and a target
/// substance.
///
/// Construct through [`Relative::of`] or [`Relative::comparison`]; the
/// factories enforce that a comparison always carries an adjective and that
/// `Of` never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relative {
    kind: RelativeKind,
    adjective: Option<Adjective>,
    owner: RelativeOwner,
    target: QSubstanceId,
}

impl Relative {
    /// Possession link: "the mother OF the child".
    pub fn of(owner: QSubstanceId, target: QSubstanceId) -> Self {
        Relative {
            kind: RelativeKind::Of,
            adjective: None,
            owner: RelativeOwner::Substance(owner),
            target,
        }
    }

    /// Graded comparison anchored to an adjective: "taller than me".
    ///
    /// Rejects [`RelativeKind::Of`] — use [`Relative::of`] for possession.
    pub fn comparison(
        kind: RelativeKind,
        adjective: Adjective,
        owner: RelativeOwner,
        target: QSubstanceId,
    ) -> Result<Self> {
        if kind == RelativeKind::Of {
            return Err(Error::InvalidRelative(
                "OF carries no comparison; use Relative::of".into(),
            ));
        }
        Ok(Relative {
            kind,
            adjective: Some(adjective),
            owner,
            target,
        })
    }

    pub fn kind(&self) -> RelativeKind {
        self.kind
    }

    pub fn adjective(&self) -> Option<&Adjective> {
        self.adjective.as_ref()
    }

    /// The near side of the link.
    pub fn owner(&self) -> RelativeOwner {
        self.owner
    }

    /// The entity on the far side of the link. This is what generation
    /// resolves a role identifier for.
    pub fn target(&self) -> QSubstanceId {
        self.target
    }
}
