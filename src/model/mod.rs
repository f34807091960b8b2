//! # The Knowledge Graph Model
//!
//! Pure-data types for the Aristotelian categories. These cross every
//! boundary: construction ↔ knowledge layer ↔ generation engine ↔ user.
//!
//! Design rule: no I/O, no interior mutability, no traversal logic here.
//! Entities reference each other exclusively through arena handles; handle
//! equality is entity identity.

pub mod graph;
pub mod disjunction;
pub mod substance;
pub mod quality;
pub mod quantity;
pub mod place;
pub mod time;
pub mod relative;
pub mod action;

pub use graph::{Ontology, SubstanceId, QSubstanceId, ActionId};
pub use disjunction::{Disjunction, Conjunction};
pub use substance::{Substance, QuantSubstance, State};
pub use quality::Quality;
pub use quantity::Quantity;
pub use place::Place;
pub use time::Time;
pub use relative::{Relative, RelativeKind, RelativeOwner};
pub use action::{Action, ActionRelation};
