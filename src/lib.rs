//! # ousia — Aristotelian Knowledge Representation & Generation
//!
//! A knowledge model built on the classical categories — substance, action,
//! quality, quantity, relative, place, time — plus a generation engine that
//! walks the knowledge graph exactly once per distinct entity and emits an
//! ordered event stream a backend turns into text, markup, or a structured
//! request.
//!
//! ## Design Principles
//!
//! 1. **Handles, not references**: every entity lives in an [`Ontology`] arena
//!    and is addressed by a typed integer handle; "same instance" means
//!    "same handle"
//! 2. **Pure data model**: `model` types carry no behavior beyond construction
//!    and lookup — no I/O, no interior mutability
//! 3. **Push-style generation**: the [`Generator`] drives a [`Handler`]; the
//!    engine owns traversal order, the backend owns the output format
//! 4. **Deterministic streams**: the same graph always produces a
//!    byte-identical event sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use ousia::{Ontology, Substance, QuantSubstance, Action, Noun, Verb};
//! use ousia::process::{Generator, EventLog};
//!
//! # fn main() -> ousia::Result<()> {
//! let mut onto = Ontology::new();
//! let alice = onto.add_substance(Substance::new(Noun::proper("Alice")));
//! let alice_role = onto.add_qsubstance(QuantSubstance::new(alice));
//!
//! let mut run = Action::new(Verb::new(1926)); // "run"
//! run.add_agent_group([alice_role]);
//! let run = onto.add_action(run);
//!
//! let mut gen = Generator::new(&onto, EventLog::default());
//! gen.process_action(run)?;
//! let log = gen.finish();
//! assert_eq!(log.events.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! | Layer | Module | Description |
//! |-------|--------|-------------|
//! | Words | `linguistic` | Opaque word senses with morphological flags |
//! | Graph | `model` | Substances, actions, qualifiers in an arena |
//! | Minds | `knowledge` | Truth tables of ideas, nested mind scopes |
//! | Engine | `process` | The traversal and the handler contract |

// ============================================================================
// Modules
// ============================================================================

pub mod linguistic;
pub mod model;
pub mod knowledge;
pub mod process;

// ============================================================================
// Re-exports: Words
// ============================================================================

pub use linguistic::{
    SynSet, Noun, Verb, Adjective, Adverb,
    Tense, Adposition, Comparison,
};

// ============================================================================
// Re-exports: Model (the knowledge graph)
// ============================================================================

pub use model::{
    Ontology, SubstanceId, QSubstanceId, ActionId,
    Substance, QuantSubstance, State,
    Action, ActionRelation,
    Quality, Quantity, Place, Time,
    Relative, RelativeKind, RelativeOwner,
    Disjunction,
};

// ============================================================================
// Re-exports: Knowledge layer
// ============================================================================

pub use knowledge::{Knowledge, Mind, Truth, Idea};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use process::{Generator, Handler, Event, EventLog, StructuredRequest};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid combination of relative kind, adjective, and owner.
    #[error("invalid relative: {0}")]
    InvalidRelative(String),

    /// A handle points at nothing in the ontology the traversal was given.
    #[error("unknown {kind} handle {id}")]
    UnknownHandle { kind: &'static str, id: u64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
