//! # The Generation Engine
//!
//! [`Generator`] walks a knowledge graph exactly once per distinct entity
//! and pushes begin/end events into a [`Handler`]. The handler contract is
//! the engine's only boundary: backends turn the flat, deterministic event
//! stream into text, markup, or a structured payload.

pub mod handler;
pub mod generator;
pub mod event;
pub mod request;

pub use handler::Handler;
pub use generator::{Generator, ACTION_PREFIX, ROLE_PREFIX};
pub use event::{Event, EventLog};
pub use request::StructuredRequest;
