//! # The Knowledge Layer
//!
//! Minds hold truth-graded ideas about actions; [`Knowledge`] bundles an
//! ontology with its minds and is the usual entry point for generation.

pub mod mind;

pub use mind::{Idea, Mind, Truth};

use serde::{Deserialize, Serialize};

use crate::model::Ontology;
use crate::process::{Generator, Handler};
use crate::Result;

/// An ontology plus the minds that hold ideas about it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Knowledge {
    pub ontology: Ontology,
    minds: Vec<Mind>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mind(&mut self, mind: Mind) {
        self.minds.push(mind);
    }

    pub fn minds(&self) -> &[Mind] {
        &self.minds
    }

    /// Generate every mind's content in one fresh traversal and return the
    /// backend with whatever it collected.
    ///
    /// Each call builds its own [`Generator`]; rendering the same knowledge
    /// into two formats means two calls, never a shared engine.
    pub fn generate<H: Handler>(&self, handler: H) -> Result<H> {
        let mut generator = Generator::new(&self.ontology, handler);
        for mind in &self.minds {
            mind.generate(&mut generator)?;
        }
        Ok(generator.finish())
    }
}
