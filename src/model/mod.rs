//! Document model types for assembly manuals.
//!
//! Callers hand in a [`DocumentRecord`] (from Rust or from `metadata.json`);
//! validation produces an immutable [`Document`] that the renderer consumes.

mod document;
mod part;
mod record;
mod step;

pub use document::{Document, NOT_AVAILABLE};
pub use part::Part;
pub use record::{DocumentRecord, PartRecord, StepRecord};
pub use step::Step;
