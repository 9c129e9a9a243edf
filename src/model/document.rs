//! Validated document type.

use super::{DocumentRecord, Part, Step};
use crate::error::ValidationError;
use serde::Serialize;

/// Value used for `model_id` and `time_estimate` when the record omits them.
pub const NOT_AVAILABLE: &str = "N/A";

/// A validated assembly manual, ready for rendering.
///
/// Instances can only be obtained through [`Document::from_record`], so every
/// `Document` satisfies the model invariants: non-empty title, complete step
/// and part entries, and non-negative quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    title: String,
    model_id: String,
    time_estimate: String,
    overview_image: Option<String>,
    has_parts_diagram: bool,
    parts_diagram_image: Option<String>,
    steps: Vec<Step>,
    parts: Vec<Part>,
}

impl Document {
    /// Validate a raw record.
    pub fn from_record(record: DocumentRecord) -> Result<Self, ValidationError> {
        let title = record.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let steps = record
            .steps
            .into_iter()
            .enumerate()
            .map(|(i, step)| Step::from_record(i + 1, step))
            .collect::<Result<Vec<_>, _>>()?;

        let parts = record
            .parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| Part::from_record(i + 1, part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title,
            model_id: record
                .model_id
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            time_estimate: record
                .time_estimate
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            overview_image: non_blank(record.overview_image),
            has_parts_diagram: record.has_parts_diagram,
            parts_diagram_image: non_blank(record.parts_diagram_image),
            steps,
            parts,
        })
    }

    /// Manual title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Model identifier.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Estimated assembly time.
    pub fn time_estimate(&self) -> &str {
        &self.time_estimate
    }

    /// Overview image path, if any.
    pub fn overview_image(&self) -> Option<&str> {
        self.overview_image.as_deref()
    }

    /// Whether the components page is requested.
    pub fn has_parts_diagram(&self) -> bool {
        self.has_parts_diagram
    }

    /// Components diagram path, if any.
    pub fn parts_diagram_image(&self) -> Option<&str> {
        self.parts_diagram_image.as_deref()
    }

    /// Steps in assembly order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Bill-of-materials entries in order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Total number of pieces across all parts.
    pub fn total_quantity(&self) -> u64 {
        self.parts.iter().map(Part::quantity).sum()
    }
}

impl TryFrom<DocumentRecord> for Document {
    type Error = ValidationError;

    fn try_from(record: DocumentRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

/// Treat empty or whitespace-only paths as absent.
pub(crate) fn non_blank(path: Option<String>) -> Option<String> {
    path.filter(|p| !p.trim().is_empty())
}
