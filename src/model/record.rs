//! Raw input records, as supplied by a caller or read from `metadata.json`.
//!
//! Records are unvalidated: every field a caller may omit is optional here.
//! [`Document::from_record`](super::Document::from_record) turns a record
//! into a validated [`Document`](super::Document).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unvalidated assembly-manual record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Manual title (required, non-empty)
    pub title: Option<String>,

    /// Catalogue identifier, e.g. "A-001"
    pub model_id: Option<String>,

    /// Human-readable assembly time, e.g. "15 minutes"
    pub time_estimate: Option<String>,

    /// Path to the overview image
    pub overview_image: Option<String>,

    /// Whether a components page should be emitted
    #[serde(default)]
    pub has_parts_diagram: bool,

    /// Path to the components diagram
    pub parts_diagram_image: Option<String>,

    /// Assembly steps in order
    #[serde(default)]
    pub steps: Vec<StepRecord>,

    /// Bill of materials entries in order
    #[serde(default)]
    pub parts: Vec<PartRecord>,
}

impl DocumentRecord {
    /// Create a record with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the model identifier.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Set the time estimate.
    pub fn with_time_estimate(mut self, estimate: impl Into<String>) -> Self {
        self.time_estimate = Some(estimate.into());
        self
    }

    /// Set the overview image path.
    pub fn with_overview_image(mut self, path: impl Into<String>) -> Self {
        self.overview_image = Some(path.into());
        self
    }

    /// Enable the components page with the given diagram path.
    pub fn with_parts_diagram(mut self, path: impl Into<String>) -> Self {
        self.has_parts_diagram = true;
        self.parts_diagram_image = Some(path.into());
        self
    }

    /// Append a step.
    pub fn with_step(mut self, step: StepRecord) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a part.
    pub fn with_part(mut self, part: PartRecord) -> Self {
        self.parts.push(part);
        self
    }
}

/// Unvalidated assembly step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Path to the step illustration
    pub image: Option<String>,

    /// Instruction text (required)
    pub caption: Option<String>,
}

impl StepRecord {
    /// Create a step with a caption and no image.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            image: None,
            caption: Some(caption.into()),
        }
    }

    /// Set the step image path.
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image = Some(path.into());
        self
    }
}

/// Unvalidated bill-of-materials entry.
///
/// `quantity` is kept as a raw JSON value so that negative and non-numeric
/// inputs can be reported precisely during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Part number, e.g. "P001"
    pub number: Option<String>,

    /// Display name, e.g. "Leg 1"
    pub name: Option<String>,

    /// Quantity (integer or digit string)
    pub quantity: Option<Value>,
}

impl PartRecord {
    /// Create a part entry.
    pub fn new(number: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            number: Some(number.into()),
            name: Some(name.into()),
            quantity: Some(Value::from(quantity)),
        }
    }
}
