//! Assembly step type.

use super::document::non_blank;
use super::StepRecord;
use crate::error::ValidationError;
use serde::Serialize;

/// A validated assembly step.
///
/// Steps carry no position; it is derived from their index in
/// [`Document::steps`](super::Document::steps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    image: Option<String>,
    caption: String,
}

impl Step {
    /// Validate a step record. `index` is 1-based and only used for errors.
    pub(crate) fn from_record(index: usize, record: StepRecord) -> Result<Self, ValidationError> {
        let caption = record.caption.ok_or(ValidationError::MissingField {
            entry: "step",
            index,
            field: "caption",
        })?;

        Ok(Self {
            image: non_blank(record.image),
            caption,
        })
    }

    /// Illustration path, if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Instruction text.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}
