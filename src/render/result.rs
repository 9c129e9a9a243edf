//! Rendering result with statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of rendering a manual, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered LaTeX source
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,

    /// When the content was produced
    pub generated_at: DateTime<Utc>,
}

impl RenderResult {
    /// Create a new render result stamped with the current time.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self {
            content,
            stats,
            generated_at: Utc::now(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counters collected while rendering sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections emitted
    pub section_count: u32,

    /// Number of step sections
    pub step_count: u32,

    /// Number of images embedded
    pub figure_count: u32,

    /// Number of placeholders emitted for missing assets
    pub placeholder_count: u32,

    /// Number of inter-step page breaks
    pub page_break_count: u32,

    /// Number of bill-of-materials data rows (fallback row excluded)
    pub part_row_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment step count.
    pub fn add_step(&mut self) {
        self.step_count += 1;
    }

    /// Increment embedded figure count.
    pub fn add_figure(&mut self) {
        self.figure_count += 1;
    }

    /// Increment placeholder count.
    pub fn add_placeholder(&mut self) {
        self.placeholder_count += 1;
    }

    /// Increment page break count.
    pub fn add_page_break(&mut self) {
        self.page_break_count += 1;
    }

    /// Increment part row count.
    pub fn add_part_row(&mut self) {
        self.part_row_count += 1;
    }

    /// Whether any referenced asset was replaced by a placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.placeholder_count > 0
    }
}
