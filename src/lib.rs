//! # manualtex
//!
//! Render furniture assembly data into paginated LaTeX instruction manuals.
//!
//! A manual is described by a [`DocumentRecord`] (usually read from a
//! `metadata.json` file), validated into a [`Document`], and rendered to a
//! LaTeX source that an external compiler such as `pdflatex` turns into a PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use manualtex::{parse_file, render};
//!
//! fn main() -> manualtex::Result<()> {
//!     let doc = parse_file("build/img/stool/metadata.json")?;
//!
//!     let options = render::RenderOptions::default().with_asset_root("build/img/stool");
//!     let latex = render::to_latex(&doc, &options);
//!     std::fs::write("stool.tex", latex)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed section order**: title page, optional components page, one page
//!   per step, bill of materials, closing
//! - **Missing assets**: absent images become framed placeholders
//! - **Escaping**: every free-text field is LaTeX-escaped
//! - **Validation**: malformed records are rejected before rendering

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use model::{Document, DocumentRecord, Part, PartRecord, Step, StepRecord};
pub use render::{
    to_latex, AssetDirective, AssetResolver, AssetSlot, JsonFormat, RenderOptions, RenderResult,
    RenderStats, Section, SectionKind,
};

use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse and validate a JSON document record.
///
/// # Example
///
/// ```
/// use manualtex::parse_str;
///
/// let doc = parse_str(r#"{"title": "Shelf X", "steps": [{"caption": "Attach legs"}]}"#).unwrap();
/// assert_eq!(doc.steps().len(), 1);
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    let record: DocumentRecord = serde_json::from_str(json)?;
    Ok(Document::from_record(record)?)
}

/// Parse and validate a JSON document record from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let record: DocumentRecord = serde_json::from_reader(reader)?;
    Ok(Document::from_record(record)?)
}

/// Parse and validate a JSON document record file.
///
/// # Example
///
/// ```no_run
/// use manualtex::parse_file;
///
/// let doc = parse_file("metadata.json").unwrap();
/// println!("{} steps", doc.steps().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("loading document record from {}", path.display());
    let data = std::fs::read_to_string(path)?;
    parse_str(&data)
}

/// Parse a JSON record and render it to LaTeX.
pub fn render_str(json: &str, options: &RenderOptions) -> Result<String> {
    let doc = parse_str(json)?;
    Ok(render::to_latex(&doc, options))
}

/// Parse a JSON record file and render it to LaTeX.
///
/// Without an explicit asset root, relative asset paths are checked against
/// the directory containing the file.
///
/// # Example
///
/// ```no_run
/// use manualtex::{render_file, RenderOptions};
///
/// let latex = render_file("build/img/stool/metadata.json", &RenderOptions::default()).unwrap();
/// std::fs::write("stool.tex", latex).unwrap();
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let path = path.as_ref();
    let doc = parse_file(path)?;
    let options = with_default_root(options.clone(), path);
    Ok(render::to_latex(&doc, &options))
}

fn with_default_root(options: RenderOptions, record_path: &Path) -> RenderOptions {
    if options.asset_root.is_some() {
        return options;
    }
    match record_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => options.with_asset_root(dir),
        _ => options,
    }
}

/// Builder for loading and rendering manuals.
///
/// # Example
///
/// ```no_run
/// use manualtex::Manualtex;
///
/// let latex = Manualtex::new()
///     .with_image_prefix("../img/stool/")
///     .with_image_width(0.7)
///     .load("build/img/stool/metadata.json")?
///     .to_latex();
/// # Ok::<(), manualtex::Error>(())
/// ```
pub struct Manualtex {
    render_options: RenderOptions,
}

impl Manualtex {
    /// Create a new Manualtex builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the directory asset paths are checked against.
    pub fn with_asset_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.render_options = self.render_options.with_asset_root(dir);
        self
    }

    /// Set the prefix for embedded image paths.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_image_prefix(prefix);
        self
    }

    /// Set the figure width as a fraction of the text width.
    pub fn with_image_width(mut self, width: f32) -> Self {
        self.render_options = self.render_options.with_image_width(width);
        self
    }

    /// Emit sections without the document preamble.
    pub fn body_only(mut self) -> Self {
        self.render_options = self.render_options.body_only();
        self
    }

    /// Load a JSON record file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<ManualtexResult> {
        let path = path.as_ref();
        let document = parse_file(path)?;
        Ok(ManualtexResult {
            document,
            render_options: with_default_root(self.render_options, path),
        })
    }

    /// Load a JSON record from a string.
    pub fn load_str(self, json: &str) -> Result<ManualtexResult> {
        let document = parse_str(json)?;
        Ok(ManualtexResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Validate an in-memory record.
    pub fn load_record(self, record: DocumentRecord) -> Result<ManualtexResult> {
        let document = Document::from_record(record)?;
        Ok(ManualtexResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Manualtex {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated document together with the options to render it.
pub struct ManualtexResult {
    /// The validated document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ManualtexResult {
    /// Convert to LaTeX.
    pub fn to_latex(&self) -> String {
        render::to_latex(&self.document, &self.render_options)
    }

    /// Convert to LaTeX with statistics.
    pub fn to_latex_with_stats(&self) -> RenderResult {
        render::to_latex_with_stats(&self.document, &self.render_options)
    }

    /// Convert to normalized JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the render options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }
}
