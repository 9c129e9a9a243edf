//! Asset resolution: embed an image when it exists, otherwise a placeholder.
//!
//! The same decision is made for the overview image, the components diagram
//! and every step illustration, so it lives here once. A missing asset is an
//! expected outcome and never an error.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Document;

use super::escape::is_reserved;
use super::RenderOptions;

/// Characters that end or unbalance a `\includegraphics` argument even
/// inside `\detokenize`.
const UNEMBEDDABLE: [char; 4] = ['%', '#', '{', '}'];

/// The position in the manual an asset is referenced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    /// Title-page overview image
    Overview,
    /// Components page diagram
    ComponentsDiagram,
    /// Illustration of the step at this 1-based position
    Step(usize),
}

impl AssetSlot {
    /// Fixed message shown in place of a missing asset.
    pub fn placeholder_message(&self) -> String {
        match self {
            AssetSlot::Overview => "Overview image not available".to_string(),
            AssetSlot::ComponentsDiagram => "Components diagram not available".to_string(),
            AssetSlot::Step(n) => format!("Step {} image not available", n),
        }
    }
}

impl fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSlot::Overview => write!(f, "overview image"),
            AssetSlot::ComponentsDiagram => write!(f, "components diagram"),
            AssetSlot::Step(n) => write!(f, "step {} image", n),
        }
    }
}

/// Outcome of resolving an asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetDirective {
    /// The file exists; embed it from `path`.
    Available { path: String },
    /// The file is absent or unset; show `message` instead.
    Placeholder { message: String },
}

impl AssetDirective {
    /// Check if the asset will be embedded.
    pub fn is_available(&self) -> bool {
        matches!(self, AssetDirective::Available { .. })
    }

    /// Check if a placeholder will be shown.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, AssetDirective::Placeholder { .. })
    }

    /// Render as a LaTeX command; `width` is a fraction of `\textwidth`.
    ///
    /// Paths with reserved characters other than `_` are passed through
    /// `\detokenize`.
    pub fn to_latex(&self, width: f32) -> String {
        match self {
            AssetDirective::Available { path } if needs_detokenize(path) => format!(
                "\\includegraphics[width={}\\textwidth]{{\\detokenize{{{}}}}}",
                width, path
            ),
            AssetDirective::Available { path } => {
                format!("\\includegraphics[width={}\\textwidth]{{{}}}", width, path)
            }
            AssetDirective::Placeholder { message } => format!(
                "\\fbox{{\\parbox[c][4cm][c]{{{}\\textwidth}}{{\\centering {}}}}}",
                width, message
            ),
        }
    }
}

/// graphicx reads underscores in file names as-is.
fn needs_detokenize(path: &str) -> bool {
    path.chars().any(|c| c != '_' && is_reserved(c))
}

/// Checks asset existence and builds directives.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    root: Option<PathBuf>,
    path_prefix: String,
}

impl AssetResolver {
    /// Create a resolver that checks paths as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver configured from render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            root: options.asset_root.clone(),
            path_prefix: options.image_path_prefix.clone(),
        }
    }

    /// Resolve relative paths against `root` when checking existence.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Prepend `prefix` to embedded paths.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Check whether the asset file exists. I/O errors count as absent.
    pub fn exists(&self, path: &str) -> bool {
        let candidate = match self.root {
            Some(ref root) => root.join(path),
            None => Path::new(path).to_path_buf(),
        };
        fs::metadata(&candidate)
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// Resolve the asset for `slot`.
    pub fn resolve(&self, slot: AssetSlot, path: Option<&str>) -> AssetDirective {
        match path {
            Some(p) if self.exists(p) => {
                let path = self.embed_path(p);
                if path.contains(&UNEMBEDDABLE[..]) {
                    log::warn!("{} path {} cannot be embedded, using placeholder", slot, p);
                    AssetDirective::Placeholder {
                        message: slot.placeholder_message(),
                    }
                } else {
                    AssetDirective::Available { path }
                }
            }
            Some(p) => {
                log::warn!("{} not found at {}, using placeholder", slot, p);
                AssetDirective::Placeholder {
                    message: slot.placeholder_message(),
                }
            }
            None => {
                log::debug!("no {} set, using placeholder", slot);
                AssetDirective::Placeholder {
                    message: slot.placeholder_message(),
                }
            }
        }
    }

    /// LaTeX wants forward slashes on every platform.
    fn embed_path(&self, path: &str) -> String {
        format!("{}{}", self.path_prefix, path).replace('\\', "/")
    }
}

/// List every asset the manual will try to embed, in output order.
///
/// The components diagram is listed only when the components page is
/// enabled, and steps only when they reference an image.
pub fn referenced_assets(doc: &Document) -> Vec<(AssetSlot, Option<&str>)> {
    let mut assets = vec![(AssetSlot::Overview, doc.overview_image())];
    if doc.has_parts_diagram() {
        assets.push((AssetSlot::ComponentsDiagram, doc.parts_diagram_image()));
    }
    for (index, step) in doc.steps().iter().enumerate() {
        if let Some(image) = step.image() {
            assets.push((AssetSlot::Step(index + 1), Some(image)));
        }
    }
    assets
}
