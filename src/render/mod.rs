//! Rendering module for converting assembly documents to LaTeX.

pub mod asset;
pub mod escape;
mod json;
mod latex;
mod options;
mod result;
pub mod sections;

pub use asset::{referenced_assets, AssetDirective, AssetResolver, AssetSlot};
pub use escape::escape_latex;
pub use json::{to_json, JsonFormat};
pub use latex::{to_latex, to_latex_with_stats, LatexRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use sections::{render_sections, Section, SectionKind, SectionRenderer};
