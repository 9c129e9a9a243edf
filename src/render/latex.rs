//! LaTeX document assembly.

use crate::model::Document;

use super::sections::{Section, SectionRenderer};
use super::{RenderOptions, RenderResult};

/// Fixed preamble opened before the first section in standalone mode.
pub const PREAMBLE: &str = "\\documentclass[a4paper,11pt]{article}
\\usepackage[utf8]{inputenc}
\\usepackage[T1]{fontenc}
\\usepackage{textcomp}
\\usepackage{graphicx}
\\usepackage{caption}
\\usepackage{longtable}
\\usepackage[margin=2cm]{geometry}
\\begin{document}
";

/// Closes the document in standalone mode.
pub const DOCUMENT_END: &str = "\\end{document}\n";

/// Convert a document to LaTeX.
pub fn to_latex(doc: &Document, options: &RenderOptions) -> String {
    LatexRenderer::new(options.clone()).render(doc)
}

/// Convert a document to LaTeX with statistics.
pub fn to_latex_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    LatexRenderer::new(options.clone()).render_with_stats(doc)
}

/// LaTeX renderer.
pub struct LatexRenderer {
    options: RenderOptions,
}

impl LatexRenderer {
    /// Create a new LaTeX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to LaTeX.
    pub fn render(&self, doc: &Document) -> String {
        let sections = SectionRenderer::new(&self.options).render(doc);
        self.assemble(&sections)
    }

    /// Render a document to LaTeX with statistics.
    pub fn render_with_stats(&self, doc: &Document) -> RenderResult {
        let (sections, stats) = SectionRenderer::new(&self.options).render_with_stats(doc);
        let content = self.assemble(&sections);
        log::info!(
            "rendered \"{}\": {} sections, {} placeholders",
            doc.title(),
            stats.section_count,
            stats.placeholder_count
        );
        RenderResult::new(content, stats)
    }

    fn assemble(&self, sections: &[Section]) -> String {
        let body_len: usize = sections.iter().map(|s| s.markup.len() + 1).sum();
        let mut output = String::with_capacity(body_len + PREAMBLE.len() + DOCUMENT_END.len());

        if self.options.standalone {
            output.push_str(PREAMBLE);
            output.push('\n');
        }

        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&section.markup);
        }

        if self.options.standalone {
            output.push('\n');
            output.push_str(DOCUMENT_END);
        }

        output
    }
}
