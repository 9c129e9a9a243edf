//! Section rendering for assembly manuals.
//!
//! A manual is a fixed sequence of sections:
//!
//! ```text
//! title page -> [components page] -> step 1 .. step N -> bill of materials -> closing
//! ```
//!
//! The components page appears only when the document requests it, and the
//! step phase is empty for a document without steps. Every free-text field is
//! escaped on the way in; images go through the [`AssetResolver`].
//!
//! # Example
//!
//! ```
//! use manualtex::model::{Document, DocumentRecord, StepRecord};
//! use manualtex::render::{RenderOptions, SectionKind, SectionRenderer};
//!
//! let record = DocumentRecord::new("Shelf X").with_step(StepRecord::new("Attach the legs"));
//! let doc = Document::from_record(record).unwrap();
//!
//! let sections = SectionRenderer::new(&RenderOptions::default()).render(&doc);
//! assert_eq!(sections[0].kind, SectionKind::TitlePage);
//! assert_eq!(sections[1].kind, SectionKind::Step { position: 1 });
//! ```

use serde::Serialize;

use crate::model::{Document, Part, Step};

use super::asset::{AssetDirective, AssetResolver, AssetSlot};
use super::escape::escape_latex;
use super::{RenderOptions, RenderStats};

/// Marker emitted between consecutive steps.
pub const PAGE_BREAK: &str = "\\newpage";

/// Fixed label under the title.
pub const TITLE_LABEL: &str = "Assembly Instructions";

/// Fixed caption of the components diagram.
pub const COMPONENTS_CAPTION: &str = "Parts and components";

/// Bill-of-materials row shown when no parts are listed.
pub const NO_PARTS_ROW: &str = "\\multicolumn{3}{|c|}{No parts listed} \\\\";

/// Structural role of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Title page with overview image and model details
    TitlePage,
    /// Components diagram page
    ComponentsList,
    /// One assembly step (1-based position)
    Step { position: usize },
    /// Parts table
    BillOfMaterials,
    /// Closing text
    Closing,
}

/// A contiguous block of rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// What this section is
    pub kind: SectionKind,
    /// LaTeX source of the section, newline-terminated
    pub markup: String,
}

impl Section {
    fn new(kind: SectionKind, markup: String) -> Self {
        Self { kind, markup }
    }
}

/// Render the ordered sections of a document.
pub fn render_sections(doc: &Document, options: &RenderOptions) -> Vec<Section> {
    SectionRenderer::new(options).render(doc)
}

/// Section renderer.
pub struct SectionRenderer {
    resolver: AssetResolver,
    image_width: f32,
    stats: RenderStats,
}

impl SectionRenderer {
    /// Create a new section renderer.
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            resolver: AssetResolver::from_options(options),
            image_width: options.image_width,
            stats: RenderStats::new(),
        }
    }

    /// Render all sections in order.
    pub fn render(mut self, doc: &Document) -> Vec<Section> {
        self.render_internal(doc)
    }

    /// Render all sections and return the collected statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> (Vec<Section>, RenderStats) {
        let sections = self.render_internal(doc);
        (sections, self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> Vec<Section> {
        let mut sections = Vec::with_capacity(doc.steps().len() + 4);

        sections.push(self.title_section(doc));

        if doc.has_parts_diagram() {
            sections.push(self.components_section(doc));
        }

        let step_count = doc.steps().len();
        for (index, step) in doc.steps().iter().enumerate() {
            let is_last = index + 1 == step_count;
            sections.push(self.step_section(index, step, is_last));
        }

        sections.push(self.bill_of_materials_section(doc.parts()));
        sections.push(self.closing_section());

        for section in &sections {
            log::debug!("rendered {:?} ({} bytes)", section.kind, section.markup.len());
            self.stats.add_section();
        }

        sections
    }

    fn title_section(&mut self, doc: &Document) -> Section {
        let overview = self.directive(AssetSlot::Overview, doc.overview_image());

        let mut output = String::new();
        output.push_str("\\begin{titlepage}\n");
        output.push_str("\\centering\n");
        output.push_str(&format!(
            "{{\\Huge\\bfseries {}\\par}}\n",
            escape_latex(doc.title())
        ));
        output.push_str("\\vspace{1.5cm}\n");
        output.push_str(&overview);
        output.push_str("\\par\n");
        output.push_str("\\vspace{1.5cm}\n");
        output.push_str(&format!("{{\\Large {}\\par}}\n", TITLE_LABEL));
        output.push_str("\\vspace{1cm}\n");
        output.push_str(&format!(
            "{{\\large Model: {}\\par}}\n",
            escape_latex(doc.model_id())
        ));
        output.push_str(&format!(
            "{{\\large Estimated time: {}\\par}}\n",
            escape_latex(doc.time_estimate())
        ));
        output.push_str("\\end{titlepage}\n");

        Section::new(SectionKind::TitlePage, output)
    }

    fn components_section(&mut self, doc: &Document) -> Section {
        let diagram = self.directive(AssetSlot::ComponentsDiagram, doc.parts_diagram_image());

        let mut output = String::new();
        output.push_str("\\section*{Components}\n");
        push_figure(&mut output, &diagram, COMPONENTS_CAPTION);
        output.push_str("\\clearpage\n");

        Section::new(SectionKind::ComponentsList, output)
    }

    fn step_section(&mut self, index: usize, step: &Step, is_last: bool) -> Section {
        let position = index + 1;
        self.stats.add_step();

        let mut output = String::new();
        output.push_str(&format!("\\section*{{Step {}}}\n", position));

        let caption = escape_latex(step.caption());
        match step.image() {
            Some(image) => {
                let directive = self.directive(AssetSlot::Step(position), Some(image));
                push_figure(&mut output, &directive, &caption);
            }
            None => {
                output.push_str(&caption);
                output.push_str("\\par\n");
            }
        }

        if !is_last {
            self.stats.add_page_break();
            output.push_str(PAGE_BREAK);
            output.push('\n');
        }

        Section::new(SectionKind::Step { position }, output)
    }

    fn bill_of_materials_section(&mut self, parts: &[Part]) -> Section {
        let mut output = String::new();
        output.push_str("\\clearpage\n");
        output.push_str("\\section*{Bill of Materials}\n");
        output.push_str("\\begin{longtable}{|l|l|r|}\n");
        output.push_str("\\hline\n");
        output.push_str("\\textbf{Part No.} & \\textbf{Name} & \\textbf{Qty} \\\\\n");
        output.push_str("\\hline\n");
        output.push_str("\\endhead\n");

        if parts.is_empty() {
            output.push_str(NO_PARTS_ROW);
            output.push('\n');
        } else {
            for part in parts {
                self.stats.add_part_row();
                output.push_str(&bom_row(part));
                output.push('\n');
            }
        }

        output.push_str("\\hline\n");
        output.push_str("\\end{longtable}\n");

        Section::new(SectionKind::BillOfMaterials, output)
    }

    fn closing_section(&self) -> Section {
        let mut output = String::new();
        output.push_str("\\vspace*{\\fill}\n");
        output.push_str("\\begin{center}\n");
        output.push_str("{\\Large Assembly complete.\\par}\n");
        output.push_str("\\vspace{0.5cm}\n");
        output.push_str(
            "Check that all connections are tight before use. \
             Keep these instructions for future reference.\n",
        );
        output.push_str("\\end{center}\n");

        Section::new(SectionKind::Closing, output)
    }

    fn directive(&mut self, slot: AssetSlot, path: Option<&str>) -> String {
        let directive = self.resolver.resolve(slot, path);
        match directive {
            AssetDirective::Available { .. } => self.stats.add_figure(),
            AssetDirective::Placeholder { .. } => self.stats.add_placeholder(),
        }
        directive.to_latex(self.image_width)
    }
}

/// One table row: number, name, quantity.
///
/// The leading cell is braced so a number starting with `[` is not taken as
/// the optional argument of the previous row's `\\`.
fn bom_row(part: &Part) -> String {
    format!(
        "{{{}}} & {} & {} \\\\",
        escape_latex(part.number()),
        escape_latex(part.name()),
        part.quantity()
    )
}

/// Centered figure with an unnumbered caption. `caption` must be escaped.
fn push_figure(output: &mut String, graphic: &str, caption: &str) {
    output.push_str("\\begin{figure}[h!]\n");
    output.push_str("\\centering\n");
    output.push_str(graphic);
    output.push('\n');
    output.push_str(&format!("\\caption*{{{}}}\n", caption));
    output.push_str("\\end{figure}\n");
}
