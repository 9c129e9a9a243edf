//! Integration tests for LaTeX rendering.

use manualtex::model::{Document, DocumentRecord, PartRecord, StepRecord};
use manualtex::render::escape::{escape_latex, is_reserved};
use manualtex::render::sections::{NO_PARTS_ROW, PAGE_BREAK};
use manualtex::render::{render_sections, to_latex, RenderOptions, SectionKind};

fn build(record: DocumentRecord) -> Document {
    Document::from_record(record).unwrap()
}

fn step_labels(latex: &str) -> Vec<usize> {
    latex
        .match_indices("\\section*{Step ")
        .map(|(start, needle)| {
            let rest = &latex[start + needle.len()..];
            let end = rest.find('}').unwrap();
            rest[..end].parse().unwrap()
        })
        .collect()
}

fn bom_section(doc: &Document) -> String {
    render_sections(doc, &RenderOptions::default())
        .into_iter()
        .find(|s| s.kind == SectionKind::BillOfMaterials)
        .unwrap()
        .markup
}

fn data_rows(bom: &str) -> Vec<&str> {
    bom.lines()
        .filter(|line| {
            line.ends_with("\\\\") && !line.starts_with("\\textbf") && *line != NO_PARTS_ROW
        })
        .collect()
}

#[test]
fn test_scenario_a_minimal_document() {
    let doc = build(DocumentRecord::new("Shelf X"));
    let latex = to_latex(&doc, &RenderOptions::default());

    assert!(latex.contains("{\\Huge\\bfseries Shelf X\\par}"));
    assert!(latex.contains("Overview image not available"));
    assert!(!latex.contains("\\section*{Components}"));
    assert!(step_labels(&latex).is_empty());
    assert!(!latex.contains(PAGE_BREAK));
    assert_eq!(latex.matches(NO_PARTS_ROW).count(), 1);
    assert!(latex.contains("Assembly complete."));

    let kinds: Vec<_> = render_sections(&doc, &RenderOptions::default())
        .into_iter()
        .map(|s| s.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::TitlePage,
            SectionKind::BillOfMaterials,
            SectionKind::Closing
        ]
    );
}

#[test]
fn test_scenario_b_mixed_steps() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("step_01.png"), b"png").unwrap();

    let doc = build(
        DocumentRecord::new("Stool")
            .with_step(StepRecord::new("Legs & seat").with_image("step_01.png"))
            .with_step(StepRecord::new("Tighten bolts & check")),
    );
    let options = RenderOptions::new().with_asset_root(dir.path());
    let sections = render_sections(&doc, &options);

    let first = &sections[1];
    assert_eq!(first.kind, SectionKind::Step { position: 1 });
    assert!(first
        .markup
        .contains("\\includegraphics[width=0.8\\textwidth]{step_01.png}"));
    assert!(first.markup.contains("\\caption*{Legs \\& seat}"));
    assert!(first.markup.contains(PAGE_BREAK));

    let second = &sections[2];
    assert_eq!(second.kind, SectionKind::Step { position: 2 });
    assert!(second.markup.contains("Tighten bolts \\& check\\par"));
    assert!(!second.markup.contains("\\includegraphics"));
    assert!(!second.markup.contains(PAGE_BREAK));

    assert_eq!(sections[3].kind, SectionKind::BillOfMaterials);
}

#[test]
fn test_scenario_c_single_part() {
    let doc = build(DocumentRecord::new("Shelf X").with_part(PartRecord::new("A1", "Screw", 4)));
    let bom = bom_section(&doc);

    assert_eq!(data_rows(&bom), vec!["{A1} & Screw & 4 \\\\"]);
    assert!(!bom.contains(NO_PARTS_ROW));
}

#[test]
fn test_components_section_never_rendered_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("parts.png"), b"png").unwrap();

    for diagram in [None, Some(""), Some("missing.png"), Some("parts.png")] {
        let mut record = DocumentRecord::new("Stool");
        record.parts_diagram_image = diagram.map(str::to_string);
        let doc = build(record);

        let latex = to_latex(&doc, &RenderOptions::new().with_asset_root(dir.path()));
        assert!(
            !latex.contains("\\section*{Components}"),
            "components rendered for {:?}",
            diagram
        );
    }
}

#[test]
fn test_components_section_renders_with_flag_regardless_of_image() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("parts.png"), b"png").unwrap();
    let options = RenderOptions::new().with_asset_root(dir.path());

    let found = to_latex(
        &build(DocumentRecord::new("Stool").with_parts_diagram("parts.png")),
        &options,
    );
    assert!(found.contains("\\section*{Components}"));
    assert!(found.contains("{parts.png}"));

    let mut record = DocumentRecord::new("Stool");
    record.has_parts_diagram = true;
    let unset = to_latex(&build(record), &options);
    assert!(unset.contains("\\section*{Components}"));
    assert!(unset.contains("Components diagram not available"));
}

#[test]
fn test_step_labels_and_page_breaks() {
    for count in 1..=7 {
        let mut record = DocumentRecord::new("Wardrobe");
        for i in 0..count {
            record = record.with_step(StepRecord::new(format!("instruction {}", i)));
        }
        let latex = to_latex(&build(record), &RenderOptions::default());

        let expected: Vec<usize> = (1..=count).collect();
        assert_eq!(step_labels(&latex), expected);
        assert_eq!(latex.matches(PAGE_BREAK).count(), count - 1);

        // The last step is never followed by a page break.
        let last_label = format!("\\section*{{Step {}}}", count);
        let tail = &latex[latex.find(&last_label).unwrap()..];
        assert!(!tail.contains(PAGE_BREAK));
    }
}

#[test]
fn test_bom_row_counts() {
    let empty = bom_section(&build(DocumentRecord::new("Stool")));
    assert!(data_rows(&empty).is_empty());
    assert_eq!(empty.matches(NO_PARTS_ROW).count(), 1);

    let parts = [("P001", "Leg 1", 1), ("P002", "Seat", 1), ("P003", "Screw_M6", 12)];
    let mut record = DocumentRecord::new("Stool");
    for (number, name, quantity) in parts {
        record = record.with_part(PartRecord::new(number, name, quantity));
    }
    let bom = bom_section(&build(record));
    assert_eq!(
        data_rows(&bom),
        vec![
            "{P001} & Leg 1 & 1 \\\\",
            "{P002} & Seat & 1 \\\\",
            "{P003} & Screw\\_M6 & 12 \\\\",
        ]
    );
    assert!(!bom.contains(NO_PARTS_ROW));
}

#[test]
fn test_free_text_fields_are_escaped() {
    let doc = build(
        DocumentRecord::new("Desk $99")
            .with_model_id("A#1")
            .with_time_estimate("50%")
            .with_step(StepRecord::new("Use {tool}"))
            .with_part(PartRecord::new("N_1", "Bolt ~ M4", 2)),
    );
    let latex = to_latex(&doc, &RenderOptions::new().body_only());

    assert!(latex.contains("Desk \\$99"));
    assert!(latex.contains("A\\#1"));
    assert!(latex.contains("50\\%"));
    assert!(latex.contains("Use \\{tool\\}"));
    assert!(latex.contains("{N\\_1} & Bolt \\textasciitilde{} M4 & 2 \\\\"));
}

#[test]
fn test_escaper_properties() {
    let reserved = "&%$#_{}~^\\";
    let escaped = escape_latex(reserved);
    // Every remaining reserved character belongs to an escape sequence.
    let stripped = escaped
        .replace("\\textasciitilde{}", "")
        .replace("\\textasciicircum{}", "")
        .replace("\\textbackslash{}", "");
    let stripped = ["\\&", "\\%", "\\$", "\\#", "\\_", "\\{", "\\}"]
        .iter()
        .fold(stripped, |acc, seq| acc.replace(*seq, ""));
    assert!(stripped.chars().all(|c| !is_reserved(c)), "left: {:?}", stripped);

    for clean in ["Shelf X", "Attach Leg 1 (P001) as shown.", "15 minutes"] {
        assert_eq!(escape_latex(clean), clean);
    }
}
