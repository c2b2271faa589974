use projdoc_core::models::field_set::FieldSet;
use projdoc_core::models::token::Token;
use projdoc_export::document::{Block, Cell, Paragraph, Row, Run, Table, TemplateDocument};
use projdoc_export::styles::{ONE_AND_A_HALF_LINES, StyleDirective};
use projdoc_export::substitute::{BLANK_CLEANUP_WINDOW, substitute};

fn doc(paragraphs: &[&str]) -> TemplateDocument {
    TemplateDocument::new(
        paragraphs
            .iter()
            .map(|text| Block::Paragraph(Paragraph::from_text(*text)))
            .collect(),
    )
}

fn texts(document: &TemplateDocument) -> Vec<String> {
    document.paragraphs().map(Paragraph::text).collect()
}

fn table_doc(cells: &[&str]) -> TemplateDocument {
    let row = Row::new(cells.iter().map(|text| Cell::from_text(*text)).collect());
    TemplateDocument::new(vec![Block::Table(Table::new(vec![row]))])
}

#[test]
fn single_token_is_replaced_and_nothing_else_changes() {
    let document = doc(&["Title", "A project titled <PROJECT_NAME> was done.", "Closing"]);
    let fields = FieldSet::new().with(Token::ProjectName, "X");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&out), vec!["Title", "A project titled X was done.", "Closing"]);
}

#[test]
fn every_occurrence_is_replaced() {
    let document = doc(&["<DEGREE> and again <DEGREE>"]);
    let fields = FieldSet::new().with(Token::Degree, "BE");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&out), vec!["BE and again BE"]);
}

#[test]
fn values_are_trimmed() {
    let document = doc(&["Guided by <SUPERVISOR_NAME>."]);
    let fields = FieldSet::new().with(Token::SupervisorName, "  Dr. Iyer \n");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&out), vec!["Guided by Dr. Iyer."]);
}

#[test]
fn unknown_tokens_are_left_alone_and_absent_keys_are_no_ops() {
    let document = doc(&["<HOD_NAME> heads the department", "<UNLISTED> stays"]);
    let fields = FieldSet::new().with(Token::ProjectName, "Unused");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&out), vec!["<HOD_NAME> heads the department", "<UNLISTED> stays"]);
    assert!(out.paragraphs().all(|p| !p.is_rewritten()));
}

#[test]
fn matching_is_case_sensitive() {
    let document = doc(&["<project_name> <PROJECT_NAME>"]);
    let fields = FieldSet::new().with(Token::ProjectName, "P");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&out), vec!["<project_name> P"]);
}

#[test]
fn input_document_is_not_mutated() {
    let document = doc(&["<PROJECT_NAME>"]);
    let fields = FieldSet::new().with(Token::ProjectName, "P");

    let _ = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&document), vec!["<PROJECT_NAME>"]);
}

#[test]
fn substituted_paragraph_collapses_into_one_styled_run() {
    let document = TemplateDocument::new(vec![Block::Paragraph(Paragraph::new(vec![
        Run::new("Project: "),
        Run::new("<PROJECT_NAME>"),
        Run::new(" (final)"),
    ]))]);
    let fields = FieldSet::new().with(Token::ProjectName, "Irrigation");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    let paragraph = out.paragraphs().next().unwrap();

    assert_eq!(paragraph.runs, vec![Run::styled("Project: Irrigation (final)", "Times New Roman", 18)]);
    assert!(paragraph.is_rewritten());
}

#[test]
fn declared_sizes_and_default_size() {
    let document = doc(&["<STUDENT_1>", "<HOD_PRONOUN>"]);
    let fields = FieldSet::new()
        .with(Token::Student1, "Alice")
        .with(Token::HodPronoun, "her");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    let sizes: Vec<Option<usize>> = out.paragraphs().map(|p| p.runs[0].size_pt).collect();
    assert_eq!(sizes, vec![Some(16), Some(14)]);
}

#[test]
fn last_matching_token_decides_the_size() {
    let document = doc(&["<PROJECT_NAME> by <STUDENT_DETAILS>"]);
    let fields = FieldSet::new()
        .with(Token::ProjectName, "P")
        .with(Token::StudentDetails, "A 1");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    let run = &out.paragraphs().next().unwrap().runs[0];
    assert_eq!(run.text, "P by A 1");
    assert_eq!(run.size_pt, Some(14));
}

#[test]
fn unsubstituted_runs_keep_template_formatting() {
    let document = doc(&["Plain text"]);
    let out = substitute(&document, &FieldSet::new(), &StyleDirective::reference());

    let run = &out.paragraphs().next().unwrap().runs[0];
    assert_eq!(run.font, None);
    assert_eq!(run.size_pt, None);
}

#[test]
fn every_paragraph_gets_line_spacing() {
    let document = doc(&["one", "<DEGREE>", "three"]);
    let fields = FieldSet::new().with(Token::Degree, "BE");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert!(out.paragraphs().all(|p| p.line_spacing == Some(ONE_AND_A_HALF_LINES)));
}

#[test]
fn blank_paragraphs_removed_only_in_first_window() {
    let mut lines: Vec<&str> = vec!["Heading", "", "   ", "Body"];
    lines.resize(15, "filler");
    lines.push(""); // position 15

    let out = substitute(&doc(&lines), &FieldSet::new(), &StyleDirective::reference());
    let result = texts(&out);

    assert_eq!(result.len(), lines.len() - 2);
    assert_eq!(&result[..2], &["Heading", "Body"]);
    assert_eq!(result.last().map(String::as_str), Some(""));
}

#[test]
fn paragraph_emptied_by_substitution_is_removed_inside_window() {
    let document = doc(&["<INDUSTRY_NAME>", "Body"]);
    let fields = FieldSet::new().with(Token::IndustryName, "");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    assert_eq!(texts(&out), vec!["Body"]);
}

#[test]
fn paragraph_emptied_outside_window_is_kept() {
    let mut lines = vec!["text"; BLANK_CLEANUP_WINDOW];
    lines.push("<INDUSTRY_NAME>");
    let fields = FieldSet::new().with(Token::IndustryName, "");

    let out = substitute(&doc(&lines), &fields, &StyleDirective::reference());
    assert_eq!(texts(&out).len(), BLANK_CLEANUP_WINDOW + 1);
    assert_eq!(texts(&out).last().map(String::as_str), Some(""));
}

#[test]
fn tables_do_not_count_towards_cleanup_window() {
    let mut blocks: Vec<Block> = (0..5)
        .map(|_| Block::Table(Table::new(vec![Row::new(vec![Cell::from_text("cell")])])))
        .collect();
    for _ in 0..9 {
        blocks.push(Block::Paragraph(Paragraph::from_text("text")));
    }
    blocks.push(Block::Paragraph(Paragraph::from_text(""))); // paragraph index 9

    let out = substitute(&TemplateDocument::new(blocks), &FieldSet::new(), &StyleDirective::reference());
    assert_eq!(out.paragraphs().count(), 9);
    assert_eq!(out.tables().count(), 5);
}

#[test]
fn table_cells_are_substituted_and_styled() {
    let document = table_doc(&["Name: <STUDENT_1>", "Reg: <REG_NO_1>", "Static"]);
    let fields = FieldSet::new()
        .with(Token::Student1, "Alice")
        .with(Token::RegNo1, "R100");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    let cells = &out.tables().next().unwrap().rows[0].cells;

    assert_eq!(cells[0].text(), "Name: Alice");
    assert_eq!(cells[1].text(), "Reg: R100");
    assert_eq!(cells[2].text(), "Static");
    assert!(cells[0].is_rewritten());
    assert!(!cells[2].is_rewritten());

    let run = &cells[0].paragraphs[0].runs[0];
    assert_eq!(run.font.as_deref(), Some("Times New Roman"));
    assert_eq!(run.size_pt, Some(16));
}

#[test]
fn table_cells_get_no_line_spacing_and_no_cleanup() {
    let document = table_doc(&["", "<DEGREE>"]);
    let fields = FieldSet::new().with(Token::Degree, "");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    let cells = &out.tables().next().unwrap().rows[0].cells;

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].text(), "");
    assert!(
        cells
            .iter()
            .flat_map(|cell| &cell.paragraphs)
            .all(|p| p.line_spacing.is_none())
    );
}

#[test]
fn multi_paragraph_cell_collapses_into_one_paragraph() {
    let cell = Cell::new(vec![
        Paragraph::from_text("Supervisor"),
        Paragraph::from_text("<SUPERVISOR_NAME>"),
    ]);
    let document = TemplateDocument::new(vec![Block::Table(Table::new(vec![Row::new(vec![cell])]))]);
    let fields = FieldSet::new().with(Token::SupervisorName, "Dr. Iyer");

    let out = substitute(&document, &fields, &StyleDirective::reference());
    let cell = &out.tables().next().unwrap().rows[0].cells[0];

    assert_eq!(cell.paragraphs.len(), 1);
    assert_eq!(cell.text(), "Supervisor\nDr. Iyer");
}

#[test]
fn size_overrides_apply() {
    let mut overrides = std::collections::BTreeMap::new();
    overrides.insert(Token::ProjectName, 24);
    let style = StyleDirective::reference().with_sizes(&overrides);

    let out = substitute(&doc(&["<PROJECT_NAME>"]), &FieldSet::new().with(Token::ProjectName, "P"), &style);
    assert_eq!(out.paragraphs().next().unwrap().runs[0].size_pt, Some(24));
    assert_eq!(style.size_for(Token::Degree), 16);
    assert_eq!(style.size_for(Token::IndustryName), 14);
}
