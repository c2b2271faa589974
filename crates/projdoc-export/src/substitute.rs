use tracing::debug;

use projdoc_core::models::field_set::FieldSet;

use crate::document::{Block, Cell, Paragraph, Run, Table, TemplateDocument};
use crate::styles::StyleDirective;

/// Blank paragraphs among this many leading paragraphs are dropped.
pub const BLANK_CLEANUP_WINDOW: usize = 10;

/// Fill every placeholder of `fields` found in `document`.
///
/// Returns a new document; `document` is left untouched.
///
/// - A paragraph or cell containing a placeholder has every occurrence
///   replaced by the trimmed value, tokens applied in [`FieldSet`] order. Its
///   content collapses into a single run carrying the directive's font and the
///   size of the last token that matched.
/// - Every top-level paragraph gets the directive's line spacing.
/// - Top-level paragraphs within the first [`BLANK_CLEANUP_WINDOW`] that are
///   blank after substitution are removed. Tables don't count towards the
///   window and cells are never removed.
pub fn substitute(
    document: &TemplateDocument,
    fields: &FieldSet,
    style: &StyleDirective,
) -> TemplateDocument {
    let mut paragraph_index = 0;
    let mut rewritten = 0;

    let candidates: Vec<(Block, bool)> = document
        .blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph(source) => {
                let mut paragraph = source.clone();
                if let Some((text, size)) = fill(&paragraph.text(), fields, style) {
                    paragraph.rewrite(vec![Run::styled(text, &style.font, size)]);
                    rewritten += 1;
                }
                paragraph.line_spacing = Some(style.line_spacing);

                let keep = paragraph_index >= BLANK_CLEANUP_WINDOW || !paragraph.is_blank();
                paragraph_index += 1;
                (Block::Paragraph(paragraph), keep)
            }
            Block::Table(table) => (Block::Table(substitute_table(table, fields, style)), true),
            Block::Other(child) => (Block::Other(child.clone()), true),
        })
        .collect();

    let before = candidates.len();
    let blocks: Vec<Block> = candidates
        .into_iter()
        .filter_map(|(block, keep)| keep.then_some(block))
        .collect();

    debug!(
        paragraphs_rewritten = rewritten,
        blank_removed = before - blocks.len(),
        "template substituted"
    );

    TemplateDocument::new(blocks)
}

fn substitute_table(table: &Table, fields: &FieldSet, style: &StyleDirective) -> Table {
    let mut table = table.clone();
    for row in &mut table.rows {
        for cell in &mut row.cells {
            substitute_cell(cell, fields, style);
        }
    }
    table
}

fn substitute_cell(cell: &mut Cell, fields: &FieldSet, style: &StyleDirective) {
    if let Some((text, size)) = fill(&cell.text(), fields, style) {
        cell.rewrite(vec![Paragraph::new(vec![Run::styled(
            text,
            &style.font,
            size,
        )])]);
    }
}

/// Apply all matching tokens to `text`.
///
/// Returns the new text and the point size to style it with, or `None` when no
/// placeholder occurs in `text`.
fn fill(text: &str, fields: &FieldSet, style: &StyleDirective) -> Option<(String, usize)> {
    let mut current = text.to_string();
    let mut size = None;

    for (token, value) in fields.iter() {
        let placeholder = token.placeholder();
        if current.contains(placeholder) {
            current = current.replace(placeholder, value.trim());
            size = Some(style.size_for(token));
        }
    }

    size.map(|size| (current, size))
}
