use std::io::Cursor;

use docx_rs::{
    BreakType, DocumentChild, Docx, LineSpacing, LineSpacingType, ParagraphChild, RunChild,
    RunFonts, TableCellContent, TableChild, TableRowChild,
};

use crate::error::ExportError;

/// Body of a report template: paragraphs and tables in document order.
///
/// Paragraphs, cells, rows and tables remember the DOCX element they were read
/// from, so anything the model does not cover (properties, images, bookmarks)
/// is written back unchanged unless its text was rewritten.
#[derive(Debug, Clone, Default)]
pub struct TemplateDocument {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    /// Body elements outside the paragraph/table model, kept verbatim.
    Other(Box<DocumentChild>),
}

/// A span of text with optional font overrides.
///
/// `None` keeps whatever formatting the template gave the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub font: Option<String>,
    pub size_pt: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    /// `w:line` value with rule `auto`; `None` leaves template spacing alone.
    pub line_spacing: Option<u16>,
    source: Option<docx_rs::Paragraph>,
    rewritten: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<Row>,
    source: Option<docx_rs::Table>,
}

#[derive(Debug, Clone, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
    source: Option<docx_rs::TableRow>,
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub paragraphs: Vec<Paragraph>,
    source: Option<docx_rs::TableCell>,
    rewritten: bool,
}

impl TemplateDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Plain text rendering: one block per non-blank paragraph, table rows as
    /// `cell | cell`, blocks separated by a blank line.
    pub fn plain_text(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(paragraph) => {
                    let text = paragraph.text();
                    if !text.trim().is_empty() {
                        out.push(text);
                    }
                }
                Block::Table(table) => {
                    let rows: Vec<String> = table
                        .rows
                        .iter()
                        .map(|row| {
                            row.cells
                                .iter()
                                .map(|cell| cell.text().replace('\n', " "))
                                .collect::<Vec<_>>()
                                .join(" | ")
                        })
                        .collect();
                    if !rows.is_empty() {
                        out.push(rows.join("\n"));
                    }
                }
                Block::Other(_) => {}
            }
        }
        out.join("\n\n")
    }

    /// Serialize into a fresh DOCX package.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>, ExportError> {
        DocxPackage::new().write(self)
    }

    fn from_children(children: &[DocumentChild]) -> Self {
        let blocks = children
            .iter()
            .map(|child| match child {
                DocumentChild::Paragraph(paragraph) => {
                    Block::Paragraph(Paragraph::from_docx(paragraph))
                }
                DocumentChild::Table(table) => Block::Table(Table::from_docx(table)),
                other => Block::Other(Box::new(other.clone())),
            })
            .collect();
        Self { blocks }
    }

    fn to_children(&self) -> Vec<DocumentChild> {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(paragraph) => DocumentChild::Paragraph(Box::new(paragraph.to_docx())),
                Block::Table(table) => DocumentChild::Table(Box::new(table.to_docx())),
                Block::Other(child) => (**child).clone(),
            })
            .collect()
    }
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            size_pt: None,
        }
    }

    pub fn styled(text: impl Into<String>, font: &str, size_pt: usize) -> Self {
        Self {
            text: text.into(),
            font: Some(font.to_string()),
            size_pt: Some(size_pt),
        }
    }

    fn from_docx(run: &docx_rs::Run) -> Self {
        let mut text = String::new();
        for child in &run.children {
            match child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
        Self::new(text)
    }

    /// `\n` becomes a line break and `\t` a tab, as Word stores them.
    fn to_docx(&self) -> docx_rs::Run {
        let mut run = docx_rs::Run::new();
        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            for (j, piece) in line.split('\t').enumerate() {
                if j > 0 {
                    run = run.add_tab();
                }
                if !piece.is_empty() {
                    run = run.add_text(piece);
                }
            }
        }
        if let Some(font) = &self.font {
            run = run.fonts(RunFonts::new().ascii(font.as_str()).hi_ansi(font.as_str()));
        }
        if let Some(size) = self.size_pt {
            run = run.size(size * 2); // OOXML uses half-points
        }
        run
    }
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Run::new(text)])
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Replace the paragraph content with `runs`, dropping everything else
    /// the template had inside it. Paragraph properties are kept.
    pub fn rewrite(&mut self, runs: Vec<Run>) {
        self.runs = runs;
        self.rewritten = true;
    }

    pub fn is_rewritten(&self) -> bool {
        self.rewritten
    }

    fn from_docx(paragraph: &docx_rs::Paragraph) -> Self {
        let runs = paragraph
            .children
            .iter()
            .filter_map(|child| match child {
                ParagraphChild::Run(run) => Some(Run::from_docx(run)),
                _ => None,
            })
            .collect();
        Self {
            runs,
            line_spacing: None,
            source: Some(paragraph.clone()),
            rewritten: false,
        }
    }

    fn to_docx(&self) -> docx_rs::Paragraph {
        let mut paragraph = match (&self.source, self.rewritten) {
            (Some(source), false) => source.clone(),
            (source, _) => {
                let mut paragraph = source.clone().unwrap_or_else(docx_rs::Paragraph::new);
                paragraph.children = self
                    .runs
                    .iter()
                    .map(|run| ParagraphChild::Run(Box::new(run.to_docx())))
                    .collect();
                paragraph
            }
        };
        // Only w:line and w:lineRule change; before/after spacing stays.
        if let Some(line) = self.line_spacing {
            let spacing = paragraph
                .property
                .line_spacing
                .clone()
                .unwrap_or_else(LineSpacing::new)
                .line(line.into())
                .line_rule(LineSpacingType::Auto);
            paragraph = paragraph.line_spacing(spacing);
        }
        paragraph
    }
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows, source: None }
    }

    fn from_docx(table: &docx_rs::Table) -> Self {
        let rows = table
            .rows
            .iter()
            .filter_map(|child| match child {
                TableChild::TableRow(row) => Some(Row::from_docx(row)),
                #[allow(unreachable_patterns)]
                _ => None,
            })
            .collect();
        Self {
            rows,
            source: Some(table.clone()),
        }
    }

    fn to_docx(&self) -> docx_rs::Table {
        let rows: Vec<docx_rs::TableRow> = self.rows.iter().map(Row::to_docx).collect();
        match &self.source {
            Some(source) => {
                let mut table = source.clone();
                table.rows = rows.into_iter().map(TableChild::TableRow).collect();
                table
            }
            None => docx_rs::Table::new(rows),
        }
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, source: None }
    }

    fn from_docx(row: &docx_rs::TableRow) -> Self {
        let cells = row
            .cells
            .iter()
            .filter_map(|child| match child {
                TableRowChild::TableCell(cell) => Some(Cell::from_docx(cell)),
                #[allow(unreachable_patterns)]
                _ => None,
            })
            .collect();
        Self {
            cells,
            source: Some(row.clone()),
        }
    }

    fn to_docx(&self) -> docx_rs::TableRow {
        let cells: Vec<docx_rs::TableCell> = self.cells.iter().map(Cell::to_docx).collect();
        match &self.source {
            Some(source) => {
                let mut row = source.clone();
                row.cells = cells.into_iter().map(TableRowChild::TableCell).collect();
                row
            }
            None => docx_rs::TableRow::new(cells),
        }
    }
}

impl Cell {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            ..Self::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Paragraph::from_text(text)])
    }

    /// Paragraph texts joined with `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace all cell content with `paragraphs`. Cell properties are kept.
    pub fn rewrite(&mut self, paragraphs: Vec<Paragraph>) {
        self.paragraphs = paragraphs;
        self.rewritten = true;
    }

    pub fn is_rewritten(&self) -> bool {
        self.rewritten
    }

    fn from_docx(cell: &docx_rs::TableCell) -> Self {
        let paragraphs = cell
            .children
            .iter()
            .filter_map(|content| match content {
                TableCellContent::Paragraph(paragraph) => Some(Paragraph::from_docx(paragraph)),
                _ => None,
            })
            .collect();
        Self {
            paragraphs,
            source: Some(cell.clone()),
            rewritten: false,
        }
    }

    fn to_docx(&self) -> docx_rs::TableCell {
        match (&self.source, self.rewritten) {
            (Some(source), false) => source.clone(),
            (source, _) => {
                let mut cell = source.clone().unwrap_or_else(docx_rs::TableCell::new);
                cell.children = self
                    .paragraphs
                    .iter()
                    .map(|paragraph| TableCellContent::Paragraph(paragraph.to_docx()))
                    .collect();
                cell
            }
        }
    }
}

/// A DOCX package whose body can be swapped for a substituted one.
///
/// Styles, numbering, headers and media of the loaded package are written back
/// as they were read.
pub struct DocxPackage {
    docx: Docx,
}

impl DocxPackage {
    pub fn new() -> Self {
        Self { docx: Docx::new() }
    }

    pub fn read(bytes: &[u8]) -> Result<Self, ExportError> {
        let docx = docx_rs::read_docx(bytes)?;
        Ok(Self { docx })
    }

    pub fn body(&self) -> TemplateDocument {
        TemplateDocument::from_children(&self.docx.document.children)
    }

    pub fn write(mut self, body: &TemplateDocument) -> Result<Vec<u8>, ExportError> {
        self.docx.document.children = body.to_children();

        let mut buf = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut buf)
            .map_err(|e| ExportError::Docx(e.to_string()))?;

        Ok(buf.into_inner())
    }
}

impl Default for DocxPackage {
    fn default() -> Self {
        Self::new()
    }
}
