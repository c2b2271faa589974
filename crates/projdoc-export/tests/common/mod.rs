#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use projdoc_core::models::student::StudentEntry;
use projdoc_core::models::submission::{Gender, IndustryContact, ProjectSubmission, ProjectType};

/// A DOCX with one paragraph per entry of `paragraphs`, then a one-row table
/// holding `cells` (skipped when empty).
pub fn template_bytes(paragraphs: &[&str], cells: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    if !cells.is_empty() {
        let row = TableRow::new(
            cells
                .iter()
                .map(|text| {
                    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
                })
                .collect(),
        );
        docx = docx.add_table(Table::new(vec![row]));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).expect("pack fixture docx");
    buf.into_inner()
}

pub const INTERNAL_TEMPLATE: &[&str] = &[
    "",
    "",
    "<PROJECT_NAME>",
    "A PROJECT REPORT",
    "Submitted by",
    "<STUDENT_DETAILS>",
    "in partial fulfilment for the award of the degree of",
    "<DEGREE>",
    "in",
    "<DEPARTMENT>",
    "Certified that this report is the bonafide work of <STUDENT_DETAILS> who carried out the work under <SUPERVISOR_PRONOUN> supervision.",
];

pub const EXTERNAL_TEMPLATE: &[&str] = &[
    "<PROJECT_NAME>",
    "Carried out at <INDUSTRY_NAME> under <INDUSTRY_PERSON_NAME>, <INDUSTRY_PERSON_POSITION>, and <INDUSTRY_PERSON_PRONOUN> team.",
];

pub const SIGNATURE_CELLS: &[&str] = &[
    "<HOD_NAME>, HEAD OF THE DEPARTMENT",
    "<SUPERVISOR_NAME>, <DESIGNATION>, <DEPARTMENT_1>",
];

/// Write both report templates into `dir` under their standard names.
pub fn write_templates(dir: &Path) {
    std::fs::write(
        dir.join(ProjectType::Internal.template_file_name()),
        template_bytes(INTERNAL_TEMPLATE, SIGNATURE_CELLS),
    )
    .expect("write internal template");
    std::fs::write(
        dir.join(ProjectType::External.template_file_name()),
        template_bytes(EXTERNAL_TEMPLATE, SIGNATURE_CELLS),
    )
    .expect("write external template");
}

pub fn submission(project_type: ProjectType) -> ProjectSubmission {
    ProjectSubmission {
        project_type,
        project_name: "Smart Irrigation".to_string(),
        students: vec![
            StudentEntry::new("Alice", "R100"),
            StudentEntry::new("Bob", "R200"),
            StudentEntry::new("", ""),
        ],
        degree: "BACHELOR OF ENGINEERING".to_string(),
        department: "COMPUTER SCIENCE AND ENGINEERING".to_string(),
        hod_name: "Dr. Rao".to_string(),
        hod_gender: Gender::Female,
        supervisor_name: "Dr. Iyer".to_string(),
        supervisor_gender: Gender::Male,
        supervisor_designation: "Professor".to_string(),
        supervisor_department: "Computer Science and Engineering".to_string(),
        industry: Some(IndustryContact {
            industry_name: "Acme Pumps".to_string(),
            person_name: "Meera".to_string(),
            person_position: "CTO".to_string(),
            person_gender: Gender::Female,
        }),
    }
}
