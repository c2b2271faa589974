use serde::{Deserialize, Serialize};

use super::field_set::FieldSet;
use super::student::{MAX_STUDENTS, StudentEntry, format_students};
use super::token::Token;
use crate::error::CoreError;

/// Selects which of the two report templates is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Internal,
    External,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Internal => "Internal Project",
            ProjectType::External => "External Project",
        }
    }

    /// File name of the template shipped for this project type.
    pub fn template_file_name(self) -> &'static str {
        match self {
            ProjectType::Internal => "UG Internal Project.docx",
            ProjectType::External => "UG External Project.docx",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Possessive pronoun used in the certificate wording.
    pub fn pronoun(self) -> &'static str {
        match self {
            Gender::Male => "his",
            Gender::Female => "her",
        }
    }
}

/// Industry liaison details, only used by external projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContact {
    #[serde(default)]
    pub industry_name: String,
    #[serde(default)]
    pub person_name: String,
    #[serde(default)]
    pub person_position: String,
    #[serde(default)]
    pub person_gender: Gender,
}

/// Everything collected by the intake form for one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    #[serde(default)]
    pub project_type: ProjectType,
    pub project_name: String,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub department: String,
    pub hod_name: String,
    #[serde(default)]
    pub hod_gender: Gender,
    pub supervisor_name: String,
    #[serde(default)]
    pub supervisor_gender: Gender,
    #[serde(default)]
    pub supervisor_designation: String,
    /// Department of the HoD and supervisor (`<DEPARTMENT_1>`).
    #[serde(default)]
    pub supervisor_department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<IndustryContact>,
}

impl ProjectSubmission {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("project_name", &self.project_name),
            ("hod_name", &self.hod_name),
            ("supervisor_name", &self.supervisor_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn require_fields(&self) -> Result<(), CoreError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingFields(missing))
        }
    }

    /// Build the token values for this submission.
    ///
    /// Student slots carry the raw form values; the formatted summary goes to
    /// `<STUDENT_DETAILS>`. Industry tokens are only set for external projects.
    pub fn to_field_set(&self) -> FieldSet {
        let students = &self.students[..self.students.len().min(MAX_STUDENTS)];
        let mut fields = FieldSet::new()
            .with(Token::ProjectName, self.project_name.as_str())
            .with(Token::StudentDetails, format_students(students))
            .with(Token::Degree, self.degree.as_str())
            .with(Token::Department, self.department.as_str())
            .with(Token::HodName, self.hod_name.as_str())
            .with(Token::SupervisorName, self.supervisor_name.as_str())
            .with(Token::Designation, self.supervisor_designation.as_str())
            .with(Token::Department1, self.supervisor_department.as_str())
            .with(Token::HodPronoun, self.hod_gender.pronoun())
            .with(Token::SupervisorPronoun, self.supervisor_gender.pronoun());

        for index in 0..MAX_STUDENTS {
            if let Some((name_token, reg_token)) = Token::student_slot(index) {
                let entry = self.students.get(index).cloned().unwrap_or_default();
                fields.insert(name_token, entry.name);
                fields.insert(reg_token, entry.registration);
            }
        }

        if self.project_type == ProjectType::External {
            let industry = self.industry.clone().unwrap_or_default();
            fields.insert(Token::IndustryName, industry.industry_name);
            fields.insert(Token::IndustryPersonName, industry.person_name);
            fields.insert(Token::IndustryPersonPosition, industry.person_position);
            fields.insert(Token::IndustryPersonPronoun, industry.person_gender.pronoun());
        }

        fields
    }
}
