use serde::{Deserialize, Serialize};

use projdoc_core::models::student::StudentEntry;
use projdoc_core::models::submission::{Gender, IndustryContact, ProjectSubmission, ProjectType};

/// Flat field layout posted by the HTML form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportForm {
    pub project_type: ProjectType,
    pub project_name: String,
    pub student_1: String,
    pub reg_no_1: String,
    pub student_2: String,
    pub reg_no_2: String,
    pub student_3: String,
    pub reg_no_3: String,
    pub student_4: String,
    pub reg_no_4: String,
    pub degree: String,
    pub department: String,
    pub hod_name: String,
    pub hod_gender: Gender,
    pub supervisor_name: String,
    pub supervisor_gender: Gender,
    pub supervisor_designation: String,
    pub supervisor_department: String,
    pub industry_name: String,
    pub industry_person_name: String,
    pub industry_person_position: String,
    pub industry_person_gender: Gender,
}

impl From<ReportForm> for ProjectSubmission {
    fn from(form: ReportForm) -> Self {
        let students = vec![
            StudentEntry::new(form.student_1, form.reg_no_1),
            StudentEntry::new(form.student_2, form.reg_no_2),
            StudentEntry::new(form.student_3, form.reg_no_3),
            StudentEntry::new(form.student_4, form.reg_no_4),
        ];

        let industry = (form.project_type == ProjectType::External).then(|| IndustryContact {
            industry_name: form.industry_name,
            person_name: form.industry_person_name,
            person_position: form.industry_person_position,
            person_gender: form.industry_person_gender,
        });

        ProjectSubmission {
            project_type: form.project_type,
            project_name: form.project_name,
            students,
            degree: form.degree,
            department: form.department,
            hod_name: form.hod_name,
            hod_gender: form.hod_gender,
            supervisor_name: form.supervisor_name,
            supervisor_gender: form.supervisor_gender,
            supervisor_designation: form.supervisor_designation,
            supervisor_department: form.supervisor_department,
            industry,
        }
    }
}
