use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A placeholder token recognised in report templates.
///
/// Variants are declared in substitution order; the derived `Ord` is what
/// orders a [`FieldSet`](super::field_set::FieldSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Token {
    ProjectName,
    StudentDetails,
    Student1,
    RegNo1,
    Student2,
    RegNo2,
    Student3,
    RegNo3,
    Student4,
    RegNo4,
    Degree,
    Department,
    HodName,
    SupervisorName,
    Designation,
    Department1,
    HodPronoun,
    SupervisorPronoun,
    IndustryName,
    IndustryPersonName,
    IndustryPersonPosition,
    IndustryPersonPronoun,
}

impl Token {
    pub const ALL: [Token; 22] = [
        Token::ProjectName,
        Token::StudentDetails,
        Token::Student1,
        Token::RegNo1,
        Token::Student2,
        Token::RegNo2,
        Token::Student3,
        Token::RegNo3,
        Token::Student4,
        Token::RegNo4,
        Token::Degree,
        Token::Department,
        Token::HodName,
        Token::SupervisorName,
        Token::Designation,
        Token::Department1,
        Token::HodPronoun,
        Token::SupervisorPronoun,
        Token::IndustryName,
        Token::IndustryPersonName,
        Token::IndustryPersonPosition,
        Token::IndustryPersonPronoun,
    ];

    /// Bare token name, e.g. `PROJECT_NAME`.
    pub fn name(self) -> &'static str {
        match self {
            Token::ProjectName => "PROJECT_NAME",
            Token::StudentDetails => "STUDENT_DETAILS",
            Token::Student1 => "STUDENT_1",
            Token::RegNo1 => "REG_NO_1",
            Token::Student2 => "STUDENT_2",
            Token::RegNo2 => "REG_NO_2",
            Token::Student3 => "STUDENT_3",
            Token::RegNo3 => "REG_NO_3",
            Token::Student4 => "STUDENT_4",
            Token::RegNo4 => "REG_NO_4",
            Token::Degree => "DEGREE",
            Token::Department => "DEPARTMENT",
            Token::HodName => "HOD_NAME",
            Token::SupervisorName => "SUPERVISOR_NAME",
            Token::Designation => "DESIGNATION",
            Token::Department1 => "DEPARTMENT_1",
            Token::HodPronoun => "HOD_PRONOUN",
            Token::SupervisorPronoun => "SUPERVISOR_PRONOUN",
            Token::IndustryName => "INDUSTRY_NAME",
            Token::IndustryPersonName => "INDUSTRY_PERSON_NAME",
            Token::IndustryPersonPosition => "INDUSTRY_PERSON_POSITION",
            Token::IndustryPersonPronoun => "INDUSTRY_PERSON_PRONOUN",
        }
    }

    /// The literal text searched for in templates, e.g. `<PROJECT_NAME>`.
    pub fn placeholder(self) -> &'static str {
        match self {
            Token::ProjectName => "<PROJECT_NAME>",
            Token::StudentDetails => "<STUDENT_DETAILS>",
            Token::Student1 => "<STUDENT_1>",
            Token::RegNo1 => "<REG_NO_1>",
            Token::Student2 => "<STUDENT_2>",
            Token::RegNo2 => "<REG_NO_2>",
            Token::Student3 => "<STUDENT_3>",
            Token::RegNo3 => "<REG_NO_3>",
            Token::Student4 => "<STUDENT_4>",
            Token::RegNo4 => "<REG_NO_4>",
            Token::Degree => "<DEGREE>",
            Token::Department => "<DEPARTMENT>",
            Token::HodName => "<HOD_NAME>",
            Token::SupervisorName => "<SUPERVISOR_NAME>",
            Token::Designation => "<DESIGNATION>",
            Token::Department1 => "<DEPARTMENT_1>",
            Token::HodPronoun => "<HOD_PRONOUN>",
            Token::SupervisorPronoun => "<SUPERVISOR_PRONOUN>",
            Token::IndustryName => "<INDUSTRY_NAME>",
            Token::IndustryPersonName => "<INDUSTRY_PERSON_NAME>",
            Token::IndustryPersonPosition => "<INDUSTRY_PERSON_POSITION>",
            Token::IndustryPersonPronoun => "<INDUSTRY_PERSON_PRONOUN>",
        }
    }

    /// Student name and registration tokens for slot `index` (0-based).
    pub fn student_slot(index: usize) -> Option<(Token, Token)> {
        match index {
            0 => Some((Token::Student1, Token::RegNo1)),
            1 => Some((Token::Student2, Token::RegNo2)),
            2 => Some((Token::Student3, Token::RegNo3)),
            3 => Some((Token::Student4, Token::RegNo4)),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Accepts both `<PROJECT_NAME>` and `PROJECT_NAME`.
impl FromStr for Token {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(trimmed);

        Token::ALL
            .into_iter()
            .find(|token| token.name() == bare)
            .ok_or_else(|| CoreError::UnknownToken(s.to_string()))
    }
}

impl TryFrom<String> for Token {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.name().to_string()
    }
}
