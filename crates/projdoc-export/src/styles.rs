use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use projdoc_core::models::token::Token;

/// 1.5 line spacing, in 240ths of a line (`w:line` with rule `auto`).
pub const ONE_AND_A_HALF_LINES: u16 = 360;

/// Font rules reapplied to text that received a substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDirective {
    /// Font for substituted runs (e.g. "Times New Roman").
    pub font: String,

    /// Size in points for tokens without an entry in `sizes`.
    pub default_size: usize,

    /// Per-token size in points.
    #[serde(default)]
    pub sizes: BTreeMap<Token, usize>,

    /// Line spacing set on every top-level paragraph.
    pub line_spacing: u16,
}

impl StyleDirective {
    /// The size table shipped with both report templates.
    pub fn reference() -> Self {
        let sizes = [
            (Token::ProjectName, 18),
            (Token::StudentDetails, 14),
            (Token::Student1, 16),
            (Token::RegNo1, 16),
            (Token::Student2, 16),
            (Token::RegNo2, 16),
            (Token::Student3, 16),
            (Token::RegNo3, 16),
            (Token::Student4, 16),
            (Token::RegNo4, 16),
            (Token::Degree, 16),
            (Token::Department, 14),
            (Token::HodName, 14),
            (Token::SupervisorName, 14),
            (Token::Designation, 14),
            (Token::Department1, 14),
            (Token::IndustryPersonName, 14),
            (Token::IndustryPersonPosition, 14),
            (Token::IndustryPersonPronoun, 14),
        ]
        .into_iter()
        .collect();

        Self {
            font: "Times New Roman".to_string(),
            default_size: 14,
            sizes,
            line_spacing: ONE_AND_A_HALF_LINES,
        }
    }

    pub fn size_for(&self, token: Token) -> usize {
        self.sizes.get(&token).copied().unwrap_or(self.default_size)
    }

    /// Copy of this directive with `overrides` layered over the size table.
    pub fn with_sizes(mut self, overrides: &BTreeMap<Token, usize>) -> Self {
        self.sizes
            .extend(overrides.iter().map(|(token, size)| (*token, *size)));
        self
    }
}

impl Default for StyleDirective {
    fn default() -> Self {
        Self::reference()
    }
}
