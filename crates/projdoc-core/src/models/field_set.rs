use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::token::Token;

/// Token → replacement text for one report submission.
///
/// Iteration follows [`Token`] declaration order, which is the order the
/// substitution engine applies replacements in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    values: BTreeMap<Token, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `token` to `value`, returning the previous value if any.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> Option<String> {
        self.values.insert(token, value.into())
    }

    pub fn with(mut self, token: Token, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values.get(&token).map(String::as_str)
    }

    pub fn contains(&self, token: Token) -> bool {
        self.values.contains_key(&token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.values.iter().map(|(token, value)| (*token, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Token, String)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (Token, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
