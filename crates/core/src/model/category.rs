use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── CATEGORY ID ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown interview category: {0}")]
pub struct CategoryParseError(pub String);

/// The fixed set of interview categories.
///
/// Adding a variant means adding a matching entry to the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Behavioral,
    Technical,
    Hr,
    Case,
}

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Behavioral,
        CategoryId::Technical,
        CategoryId::Hr,
        CategoryId::Case,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Behavioral => "behavioral",
            CategoryId::Technical => "technical",
            CategoryId::Hr => "hr",
            CategoryId::Case => "case",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single interview prompt with its advice bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: &'static str,
    tips: &'static [&'static str],
}

impl Question {
    #[must_use]
    pub const fn new(id: u32, prompt: &'static str, tips: &'static [&'static str]) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt,
            tips,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    #[must_use]
    pub fn tips(&self) -> &'static [&'static str] {
        self.tips
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Static grouping of questions shown as one interview type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: &'static str,
    icon: &'static str,
    questions: &'static [Question],
}

impl Category {
    #[must_use]
    pub const fn new(
        id: CategoryId,
        name: &'static str,
        icon: &'static str,
        questions: &'static [Question],
    ) -> Self {
        Self {
            id,
            name,
            icon,
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    #[must_use]
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip_through_strings() {
        for id in CategoryId::ALL {
            assert_eq!(id.as_str().parse::<CategoryId>().unwrap(), id);
        }
        let err = "sales".parse::<CategoryId>().unwrap_err();
        assert_eq!(err, CategoryParseError("sales".into()));
    }

    #[test]
    fn category_id_serializes_lowercase() {
        let json = serde_json::to_string(&CategoryId::Hr).unwrap();
        assert_eq!(json, "\"hr\"");
    }
}
