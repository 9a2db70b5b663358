//! Flash card domain type and its wire form.
//!
//! `CardRecord` is what card providers hand over (parsed JSON, nothing
//! checked yet). `Card` is the validated, immutable form a deck holds.
//! Validation happens once, at the boundary, via `Card::try_from`.

use super::identifiers::{CardId, InvalidCardId};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Subject area of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// General knowledge questions.
    General,
    /// Programming questions, including the coding subcategories.
    Coding,
}

impl Category {
    /// Parse a category label, case-insensitively.
    ///
    /// Coding subcategories ("algorithms", "data structures", "programming")
    /// collapse into `Category::Coding`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "general" => Some(Category::General),
            "coding" | "algorithms" | "data structures" | "programming" => {
                Some(Category::Coding)
            }
            _ => None,
        }
    }

    /// Lowercase label used in config files and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Coding => "coding",
        }
    }

    /// Human-readable deck title.
    pub fn title(&self) -> &'static str {
        match self {
            Category::General => "General Knowledge",
            Category::Coding => "Coding",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional difficulty tag carried by some decks. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Easy.
    Easy,
    /// Medium.
    Medium,
    /// Hard.
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lowercase label, as shown on the card.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Card id as it appears on the wire: string or integer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCardId {
    /// A string id such as `"c1"`.
    Text(String),
    /// An integer id such as `3`.
    Number(i64),
}

impl RawCardId {
    fn into_string(self) -> String {
        match self {
            RawCardId::Text(s) => s,
            RawCardId::Number(n) => n.to_string(),
        }
    }
}

/// Unvalidated card as delivered by a card provider.
///
/// Every field is optional so that a missing field surfaces as a
/// `CardError` naming it, rather than as an opaque serde error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardRecord {
    /// Card identifier.
    #[serde(default)]
    pub id: Option<RawCardId>,
    /// Question text.
    #[serde(default)]
    pub question: Option<String>,
    /// Answer text.
    #[serde(default)]
    pub answer: Option<String>,
    /// Optional longer explanation of the answer.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Optional code snippet the question refers to.
    #[serde(default)]
    pub code: Option<String>,
    /// Category label, e.g. `"general"` or `"Algorithms"`.
    #[serde(default)]
    pub category: Option<String>,
    /// Optional difficulty label.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Optional free-form tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Reasons a `CardRecord` fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field is present but blank.
    #[error("field `{0}` is blank")]
    BlankField(&'static str),

    /// The id is not a valid card identifier.
    #[error("invalid id: {0}")]
    InvalidId(#[from] InvalidCardId),

    /// The category label maps to no known category.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    /// The difficulty label is not easy, medium or hard.
    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

/// A single question/answer unit. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    question: String,
    answer: String,
    explanation: Option<String>,
    code: Option<String>,
    category: Category,
    difficulty: Option<Difficulty>,
    tags: Vec<String>,
}

impl Card {
    /// Create a card with the required fields only.
    pub fn new(
        id: CardId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            explanation: None,
            code: None,
            category,
            difficulty: None,
            tags: Vec::new(),
        }
    }

    /// Attach an explanation; blank text is dropped.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = non_blank(Some(explanation.into()));
        self
    }

    /// Attach a code snippet; blank text is dropped.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = non_blank(Some(code.into()));
        self
    }

    /// Set the difficulty tag.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Unique identifier within the deck.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Explanation shown with the answer, if any.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Code snippet, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Category the card belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Difficulty tag, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Tags, possibly empty.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let raw_id = record.id.ok_or(CardError::MissingField("id"))?;
        let id = CardId::new(raw_id.into_string())?;
        let question = required(record.question, "question")?;
        let answer = required(record.answer, "answer")?;

        let raw_category = required(record.category, "category")?;
        let category = Category::parse(&raw_category)
            .ok_or_else(|| CardError::UnknownCategory(raw_category.clone()))?;

        let difficulty = match non_blank(record.difficulty) {
            Some(raw) => Some(
                Difficulty::parse(&raw).ok_or_else(|| CardError::UnknownDifficulty(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            id,
            question,
            answer,
            explanation: non_blank(record.explanation),
            code: non_blank(record.code),
            category,
            difficulty,
            tags: record.tags.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CardError> {
    let value = value.ok_or(CardError::MissingField(field))?;
    if value.trim().is_empty() {
        return Err(CardError::BlankField(field));
    }
    Ok(value)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
