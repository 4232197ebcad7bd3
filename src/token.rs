//! Token and category types shared by the tagger and its callers.

use serde::{Deserialize, Serialize};

/// Semantic category assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Number,
    Date,
    Time,
    Money,
    Ordinal,
    /// No category. Rendered with the configured background symbol.
    #[default]
    Background,
}

impl Category {
    /// Every category the tagger can produce.
    pub const ALL: [Category; 6] = [
        Category::Number,
        Category::Date,
        Category::Time,
        Category::Money,
        Category::Ordinal,
        Category::Background,
    ];

    /// Label for the entity categories, `None` for background.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Category::Number => Some("NUMBER"),
            Category::Date => Some("DATE"),
            Category::Time => Some("TIME"),
            Category::Money => Some("MONEY"),
            Category::Ordinal => Some("ORDINAL"),
            Category::Background => None,
        }
    }

    /// Label with background rendered as `background`.
    pub fn label<'a>(&self, background: &'a str) -> &'a str {
        self.as_str().unwrap_or(background)
    }

    pub fn is_background(&self) -> bool {
        matches!(self, Category::Background)
    }
}

/// A single token of an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as produced by the tokenizer.
    pub text: String,
    /// Part-of-speech tag. Digit-only tokens are retagged numeric before tagging.
    pub pos: String,
    #[serde(default)]
    pub category: Category,
    /// Index within the sentence.
    #[serde(default)]
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            category: Category::Background,
            position,
        }
    }
}

/// Build a sentence from `(text, pos)` pairs, numbering positions in order.
pub fn sentence<'a, I>(pairs: I) -> Vec<Token>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (text, pos))| Token::new(text, pos, i))
        .collect()
}
