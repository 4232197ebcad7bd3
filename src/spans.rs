//! Group labeled tokens into entity spans.

use serde::{Deserialize, Serialize};

use crate::token::{Category, Token};

/// A maximal run of consecutive tokens sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub category: Category,
    /// First token position.
    pub start: usize,
    /// One past the last token position.
    pub end: usize,
    pub text: String,
}

/// Collect spans for every non-background run. Adjacent runs of different
/// categories form separate spans.
pub fn spans(tokens: &[Token]) -> Vec<EntitySpan> {
    let mut out: Vec<EntitySpan> = Vec::new();
    let mut start = 0;

    while start < tokens.len() {
        let category = tokens[start].category;
        let end = tokens[start..]
            .iter()
            .position(|t| t.category != category)
            .map_or(tokens.len(), |n| start + n);

        if !category.is_background() {
            let text = tokens[start..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            out.push(EntitySpan {
                category,
                start,
                end,
                text,
            });
        }
        start = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::sentence;

    fn labeled(pairs: &[(&str, Category)]) -> Vec<Token> {
        let mut tokens = sentence(pairs.iter().map(|(text, _)| (*text, "X")));
        for (token, (_, category)) in tokens.iter_mut().zip(pairs) {
            token.category = *category;
        }
        tokens
    }

    #[test]
    fn test_runs_become_spans() {
        let tokens = labeled(&[
            ("on", Category::Background),
            ("march", Category::Date),
            ("3", Category::Date),
            ("at", Category::Background),
            ("5", Category::Time),
            ("pm", Category::Time),
        ]);
        let got = spans(&tokens);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].text, "march 3");
        assert_eq!((got[0].start, got[0].end), (1, 3));
        assert_eq!(got[1].category, Category::Time);
        assert_eq!((got[1].start, got[1].end), (4, 6));
    }

    #[test]
    fn test_adjacent_categories_split() {
        let tokens = labeled(&[("4", Category::Ordinal), ("5", Category::Number)]);
        let got = spans(&tokens);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].category, Category::Ordinal);
        assert_eq!(got[1].category, Category::Number);
    }

    #[test]
    fn test_no_spans_for_background() {
        let tokens = labeled(&[("hello", Category::Background)]);
        assert!(spans(&tokens).is_empty());
        assert!(spans(&[]).is_empty());
    }
}
