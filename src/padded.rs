//! Bounds-safe view over a sentence with virtual boundary tokens.
//!
//! Rules look up to two tokens either side of the current one. Offsets that
//! fall outside the sentence resolve to a sentinel with empty text, empty tag
//! and no category, so rules never need their own bounds checks. Sentinels
//! are never stored and can never be written.

use crate::config::{PosClass, Tagset};
use crate::token::{Category, Token};

pub struct Padded<'a> {
    tokens: &'a mut [Token],
    tagset: &'a Tagset,
}

impl<'a> Padded<'a> {
    pub fn new(tokens: &'a mut [Token], tagset: &'a Tagset) -> Self {
        Self { tokens, tagset }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn get(&self, i: isize) -> Option<&Token> {
        usize::try_from(i).ok().and_then(|i| self.tokens.get(i))
    }

    pub fn text(&self, i: isize) -> &str {
        self.get(i).map(|t| t.text.as_str()).unwrap_or("")
    }

    pub fn pos(&self, i: isize) -> &str {
        self.get(i).map(|t| t.pos.as_str()).unwrap_or("")
    }

    pub fn pos_class(&self, i: isize) -> PosClass {
        self.tagset.classify(self.pos(i))
    }

    pub fn category(&self, i: isize) -> Category {
        self.get(i).map(|t| t.category).unwrap_or(Category::Background)
    }

    pub fn is(&self, i: isize, category: Category) -> bool {
        self.category(i) == category
    }

    /// Overwrite the category at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is a sentinel position. No rule writes outside the
    /// sentence; reaching this is a bug in the rule table.
    pub fn set(&mut self, i: isize, category: Category) {
        let len = self.tokens.len();
        let token = usize::try_from(i)
            .ok()
            .and_then(|idx| self.tokens.get_mut(idx))
            .unwrap_or_else(|| panic!("write to sentinel position {} (len {})", i, len));
        token.category = category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::sentence;

    #[test]
    fn test_sentinels_outside_sentence() {
        let tags = Tagset::default();
        let mut tokens = sentence([("3", "CD")]);
        let seq = Padded::new(&mut tokens, &tags);

        for i in [-2, -1, 1, 2] {
            assert_eq!(seq.text(i), "");
            assert_eq!(seq.pos(i), "");
            assert_eq!(seq.category(i), Category::Background);
            assert_eq!(seq.pos_class(i), PosClass::Other);
        }
        assert_eq!(seq.text(0), "3");
        assert_eq!(seq.pos_class(0), PosClass::Numeric);
    }

    #[test]
    fn test_set_is_visible_to_later_reads() {
        let tags = Tagset::default();
        let mut tokens = sentence([("3", "CD"), ("dollars", "NNS")]);
        {
            let mut seq = Padded::new(&mut tokens, &tags);
            seq.set(0, Category::Number);
            assert!(seq.is(0, Category::Number));
            seq.set(0, Category::Money);
            assert!(seq.is(0, Category::Money));
        }
        assert_eq!(tokens[0].category, Category::Money);
    }

    #[test]
    #[should_panic(expected = "sentinel")]
    fn test_writing_sentinel_panics() {
        let tags = Tagset::default();
        let mut tokens = sentence([("3", "CD")]);
        let mut seq = Padded::new(&mut tokens, &tags);
        seq.set(-1, Category::Date);
    }
}
