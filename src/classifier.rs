//! Rule-based classifier for numeric entities.
//!
//! Marks NUMBER from part-of-speech tags, ORDINAL from word form, MONEY for
//! currency signs and words next to numbers, DATE for month/day/year
//! combinations and slash dates, and TIME for clock shapes, AM/PM markers and
//! "o'clock". Meant to run as a final correction pass after a statistical
//! tagger, so most cardinal numbers simply come out as NUMBER.

use tracing::{debug, trace};

use crate::config::Tagset;
use crate::padded::Padded;
use crate::patterns::is_digits;
use crate::rules;
use crate::token::{Category, Token};

/// Retag every digit-only token as a cardinal number, whatever the upstream
/// tagger said.
pub fn pretag(tokens: &mut [Token], tagset: &Tagset) {
    for token in tokens.iter_mut() {
        if is_digits(&token.text) && token.pos != tagset.numeric {
            trace!(text = %token.text, from = %token.pos, "retagging digits as numeric");
            token.pos = tagset.numeric.clone();
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberClassifier {
    tagset: Tagset,
}

impl NumberClassifier {
    pub fn new(tagset: Tagset) -> Self {
        Self { tagset }
    }

    /// Label every token in place and return the same slice.
    ///
    /// Runs the pre-tagger, then one forward pass over the rule table. Labels
    /// written at earlier positions may be overwritten by later ones; the
    /// values left when the pass ends are final.
    pub fn classify<'t>(&self, tokens: &'t mut [Token]) -> &'t mut [Token] {
        debug!(tokens = tokens.len(), "classifying sentence");
        pretag(tokens, &self.tagset);

        let mut seq = Padded::new(tokens, &self.tagset);
        for i in 0..seq.len() as isize {
            seq.set(i, Category::Background);
            match rules::apply(&mut seq, i) {
                Some(rule) => trace!(position = i, rule, category = ?seq.category(i), "rule fired"),
                None => trace!(position = i, "no rule"),
            }
        }

        tokens
    }

    /// Label a batch of sentences.
    pub fn classify_all(&self, sentences: &mut [Vec<Token>]) {
        for sentence in sentences.iter_mut() {
            self.classify(sentence);
        }
    }
}
