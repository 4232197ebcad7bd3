//! Reading token sequences from text and writing labeled sequences back.
//!
//! Two formats are supported:
//! - `conll`: one token per line as `text<TAB>pos`, blank line between
//!   sentences, `#` comment lines (a `#` line with a tab is a token). Output appends the label as a third column.
//! - `jsonl`: one sentence per line, a JSON array of `{"text", "pos"}`
//!   objects. Output is one object per sentence with `tokens` and `spans`.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::NumtagError;
use crate::spans::{spans, EntitySpan};
use crate::token::Token;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Tab-separated `text pos`, one token per line
    #[default]
    Conll,
    /// One JSON array of tokens per line
    Jsonl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated `text pos label`, one token per line
    #[default]
    Conll,
    /// One JSON object with tokens and spans per line
    Jsonl,
}

#[derive(Debug, Deserialize)]
struct InputToken {
    text: String,
    pos: String,
}

#[derive(Debug, Serialize)]
struct OutputToken<'a> {
    text: &'a str,
    pos: &'a str,
    label: &'a str,
}

#[derive(Debug, Serialize)]
struct OutputSentence<'a> {
    tokens: Vec<OutputToken<'a>>,
    spans: Vec<EntitySpan>,
}

/// Read every sentence from `reader`. Empty sentences are dropped.
pub fn read_sentences<R: BufRead>(
    reader: R,
    format: InputFormat,
) -> Result<Vec<Vec<Token>>, NumtagError> {
    match format {
        InputFormat::Conll => read_conll(reader),
        InputFormat::Jsonl => read_jsonl(reader),
    }
}

fn read_conll<R: BufRead>(reader: R) -> Result<Vec<Vec<Token>>, NumtagError> {
    let mut sentences = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') && !line.contains('\t') {
            continue;
        }

        let mut columns = line.split('\t');
        let text = columns.next().unwrap_or_default();
        let pos = columns
            .next()
            .ok_or_else(|| NumtagError::parse(idx + 1, "expected `text<TAB>pos`"))?;
        if text.is_empty() {
            return Err(NumtagError::parse(idx + 1, "empty token text"));
        }

        let position = current.len();
        current.push(Token::new(text, pos, position));
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    Ok(sentences)
}

fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<Vec<Token>>, NumtagError> {
    let mut sentences = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: Vec<InputToken> = serde_json::from_str(&line)
            .map_err(|e| NumtagError::parse(idx + 1, e.to_string()))?;
        if parsed.is_empty() {
            continue;
        }
        let sentence = parsed
            .into_iter()
            .enumerate()
            .map(|(i, t)| Token::new(t.text, t.pos, i))
            .collect();
        sentences.push(sentence);
    }

    Ok(sentences)
}

/// Write labeled sentences, rendering background tokens as `background`.
pub fn write_sentences<W: Write>(
    mut writer: W,
    sentences: &[Vec<Token>],
    format: OutputFormat,
    background: &str,
) -> Result<(), NumtagError> {
    match format {
        OutputFormat::Conll => {
            for (n, sentence) in sentences.iter().enumerate() {
                if n > 0 {
                    writeln!(writer)?;
                }
                for token in sentence {
                    writeln!(
                        writer,
                        "{}\t{}\t{}",
                        token.text,
                        token.pos,
                        token.category.label(background)
                    )?;
                }
            }
        }
        OutputFormat::Jsonl => {
            for sentence in sentences {
                let out = OutputSentence {
                    tokens: sentence
                        .iter()
                        .map(|t| OutputToken {
                            text: &t.text,
                            pos: &t.pos,
                            label: t.category.label(background),
                        })
                        .collect(),
                    spans: spans(sentence),
                };
                serde_json::to_writer(&mut writer, &out)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Category;

    #[test]
    fn test_read_conll_sentences() {
        let input = "# comment\nmarch\tNNP\n3\tCD\textra\n\n\n5\tCD\ndollars\tNNS\n";
        let sentences = read_sentences(input.as_bytes(), InputFormat::Conll).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0][1].text, "3");
        assert_eq!(sentences[0][1].pos, "CD");
        assert_eq!(sentences[1][1].position, 1);
    }

    #[test]
    fn test_read_conll_hash_token_is_kept() {
        let input = "# prices\nit\tPRP\ncost\tVBD\n#\t#\n20\tCD\n#hashtag\tNN\n";
        let sentences = read_sentences(input.as_bytes(), InputFormat::Conll).unwrap();
        assert_eq!(sentences.len(), 1);
        let texts: Vec<&str> = sentences[0].iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["it", "cost", "#", "20", "#hashtag"]);
        assert_eq!(sentences[0][2].pos, "#");
        assert_eq!(sentences[0][3].position, 3);
    }

    #[test]
    fn test_read_conll_missing_tab() {
        let input = "march\tNNP\n3 CD\n";
        match read_sentences(input.as_bytes(), InputFormat::Conll) {
            Err(NumtagError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_jsonl() {
        let input = "[{\"text\":\"3\",\"pos\":\"CD\"},{\"text\":\"dollars\",\"pos\":\"NNS\"}]\n\n[]\n";
        let sentences = read_sentences(input.as_bytes(), InputFormat::Jsonl).unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0][1].text, "dollars");
    }

    #[test]
    fn test_read_jsonl_bad_line() {
        let input = "[{\"text\":\"3\"}]\n";
        assert!(matches!(
            read_sentences(input.as_bytes(), InputFormat::Jsonl),
            Err(NumtagError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_conll_uses_background() {
        let mut tokens = vec![Token::new("on", "IN", 0), Token::new("3", "CD", 1)];
        tokens[1].category = Category::Number;
        let mut out = Vec::new();
        write_sentences(&mut out, &[tokens], OutputFormat::Conll, "none").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "on\tIN\tnone\n3\tCD\tNUMBER\n");
    }

    #[test]
    fn test_write_jsonl_includes_spans() {
        let mut tokens = vec![Token::new("3", "CD", 0), Token::new("dollars", "NNS", 1)];
        tokens[0].category = Category::Money;
        tokens[1].category = Category::Money;
        let mut out = Vec::new();
        write_sentences(&mut out, &[tokens], OutputFormat::Jsonl, "O").unwrap();

        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["tokens"][1]["label"], "MONEY");
        assert_eq!(value["spans"][0]["text"], "3 dollars");
        assert_eq!(value["spans"][0]["category"], "MONEY");
    }
}
