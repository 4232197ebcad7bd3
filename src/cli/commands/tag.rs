//! Tagging command.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use numtag::{
    read_sentences, write_sentences, Config, InputFormat, NumberClassifier, OutputFormat,
};

/// Read sentences from `input` (or stdin), classify them, write to stdout.
pub fn cmd_tag(
    config: &Config,
    input: Option<&Path>,
    format: InputFormat,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let mut sentences = match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            read_sentences(BufReader::new(File::open(path)?), format)?
        }
        None => read_sentences(io::stdin().lock(), format)?,
    };

    let classifier = NumberClassifier::new(config.tagset.clone());
    classifier.classify_all(&mut sentences);

    let tokens: usize = sentences.iter().map(Vec::len).sum();
    tracing::info!("Tagged {} sentences ({} tokens)", sentences.len(), tokens);

    write_sentences(io::stdout().lock(), &sentences, output, &config.background)?;
    Ok(())
}
