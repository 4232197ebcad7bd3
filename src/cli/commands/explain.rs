//! Pattern inspection command.

use console::style;

use numtag::patterns;

/// Print the lexical patterns each word matches.
pub fn cmd_explain(words: &[String]) -> anyhow::Result<()> {
    for word in words {
        let matches = patterns::matching(word);
        if matches.is_empty() {
            println!("{} {}", style("✗").red(), word);
            println!("  {} no pattern matches", style("→").dim());
        } else {
            println!("{} {}", style("✓").green(), style(word).bold());
            for name in matches {
                println!("  {} {}", style("→").dim(), name);
            }
        }
    }
    Ok(())
}
