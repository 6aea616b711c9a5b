//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Commented configuration template
const TEMPLATE: &str = r#"# Scriptura configuration
#
# Relative paths are resolved against the directory of this file.
# Command-line flags override the values given here.

[table]
# Replacement table: first row names the columns, first column is the
# pattern, a "replacement" column is required.
path = "abbreviations.tsv"
# Field delimiter
delimiter = "\t"

[dictionary]
# Hunspell .dic file, or a plain word list with one word per line
path = "la.dic"
# Hunspell .aff file; when omitted, la.aff next to la.dic is used if present
affix = "la.aff"

[normalizer]
# Appended to vowels whose macron could not be resolved
ambiguity_marker = "●"
# Words with more macrons are marked without searching (at most 32)
max_macrons = 12
# Join words split across lines
resolve_linebreaks = true

[output]
# text, json, markdown or words
default_format = "text"
show_identifiers = true
show_raw = false
pretty_json = true

[performance]
# Number of worker threads (0 = all available)
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [table] and [dictionary] at your resources");
        println!("2. Validate your replacement table:");
        println!("   scriptura validate --table abbreviations.tsv");
        println!("3. Use it for normalization:");
        println!(
            "   scriptura normalize -i 'pages/*.txt' --config {}",
            self.output.display()
        );

        Ok(())
    }
}
