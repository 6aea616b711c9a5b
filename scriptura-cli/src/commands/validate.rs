//! Validate command implementation

use anyhow::Result;
use clap::Args;
use scriptura_core::TableLoader;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Replacement table to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub table: PathBuf,

    /// Field delimiter of the table (default: tab)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating replacement table: {}", self.table.display());

        let loader = TableLoader::new().delimiter(self.delimiter.unwrap_or('\t'));
        match loader.from_file(&self.table) {
            Ok(table) => {
                println!("✓ Table is valid!");
                println!("  Rules: {}", table.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            table: PathBuf::from("abbreviations.tsv"),
            delimiter: Some(','),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("abbreviations.tsv"));
    }

    #[test]
    fn test_validate_valid_table() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "pattern\treplacement\ndns\tdominus\nq;\tque\n").unwrap();

        let args = ValidateArgs {
            table: temp_file.path().to_path_buf(),
            delimiter: None,
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_custom_delimiter() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "pattern,replacement\ndns,dominus\n").unwrap();

        let args = ValidateArgs {
            table: temp_file.path().to_path_buf(),
            delimiter: Some(','),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "pattern\treplacement\n(dns\tdominus\n").unwrap();

        let args = ValidateArgs {
            table: temp_file.path().to_path_buf(),
            delimiter: None,
        };

        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("(dns"));
    }
}
