//! Replacement table loader
//!
//! Reads delimiter-separated tables: the first row names the columns, the
//! first column holds the pattern, and a `replacement` column is required.
//! Rows whose first cell is blank or starts with `#` are comments.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::TableError;
use crate::table::{ReplacementRule, ReplacementTable};

/// Name of the required replacement column
pub const REPLACEMENT_COLUMN: &str = "replacement";

/// Loader for delimiter-separated replacement tables
#[derive(Debug, Clone, Copy)]
pub struct TableLoader {
    delimiter: char,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self { delimiter: '\t' }
    }
}

impl TableLoader {
    /// Create a loader for tab-separated tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field delimiter (e.g. `,` for exported spreadsheets)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a table from a file
    pub fn from_file(&self, path: &Path) -> Result<ReplacementTable, TableError> {
        let content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = self.from_str(&content)?;
        log::info!(
            "Loaded {} replacement rules from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load a table from a reader
    pub fn from_reader<R: Read>(&self, mut reader: R) -> Result<ReplacementTable, TableError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| TableError::Io {
                path: "<stream>".into(),
                source,
            })?;
        self.from_str(&content)
    }

    /// Load a table from text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, content: &str) -> Result<ReplacementTable, TableError> {
        let mut rows = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate();

        let header = loop {
            match rows.next() {
                Some((_, line)) if line.trim().is_empty() => continue,
                Some((_, line)) => break split_fields(line, self.delimiter),
                None => return Err(TableError::MissingHeader),
            }
        };

        let replacement_index = header
            .iter()
            .position(|name| name.trim() == REPLACEMENT_COLUMN)
            .filter(|&index| index > 0)
            .ok_or_else(|| TableError::MissingColumn(REPLACEMENT_COLUMN.to_string()))?;

        let mut table = ReplacementTable::new();
        for (index, line) in rows {
            let fields = split_fields(line, self.delimiter);
            let key = fields.first().map(String::as_str).unwrap_or("");
            if key.trim().is_empty() || key.starts_with('#') {
                continue;
            }

            let row = index + 1;
            if fields.len() > header.len() {
                return Err(TableError::MalformedRow {
                    row,
                    reason: format!(
                        "{} fields, but the header names {} columns",
                        fields.len(),
                        header.len()
                    ),
                });
            }
            let replacement =
                fields
                    .get(replacement_index)
                    .ok_or_else(|| TableError::MalformedRow {
                        row,
                        reason: format!("no value in the '{REPLACEMENT_COLUMN}' column"),
                    })?;

            let attributes: BTreeMap<String, String> = header
                .iter()
                .zip(fields.iter())
                .enumerate()
                .skip(1)
                .filter(|(i, _)| *i != replacement_index)
                .map(|(_, (name, value))| (name.trim().to_string(), value.clone()))
                .collect();

            let rule = ReplacementRule::new(key, replacement.as_str())?.with_attributes(attributes);
            table.push(rule);
        }

        Ok(table)
    }
}

/// Split one row into fields, honouring double-quoted fields
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;
    let mut at_field_start = true;

    while let Some(ch) = chars.next() {
        if quoted {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == '"' && at_field_start {
            quoted = true;
            at_field_start = false;
        } else if ch == delimiter {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
        } else {
            field.push(ch);
            at_field_start = false;
        }
    }
    fields.push(field);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TABLE: &str = "pattern\treplacement\tnote\n\
                         # expansions of nomina sacra\n\
                         dns\tdominus\tnomen sacrum\n\
                         \t\t\n\
                         q;\tque\tenclitic\n";

    #[test]
    fn test_load_tab_separated() {
        let table = TableLoader::new().from_str(TABLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].pattern(), "dns");
        assert_eq!(table.rules()[0].replacement(), "dominus");
        assert_eq!(table.rules()[0].attribute("note"), Some("nomen sacrum"));
        assert_eq!(table.rules()[1].replacement(), "que");
    }

    #[test]
    fn test_load_comma_separated_with_quotes() {
        let content = "key,replacement\n\"a{1,2}\",\"x, y\"\n\"say \"\"hi\"\"\",hi\n";
        let table = TableLoader::new().delimiter(',').from_str(content).unwrap();
        assert_eq!(table.rules()[0].pattern(), "a{1,2}");
        assert_eq!(table.rules()[0].replacement(), "x, y");
        assert_eq!(table.rules()[1].pattern(), "say \"hi\"");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "pattern\treplacement\r\ndns\tdominus\r\n";
        let table = TableLoader::new().from_str(content).unwrap();
        assert_eq!(table.rules()[0].replacement(), "dominus");
    }

    #[test]
    fn test_missing_header() {
        let result = TableLoader::new().from_str("\n\n");
        assert!(matches!(result, Err(TableError::MissingHeader)));
    }

    #[test]
    fn test_missing_replacement_column() {
        let result = TableLoader::new().from_str("pattern\texpansion\ndns\tdominus\n");
        assert!(matches!(result, Err(TableError::MissingColumn(_))));
    }

    #[test]
    fn test_row_wider_than_header() {
        let result = TableLoader::new().from_str("pattern\treplacement\ndns\tdominus\textra\n");
        match result {
            Err(TableError::MalformedRow { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_row_without_replacement() {
        let result = TableLoader::new().from_str("pattern\treplacement\ndns\n");
        assert!(matches!(result, Err(TableError::MalformedRow { .. })));
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let result = TableLoader::new().from_str("pattern\treplacement\n(dns\tdominus\n");
        match result {
            Err(TableError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(dns"),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{TABLE}").unwrap();

        let table = TableLoader::new().from_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_file_not_found() {
        let result = TableLoader::new().from_file(Path::new("/nonexistent/table.tsv"));
        assert!(matches!(result, Err(TableError::Io { .. })));
    }
}
