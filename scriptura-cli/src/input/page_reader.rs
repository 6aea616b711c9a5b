//! Page files
//!
//! One file holds one manuscript page, one transcribed line per text line.
//! A line is either `identifier<TAB>text` or bare text; bare lines get
//! positional identifiers `l1`, `l2`, ... Empty text lines are ignored.

use anyhow::Result;
use scriptura_core::{RawLine, RawPage};
use std::path::Path;

use super::FileReader;

/// Page identifier derived from the file name (`pages/f1r.txt` → `f1r`)
pub fn page_identifier(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the content of a page file
pub fn parse_page(content: &str, identifier: impl Into<String>) -> RawPage {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| match line.split_once('\t') {
            Some((id, text)) if !id.trim().is_empty() => RawLine::new(id.trim(), text),
            _ => RawLine::new(format!("l{}", index + 1), line.trim_start_matches('\t')),
        })
        .collect();

    RawPage::new(lines).with_identifier(identifier)
}

/// Read and parse a page file
pub fn read_page(path: &Path) -> Result<RawPage> {
    let content = FileReader::read_text(path)?;
    let page = parse_page(&content, page_identifier(path));
    log::debug!("Read {} lines from {}", page.lines.len(), path.display());
    Ok(page)
}
