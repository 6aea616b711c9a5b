//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod page_reader;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use page_reader::{page_identifier, parse_page, read_page};
