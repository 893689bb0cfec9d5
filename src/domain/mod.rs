//! Domain layer - Core business logic

pub mod line;

pub use line::{format_entry, parse_line, ParsedLine, ASSIGNER, SKIP_CHARS};
