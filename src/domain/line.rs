//! Assignment line parsing and rendering

/// Token separating a key from its value on an assignment line.
pub const ASSIGNER: char = '=';

/// Line-leading characters that mark a whole line as ignorable:
/// comments (`#`, `;`), section headers (`[`), blank and null-led lines.
pub const SKIP_CHARS: [char; 5] = ['#', '[', ';', '\n', '\0'];

/// Outcome of classifying a raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Comment, section header, or blank line; dropped without a diagnostic
    Ignored,
    /// A non-ignorable line with no assigner token; dropped with a diagnostic
    MissingAssigner,
    /// An assignment split at the first assigner
    Entry { key: &'a str, value: &'a str },
}

/// Classify a single line and split it at the first assigner.
///
/// Only the first character of the line decides whether it is skipped, so a
/// key starting with a skip character can never be stored. The value runs
/// from the first assigner to the end of the line verbatim, further assigner
/// characters included. Neither side is trimmed.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    match line.chars().next() {
        None => return ParsedLine::Ignored,
        Some(first) if SKIP_CHARS.contains(&first) => return ParsedLine::Ignored,
        Some(_) => {}
    }

    match line.find(ASSIGNER) {
        None => ParsedLine::MissingAssigner,
        Some(position) => ParsedLine::Entry {
            key: &line[..position],
            value: &line[position + ASSIGNER.len_utf8()..],
        },
    }
}

/// Render one entry as a `key=value` line with a trailing newline.
pub fn format_entry(key: &str, value: &str) -> String {
    format!("{}{}{}\n", key, ASSIGNER, value)
}
