//! Output formatting utilities

/// Format a list of configuration entries for display
pub fn format_entry_list(entries: &[(String, String)]) -> String {
    if entries.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut output = String::new();
    for (key, value) in entries {
        output.push_str(&format!("{} = {}\n", key, value));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        let entries = vec![];
        let output = format_entry_list(&entries);
        assert_eq!(output, "No entries found\n");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            ("editor".to_string(), "vim".to_string()),
            ("host".to_string(), "localhost".to_string()),
        ];

        let output = format_entry_list(&entries);
        assert_eq!(output, "editor = vim\nhost = localhost\n");
    }

    #[test]
    fn test_format_keeps_values_verbatim() {
        let entries = vec![("url".to_string(), "http://host/a=b".to_string())];

        let output = format_entry_list(&entries);
        assert_eq!(output, "url = http://host/a=b\n");
    }
}
