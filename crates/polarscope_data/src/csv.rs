//! Line-oriented CSV splitting.
//!
//! This is deliberately not a full RFC 4180 reader. Records end at `\n`, so a
//! quoted field cannot span lines, and `""` inside quotes is not unescaped:
//! each `"` only toggles the quoted state and is dropped.

/// Split CSV text into record lines, skipping blank and whitespace-only lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Split one record line into trimmed fields.
///
/// Commas between a pair of `"` are literal. A line always yields at least
/// one field.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut within_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => within_quotes = !within_quotes,
            ',' if !within_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
