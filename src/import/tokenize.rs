/// Split one line into fields.
///
/// Commas inside double quotes do not split; a doubled quote inside a quoted
/// field yields one literal quote. Quote characters themselves are dropped.
/// A trailing comma produces a trailing empty field.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Split decoded text into lines, accepting `\n`, `\r\n` and bare `\r`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .collect()
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
