/// Uppercase `s`, trim it and fold the Spanish accented letters onto
/// their plain forms so `Código` and `CODIGO` compare equal.
pub fn fold_key(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| match c {
            'Á' | 'À' | 'Â' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

/// Index of the header cell matching one of `candidates`.
///
/// Every candidate is first tried as an exact (folded) match; only when none
/// matches exactly is each candidate, in order, tried as a substring.
pub fn find_column_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let folded: Vec<String> = headers.iter().map(|h| fold_key(h)).collect();
    let wanted: Vec<String> = candidates.iter().map(|c| fold_key(c)).collect();

    for name in &wanted {
        if let Some(idx) = folded.iter().position(|h| h == name) {
            return Some(idx);
        }
    }
    for name in wanted.iter().filter(|n| !n.is_empty()) {
        if let Some(idx) = folded.iter().position(|h| h.contains(name.as_str())) {
            return Some(idx);
        }
    }
    None
}

/// Trimmed cell at `idx`, `None` when the column is absent or the cell blank.
pub(crate) fn cell(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Raw cell at `idx` for value normalizers, which do their own cleanup.
pub(crate) fn raw_cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i)).map(String::as_str)
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
