use crate::config::HEADER_SCAN_LINES;

use super::columns::fold_key;

/// Keyword test a header row must satisfy: every group must have at least
/// one keyword present somewhere in the line.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    pub all_of: &'static [&'static [&'static str]],
    pub fallback_row: usize,
}

impl HeaderRule {
    pub fn matches(&self, line: &str) -> bool {
        let folded = fold_key(line);
        self.all_of
            .iter()
            .all(|group| group.iter().any(|kw| folded.contains(kw)))
    }
}

/// Index of the first line within the scan window that satisfies `rule`,
/// or the rule's fallback row.
pub fn locate_header(lines: &[&str], rule: &HeaderRule) -> usize {
    lines
        .iter()
        .take(HEADER_SCAN_LINES)
        .position(|line| rule.matches(line))
        .unwrap_or(rule.fallback_row)
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
