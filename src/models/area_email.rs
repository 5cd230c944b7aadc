use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaEmail {
    /// Uppercased area label.
    pub area: String,
    pub email: String,
}

/// Addresses to copy on an outbound order email: every area address, then
/// the ordering advisor. Duplicates (ignoring case) keep their first position.
pub fn cc_recipients(areas: &[AreaEmail], advisor_email: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let candidates = areas
        .iter()
        .map(|a| a.email.as_str())
        .chain(advisor_email);

    for email in candidates {
        let email = email.trim();
        if email.is_empty() {
            continue;
        }
        if out.iter().any(|e| e.eq_ignore_ascii_case(email)) {
            continue;
        }
        out.push(email.to_string());
    }
    out
}
