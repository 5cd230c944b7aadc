use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    pub id: String,
    pub name: String,
    pub zone: Option<String>,
    pub email: Option<String>,
    pub cell_phone: Option<String>,
}

impl Advisor {
    pub fn default_name(id: &str) -> String {
        format!("Asesor {id}")
    }
}

pub fn find_advisor<'a>(advisors: &'a [Advisor], id: &str) -> Option<&'a Advisor> {
    let id = id.trim();
    advisors.iter().find(|a| a.id == id)
}
