use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{find_advisor, Advisor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub tax_id: String,
    pub name: String,
    pub establishment: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub discount: Decimal,
    pub city: Option<String>,
    pub email: Option<String>,
    pub advisor_id: Option<String>,
}

impl Client {
    pub fn default_name(tax_id: &str) -> String {
        format!("Cliente {tax_id}")
    }

    /// The advisor assigned to this client, if the id resolves.
    pub fn advisor<'a>(&self, advisors: &'a [Advisor]) -> Option<&'a Advisor> {
        self.advisor_id
            .as_deref()
            .and_then(|id| find_advisor(advisors, id))
    }
}

pub fn find_client<'a>(clients: &'a [Client], tax_id: &str) -> Option<&'a Client> {
    let tax_id = tax_id.trim();
    clients.iter().find(|c| c.tax_id == tax_id)
}
