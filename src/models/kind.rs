use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Products,
    Clients,
    Advisors,
    AreaEmails,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Clients => "clients",
            Self::Advisors => "advisors",
            Self::AreaEmails => "areas",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "products" | "productos" | "product" => Some(Self::Products),
            "clients" | "clientes" | "client" => Some(Self::Clients),
            "advisors" | "asesores" | "advisor" => Some(Self::Advisors),
            "areas" | "area-emails" | "area_emails" | "correos" => Some(Self::AreaEmails),
            _ => None,
        }
    }

    pub fn all() -> &'static [RecordKind] {
        &[
            Self::Products,
            Self::Clients,
            Self::Advisors,
            Self::AreaEmails,
        ]
    }

    /// Name of the flat file that stores this kind in the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Products => "productos.csv",
            Self::Clients => "clientes.csv",
            Self::Advisors => "asesores.csv",
            Self::AreaEmails => "correos_areas.csv",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
