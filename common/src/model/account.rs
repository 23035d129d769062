use serde::{Deserialize, Serialize};

/// Employee directory entry. Owned by the wider HR system; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub full_name: String,
    pub internal_nik: Option<String>,
}

/// Display fields joined onto a certification when it is listed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountRef {
    pub full_name: Option<String>,
    pub internal_nik: Option<String>,
}
