use serde::{Deserialize, Serialize};

/// Benutzerrolle, taken verbatim from the backend. Anything the backend
/// sends that we do not know yet deserializes as a plain customer role
/// instead of failing the whole profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "CUSTOMER")]
    Customer,
    #[serde(other)]
    Unknown,
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Profil des eingeloggten Benutzers, `GET /api/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
