use serde::{Deserialize, Serialize};

use super::id::Id;

/// An address-book entry (crew, talent, clients)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub rate: String,
    pub notes: String,
}

/// Field values collected by the new-contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub rate: String,
    pub notes: String,
}

impl ContactDraft {
    pub fn into_contact(self, id: Id) -> Contact {
        Contact {
            id,
            name: self.name,
            role: self.role,
            email: self.email,
            phone: self.phone,
            rate: self.rate,
            notes: self.notes,
        }
    }
}
