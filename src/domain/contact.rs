use serde::{Deserialize, Serialize};

/// A persisted contact. `id` is assigned by the store and never changes.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// The caller-supplied part of a contact, before the store assigns an id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactFields {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        ContactFields {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    /// True when no field carries anything but whitespace.
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.phone, &self.email]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}
