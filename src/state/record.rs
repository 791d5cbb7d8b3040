//! The record accumulated across steps and handed to the store

use super::field::FieldId;
use serde::{Deserialize, Serialize};

/// One signup row: `{name, phone, email, college, branch}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub college: String,
    pub branch: String,
}

impl FormRecord {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::College => &self.college,
            FieldId::Branch => &self.branch,
        }
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
            FieldId::College => &mut self.college,
            FieldId::Branch => &mut self.branch,
        }
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        *self.get_mut(id) = value.into();
    }

    /// First word of the name, used for the welcome line
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}
