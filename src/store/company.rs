//! # Company Records
//!
//! The single entity type held by the store.

use serde::{Deserialize, Serialize};

/// A phone company record
///
/// Missing fields decode as empty/zero values and unknown fields are
/// ignored, so a request body always yields a complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Store-assigned identifier, ignored on input
    pub id: i64,
    pub name: String,
    pub country: String,
    pub founded_year: i64,
    pub description: String,
}

impl Company {
    /// Drop the identifier, keeping only the caller-owned fields
    pub fn into_fields(self) -> CompanyFields {
        CompanyFields {
            name: self.name,
            country: self.country,
            founded_year: self.founded_year,
            description: self.description,
        }
    }

    fn from_fields(id: i64, fields: CompanyFields) -> Self {
        Self {
            id,
            name: fields.name,
            country: fields.country,
            founded_year: fields.founded_year,
            description: fields.description,
        }
    }

    /// Overwrite every mutable field. The id is left untouched.
    pub(crate) fn overwrite(&mut self, fields: CompanyFields) {
        *self = Self::from_fields(self.id, fields);
    }
}

/// The mutable part of a company record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFields {
    pub name: String,
    pub country: String,
    pub founded_year: i64,
    pub description: String,
}

impl CompanyFields {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        founded_year: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            founded_year,
            description: description.into(),
        }
    }

    /// Attach an identifier, producing a stored record
    pub(crate) fn with_id(self, id: i64) -> Company {
        Company::from_fields(id, self)
    }
}
