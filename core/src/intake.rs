//! Draft state for the "add user" form.

use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumIter;

use crate::record::RecordId;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum IntakeField {
    Name,
    Email,
    Company,
}

/// Scratch values bound to the intake inputs. Only presence is checked: no
/// trimming, no format checks, no length bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeDraft {
    pub name: String,
    pub email: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Added(RecordId),
    /// Nothing was stored and the draft is unchanged.
    Rejected { missing: Vec<IntakeField> },
}

impl IntakeDraft {
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Name => &self.name,
            IntakeField::Email => &self.email,
            IntakeField::Company => &self.company,
        }
    }

    pub fn field_mut(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::Name => &mut self.name,
            IntakeField::Email => &mut self.email,
            IntakeField::Company => &mut self.company,
        }
    }

    /// Replace one field, leaving the other two untouched.
    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn missing_fields(&self) -> Vec<IntakeField> {
        use strum::IntoEnumIterator;
        IntakeField::iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.company.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Commit the draft to `store`. On success the draft is cleared; on
    /// rejection both the store and the draft stay as they were.
    pub fn submit(&mut self, store: &mut RecordStore) -> IntakeOutcome {
        match store.add(self) {
            Some(id) => {
                self.clear();
                IntakeOutcome::Added(id)
            }
            None => IntakeOutcome::Rejected {
                missing: self.missing_fields(),
            },
        }
    }
}
