//! The in-memory contact book.
//!
//! [`ContactBook`] is a mapping from generated identifiers to contact
//! records. All operations are synchronous and run against the resident
//! map; queries derive their answers from the current snapshot rather than
//! any maintained index, and every mutating operation either fully applies
//! or leaves the book untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contact::{Contact, ContactId, ContactPatch, NewContact};
use crate::error::{StoreError, ValidationError};
use crate::interact::DeleteConfirmer;
use crate::merge::{merge_records, MergeResolver};
use crate::phone;

/// Mapping of identifiers to contact records.
///
/// Serializes transparently as a single JSON object whose keys are the
/// identifiers, which is exactly the on-disk snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: BTreeMap<ContactId, Contact>,
}

impl ContactBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates records in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContactId, &Contact)> {
        self.contacts.iter()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Returns true if the identifier is present.
    #[must_use]
    pub fn contains(&self, id: &ContactId) -> bool {
        self.contacts.contains_key(id)
    }

    /// Validates and inserts a candidate record, returning its new
    /// identifier.
    ///
    /// The first unused `contact_NNN` slot is assigned, so identifiers
    /// freed by deletion may be reused. Field values are stored exactly as
    /// given; only the blankness check trims.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first of
    /// `first_name`/`last_name`/`phone` that is blank after trimming. The
    /// book is not modified on failure.
    pub fn insert(&mut self, candidate: NewContact) -> Result<ContactId, StoreError> {
        for (field, value) in [
            ("first_name", &candidate.first_name),
            ("last_name", &candidate.last_name),
            ("phone", &candidate.phone),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field }.into());
            }
        }

        let mut index = 1;
        let id = loop {
            let id = ContactId::from_index(index);
            if !self.contacts.contains_key(&id) {
                break id;
            }
            index += 1;
        };

        self.contacts.insert(id.clone(), Contact::new(candidate));
        tracing::debug!(%id, "inserted contact");
        Ok(id)
    }

    /// Finds the record whose stored phone matches `query` after both are
    /// normalized to bare digits.
    ///
    /// Returns the first match in identifier order, or `None` when nothing
    /// matches or the query contains no digits at all.
    #[must_use]
    pub fn find_by_phone(&self, query: &str) -> Option<(&ContactId, &Contact)> {
        let needle = phone::normalize(query);
        if needle.is_empty() {
            return None;
        }
        self.contacts
            .iter()
            .find(|(_, contact)| phone::normalize(&contact.phone) == needle)
    }

    /// Case-insensitive substring search over the combined
    /// `"first last"` name.
    ///
    /// A blank query yields an empty sub-mapping.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> BTreeMap<ContactId, Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return BTreeMap::new();
        }
        self.contacts
            .iter()
            .filter(|(_, contact)| contact.full_name().to_lowercase().contains(&needle))
            .map(|(id, contact)| (id.clone(), contact.clone()))
            .collect()
    }

    /// Exact case-insensitive match on category.
    ///
    /// A blank query yields an empty sub-mapping.
    #[must_use]
    pub fn search_by_category(&self, query: &str) -> BTreeMap<ContactId, Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return BTreeMap::new();
        }
        self.contacts
            .iter()
            .filter(|(_, contact)| contact.category.trim().to_lowercase() == needle)
            .map(|(id, contact)| (id.clone(), contact.clone()))
            .collect()
    }

    /// Applies a partial update to an existing record.
    ///
    /// Each assigned field replaces the stored value wholesale (an address
    /// patch replaces the entire sub-record), and `last_modified` is
    /// stamped with today. Patched values are not re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ContactNotFound`] when the identifier is
    /// absent; the book is not modified.
    pub fn update(&mut self, id: &ContactId, patch: ContactPatch) -> Result<(), StoreError> {
        let contact = self
            .contacts
            .get_mut(id)
            .ok_or_else(|| StoreError::ContactNotFound(id.clone()))?;

        if let Some(first_name) = patch.first_name {
            contact.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            contact.last_name = last_name;
        }
        if let Some(phone) = patch.phone {
            contact.phone = phone;
        }
        if let Some(email) = patch.email {
            contact.email = email;
        }
        if let Some(address) = patch.address {
            contact.address = address;
        }
        if let Some(category) = patch.category {
            contact.category = category;
        }
        if let Some(notes) = patch.notes {
            contact.notes = notes;
        }
        contact.touch();
        tracing::debug!(%id, "updated contact");
        Ok(())
    }

    /// Removes a record, subject to explicit confirmation.
    ///
    /// An unknown identifier fails before the confirmer is consulted.
    ///
    /// # Errors
    ///
    /// [`StoreError::ContactNotFound`] when the identifier is absent, or
    /// [`StoreError::DeleteDeclined`] when the confirmer answers no; the
    /// book is untouched in both cases.
    pub fn delete<C>(&mut self, id: &ContactId, confirmer: &mut C) -> Result<(), StoreError>
    where
        C: DeleteConfirmer + ?Sized,
    {
        let contact = self
            .contacts
            .get(id)
            .ok_or_else(|| StoreError::ContactNotFound(id.clone()))?;

        if !confirmer.confirm_delete(id, contact) {
            tracing::debug!(%id, "deletion declined");
            return Err(StoreError::DeleteDeclined(id.clone()));
        }

        self.contacts.remove(id);
        tracing::debug!(%id, "deleted contact");
        Ok(())
    }

    /// Merges `absorb` into `keep`, consulting `resolver` for fields where
    /// both records carry different non-blank values.
    ///
    /// The merged record is computed in full first; only then is `keep`
    /// replaced and `absorb` removed, so a failed merge leaves both
    /// records exactly as they were. Returns the surviving identifier.
    ///
    /// # Errors
    ///
    /// [`StoreError::ContactNotFound`] when either identifier is absent,
    /// [`StoreError::SelfMerge`] when both are the same, or
    /// [`StoreError::MergeUnresolved`] when the resolver gives up on a
    /// conflicting field.
    pub fn merge<R>(
        &mut self,
        keep: &ContactId,
        absorb: &ContactId,
        resolver: &mut R,
    ) -> Result<ContactId, StoreError>
    where
        R: MergeResolver + ?Sized,
    {
        if keep == absorb {
            return Err(StoreError::SelfMerge(keep.clone()));
        }
        let left = self
            .contacts
            .get(keep)
            .ok_or_else(|| StoreError::ContactNotFound(keep.clone()))?;
        let right = self
            .contacts
            .get(absorb)
            .ok_or_else(|| StoreError::ContactNotFound(absorb.clone()))?;

        let merged = merge_records(left, right, resolver)?;

        self.contacts.insert(keep.clone(), merged);
        self.contacts.remove(absorb);
        tracing::debug!(%keep, %absorb, "merged contacts");
        Ok(keep.clone())
    }
}
