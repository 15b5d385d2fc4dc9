//! Contact record types and identifier management.
//!
//! Identifiers are the anchor of the contact book. Every record is keyed by
//! a generated [`ContactId`], and every cross-record operation (update,
//! delete, merge, duplicate reporting) speaks in identifiers rather than
//! positions.

use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The conventional default category for new contacts.
///
/// Categories are an open set; `"personal"`, `"work"`, and `"family"` are
/// the conventional values, but any string is accepted and preserved.
pub const DEFAULT_CATEGORY: &str = "personal";

pub(crate) fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Today's date in UTC, at the day precision all record timestamps use.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Generated identifier for a stored contact.
///
/// Identifiers have the form `contact_NNN` (zero-padded to at least three
/// digits) and are assigned by probing for the lowest unused slot, so a
/// deleted identifier may be reused by a later insertion.
///
/// # Examples
///
/// ```
/// use rolodex::ContactId;
///
/// let id = ContactId::from_index(7);
/// assert_eq!(id.as_str(), "contact_007");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Creates the identifier for a 1-based slot index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(format!("contact_{index:03}"))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContactId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ContactId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

/// Postal address sub-record.
///
/// Every field is optional; a blank string means the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub zip_code: String,
}

impl Address {
    /// Returns true if no field carries a non-blank value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.street.trim().is_empty()
            && self.city.trim().is_empty()
            && self.state.trim().is_empty()
            && self.zip_code.trim().is_empty()
    }
}

/// One person's stored information.
///
/// `first_name`, `last_name`, and `phone` are required to be non-blank at
/// insertion time; later updates are not re-validated. `created_date` is
/// set when the record enters the book and never changes afterwards, while
/// `last_modified` is bumped on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,

    pub last_name: String,

    /// Free-form phone number, normalized on demand for comparisons.
    pub phone: String,

    /// Blank means no email on file.
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub address: Address,

    /// Open-set category, conventionally one of
    /// `"personal"`/`"work"`/`"family"`.
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default)]
    pub notes: String,

    /// Immutable after creation.
    #[serde(default = "today")]
    pub created_date: NaiveDate,

    #[serde(default = "today")]
    pub last_modified: NaiveDate,
}

impl Contact {
    /// Builds a record from candidate data, stamping both dates with today.
    #[must_use]
    pub fn new(candidate: NewContact) -> Self {
        let now = today();
        let category = if candidate.category.trim().is_empty() {
            default_category()
        } else {
            candidate.category
        };
        Self {
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            phone: candidate.phone,
            email: candidate.email,
            address: candidate.address,
            category,
            notes: candidate.notes,
            created_date: now,
            last_modified: now,
        }
    }

    /// The display name, `"first last"` with outer whitespace trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Returns true if the record has a non-blank email.
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Marks the record as mutated today.
    pub(crate) fn touch(&mut self) {
        self.last_modified = today();
    }
}

/// Candidate data for a record that has not been inserted yet.
///
/// Everything a [`Contact`] carries except the timestamps, which the book
/// stamps at insertion.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: Address,
    /// Falls back to [`DEFAULT_CATEGORY`] when blank.
    pub category: String,
    pub notes: String,
}

impl NewContact {
    /// Convenience constructor from the three required fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Sets the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the address sub-record.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A partial set of field assignments for [`ContactBook::update`].
///
/// `None` leaves the stored field unchanged; `Some` replaces it wholesale.
/// An address patch replaces the entire sub-record rather than merging
/// field by field. There is no way to patch `created_date`.
///
/// [`ContactBook::update`]: crate::store::ContactBook::update
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl ContactPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the patch assigns nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.category.is_none()
            && self.notes.is_none()
    }

    /// Replaces the first name.
    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Replaces the last name.
    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Replaces the phone number.
    #[must_use]
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Replaces the email.
    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Replaces the whole address sub-record.
    #[must_use]
    pub fn address(mut self, value: Address) -> Self {
        self.address = Some(value);
        self
    }

    /// Replaces the category.
    #[must_use]
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Replaces the notes.
    #[must_use]
    pub fn notes(mut self, value: impl Into<String>) -> Self {
        self.notes = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_formatting_and_ordering() {
        assert_eq!(ContactId::from_index(1).as_str(), "contact_001");
        assert_eq!(ContactId::from_index(42).as_str(), "contact_042");
        assert_eq!(ContactId::from_index(999).as_str(), "contact_999");
        // Width grows past three digits instead of wrapping.
        assert_eq!(ContactId::from_index(1000).as_str(), "contact_1000");

        assert!(ContactId::from_index(1) < ContactId::from_index(2));
    }

    #[test]
    fn contact_id_display_and_conversions() {
        let id = ContactId::from_index(3);
        assert_eq!(format!("{id}"), "contact_003");
        assert_eq!(ContactId::from("contact_003"), id);
        assert_eq!(String::from(id), "contact_003");
    }

    #[test]
    fn contact_id_serializes_as_bare_string() {
        let id = ContactId::from_index(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"contact_005\"");
        let back: ContactId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn new_contact_stamps_dates_and_defaults_category() {
        let contact = Contact::new(NewContact::new("Ada", "Lovelace", "402-555-1111"));
        assert_eq!(contact.category, DEFAULT_CATEGORY);
        assert_eq!(contact.created_date, contact.last_modified);
        assert!(!contact.has_email());

        let work =
            Contact::new(NewContact::new("Ada", "Lovelace", "402-555-1111").category("Work"));
        assert_eq!(work.category, "Work");
    }

    #[test]
    fn full_name_trims_outer_whitespace() {
        let contact = Contact::new(NewContact::new("  Ada ", " Lovelace ", "402-555-1111"));
        assert_eq!(contact.full_name(), "Ada Lovelace");
    }

    #[test]
    fn address_blankness() {
        assert!(Address::default().is_blank());
        let addr = Address {
            city: "Omaha".to_string(),
            ..Address::default()
        };
        assert!(!addr.is_blank());
    }

    #[test]
    fn patch_builder_and_emptiness() {
        assert!(ContactPatch::new().is_empty());
        let patch = ContactPatch::new().phone("555").notes("met at conference");
        assert!(!patch.is_empty());
        assert_eq!(patch.phone.as_deref(), Some("555"));
        assert!(patch.first_name.is_none());
    }

    #[test]
    fn contact_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "first_name": "Grace",
            "last_name": "Hopper",
            "phone": "212-555-0000"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.category, DEFAULT_CATEGORY);
        assert!(contact.email.is_empty());
        assert!(contact.address.is_blank());
        assert_eq!(contact.created_date, today());
    }

    #[test]
    fn contact_serialization_round_trip() {
        let contact = Contact::new(
            NewContact::new("Grace", "Hopper", "(212) 555-0000")
                .email("grace@example.com")
                .category("work")
                .notes("compiler pioneer"),
        );
        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }
}
