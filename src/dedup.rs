//! Duplicate detection.
//!
//! Three independent groupings run over the whole book: by normalized
//! phone digits, by lower-cased email, and by lower-cased name. The
//! groupings do not interact, so one record can show up in several
//! duplicate classes at once.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::contact::{Contact, ContactId};
use crate::phone;
use crate::store::ContactBook;

/// Groups of identifiers that share a duplicate key.
///
/// Each inner list holds two or more identifiers; singleton groups and
/// records whose key is blank are never reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    /// Groups sharing the same normalized phone digits.
    pub phone_duplicates: Vec<Vec<ContactId>>,

    /// Groups sharing the same lower-cased trimmed email.
    pub email_duplicates: Vec<Vec<ContactId>>,

    /// Groups sharing the same lower-cased `first|last` name key.
    pub name_duplicates: Vec<Vec<ContactId>>,
}

impl DuplicateReport {
    /// Returns true if no grouping found anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone_duplicates.is_empty()
            && self.email_duplicates.is_empty()
            && self.name_duplicates.is_empty()
    }
}

fn name_key(contact: &Contact) -> String {
    let first = contact.first_name.trim().to_lowercase();
    let last = contact.last_name.trim().to_lowercase();
    if first.is_empty() && last.is_empty() {
        String::new()
    } else {
        format!("{first}|{last}")
    }
}

fn groups<F>(book: &ContactBook, key_of: F) -> Vec<Vec<ContactId>>
where
    F: Fn(&Contact) -> String,
{
    let mut by_key: BTreeMap<String, Vec<ContactId>> = BTreeMap::new();
    for (id, contact) in book.iter() {
        let key = key_of(contact);
        if key.is_empty() {
            continue;
        }
        by_key.entry(key).or_default().push(id.clone());
    }
    by_key
        .into_values()
        .filter(|members| members.len() >= 2)
        .collect()
}

impl ContactBook {
    /// Reports duplicate groups for the current snapshot.
    ///
    /// Group order follows key order and members follow identifier order,
    /// so repeated calls over the same book produce identical reports.
    #[must_use]
    pub fn find_duplicates(&self) -> DuplicateReport {
        DuplicateReport {
            phone_duplicates: groups(self, |c| phone::normalize(&c.phone)),
            email_duplicates: groups(self, |c| c.email.trim().to_lowercase()),
            name_duplicates: groups(self, name_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::contact::NewContact;

    #[test]
    fn empty_book_has_no_duplicates() {
        assert!(ContactBook::new().find_duplicates().is_empty());
    }

    #[test]
    fn phone_duplicates_match_across_formatting_but_emails_stay_distinct() {
        let mut book = ContactBook::new();
        let a = book
            .insert(NewContact::new("Al", "Capone", "312-555-3333").email("al@x.test"))
            .unwrap();
        let b = book
            .insert(NewContact::new("Alphonse", "Capone", "3125553333").email("alphonse@x.test"))
            .unwrap();

        let report = book.find_duplicates();
        assert_eq!(report.phone_duplicates, vec![vec![a, b]]);
        assert!(report.email_duplicates.is_empty());
    }

    #[test]
    fn name_duplicates_fold_case_and_whitespace() {
        let mut book = ContactBook::new();
        let a = book
            .insert(NewContact::new("Ada", "Lovelace", "402-555-0001"))
            .unwrap();
        let b = book
            .insert(NewContact::new("  ADA ", "lovelace", "402-555-0002"))
            .unwrap();
        book.insert(NewContact::new("Grace", "Hopper", "402-555-0003"))
            .unwrap();

        let report = book.find_duplicates();
        assert_eq!(report.name_duplicates, vec![vec![a, b]]);
    }

    #[test]
    fn blank_emails_never_group() {
        let mut book = ContactBook::new();
        book.insert(NewContact::new("A", "A", "402-555-0001")).unwrap();
        book.insert(NewContact::new("B", "B", "402-555-0002")).unwrap();

        assert!(book.find_duplicates().email_duplicates.is_empty());
    }

    #[test]
    fn a_record_can_sit_in_several_duplicate_classes() {
        let mut book = ContactBook::new();
        let a = book
            .insert(NewContact::new("Ada", "Lovelace", "402-555-0001").email("ada@x.test"))
            .unwrap();
        let b = book
            .insert(NewContact::new("ada", "LOVELACE", "(402) 555-0001").email("ADA@x.test"))
            .unwrap();

        let report = book.find_duplicates();
        let pair = vec![a, b];
        assert_eq!(report.phone_duplicates, vec![pair.clone()]);
        assert_eq!(report.email_duplicates, vec![pair.clone()]);
        assert_eq!(report.name_duplicates, vec![pair]);
    }

    #[test]
    fn groups_of_three_stay_together() {
        let mut book = ContactBook::new();
        let ids: Vec<ContactId> = (0..3)
            .map(|i| {
                book.insert(NewContact::new(format!("P{i}"), "Q", "531-555-2222"))
                    .unwrap()
            })
            .collect();

        let report = book.find_duplicates();
        assert_eq!(report.phone_duplicates, vec![ids]);
    }
}
