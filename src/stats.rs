//! Snapshot statistics over the contact book.
//!
//! Nothing here is cached: every call walks the current records and
//! recomputes the report from scratch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::phone;
use crate::store::ContactBook;

/// Category bucket for records whose category is blank.
const UNCATEGORIZED: &str = "uncategorized";

/// Aggregate counts over the whole book.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactStatistics {
    /// Number of stored records.
    pub total_contacts: usize,

    /// Count per lower-cased category; blank categories land in
    /// `uncategorized`.
    pub contacts_by_category: BTreeMap<String, usize>,

    /// Count per upper-cased address state; blank states are excluded.
    pub contacts_by_state: BTreeMap<String, usize>,

    /// Records with no email on file.
    pub contacts_without_email: usize,

    /// Count per leading three normalized-phone digits; phones with fewer
    /// than three digits are excluded.
    pub contacts_by_area_code: BTreeMap<String, usize>,

    /// The area code with the highest count. Ties resolve to the first
    /// key in grouping order, which is deterministic.
    pub most_common_area_code: Option<String>,

    /// Total divided by the number of distinct categories, rounded to two
    /// decimals; zero when the book is empty.
    pub average_contacts_per_category: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ContactBook {
    /// Computes the statistics report for the current snapshot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> ContactStatistics {
        let mut contacts_by_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut contacts_by_state: BTreeMap<String, usize> = BTreeMap::new();
        let mut contacts_by_area_code: BTreeMap<String, usize> = BTreeMap::new();
        let mut contacts_without_email = 0;

        for (_, contact) in self.iter() {
            let category = contact.category.trim().to_lowercase();
            let category = if category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                category
            };
            *contacts_by_category.entry(category).or_insert(0) += 1;

            let state = contact.address.state.trim().to_uppercase();
            if !state.is_empty() {
                *contacts_by_state.entry(state).or_insert(0) += 1;
            }

            if !contact.has_email() {
                contacts_without_email += 1;
            }

            if let Some(code) = phone::area_code(&contact.phone) {
                *contacts_by_area_code.entry(code).or_insert(0) += 1;
            }
        }

        let total_contacts = self.len();
        let average_contacts_per_category = if contacts_by_category.is_empty() {
            0.0
        } else {
            round2(total_contacts as f64 / contacts_by_category.len() as f64)
        };

        let mut best: Option<(&String, usize)> = None;
        for (code, &count) in &contacts_by_area_code {
            // Strictly greater, so the first key among ties wins.
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((code, count));
            }
        }
        let most_common_area_code = best.map(|(code, _)| code.clone());

        ContactStatistics {
            total_contacts,
            contacts_by_category,
            contacts_by_state,
            contacts_without_email,
            contacts_by_area_code,
            most_common_area_code,
            average_contacts_per_category,
        }
    }
}
