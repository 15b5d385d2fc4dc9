//! Plain-text rendering of contacts, rosters, and category exports.

use std::fmt::Write as _;

use crate::contact::{Contact, ContactId};
use crate::store::ContactBook;

const RULE: &str = "----------------------------------------";

/// Placeholder returned by [`ContactBook::export_category`] when nothing
/// matches.
pub const EMPTY_EXPORT: &str = "(No contacts in this category)";

/// Placeholder returned by [`roster`] for an empty book.
pub const EMPTY_ROSTER: &str = "(No contacts)";

/// Renders one contact as a bordered detail block.
#[must_use]
pub fn contact_block(id: &ContactId, contact: &Contact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "ID: {id}");
    let _ = writeln!(out, "Name: {}", contact.full_name());
    let _ = writeln!(out, "Phone: {}", contact.phone);
    let _ = writeln!(out, "Email: {}", contact.email);
    let _ = writeln!(out, "Category: {}", contact.category);
    let _ = writeln!(out, "Address:");
    let _ = writeln!(out, "  {}", contact.address.street);
    let _ = writeln!(
        out,
        "  {}, {} {}",
        contact.address.city, contact.address.state, contact.address.zip_code
    );
    let _ = writeln!(out, "Notes: {}", contact.notes);
    let _ = writeln!(
        out,
        "Created: {}  Last modified: {}",
        contact.created_date, contact.last_modified
    );
    let _ = write!(out, "{RULE}");
    out
}

/// Renders the whole book as one line per contact, in identifier order.
#[must_use]
pub fn roster(book: &ContactBook) -> String {
    if book.is_empty() {
        return EMPTY_ROSTER.to_string();
    }
    book.iter()
        .map(|(id, contact)| {
            format!("{:>12} | {:<25} | {}", id, contact.full_name(), contact.phone)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl ContactBook {
    /// Produces the formatted export of every record in a category.
    ///
    /// Category comparison is case-insensitive after trimming. Records are
    /// listed in identifier order, one block each, separated by rule
    /// lines; when nothing matches the placeholder text is returned.
    #[must_use]
    pub fn export_category(&self, category: &str) -> String {
        let needle = category.trim().to_lowercase();
        let mut lines: Vec<String> = Vec::new();

        for (id, contact) in self.iter() {
            if contact.category.trim().to_lowercase() != needle {
                continue;
            }
            lines.push(format!("ID: {id}"));
            lines.push(format!("Name: {}", contact.full_name()));
            lines.push(format!("Phone: {}", contact.phone));
            lines.push(format!("Email: {}", contact.email));
            lines.push(format!("Address: {}", contact.address.street));
            lines.push(format!(
                "         {}, {} {}",
                contact.address.city, contact.address.state, contact.address.zip_code
            ));
            lines.push(format!("Notes: {}", contact.notes));
            lines.push(RULE.to_string());
        }

        if lines.is_empty() {
            EMPTY_EXPORT.to_string()
        } else {
            lines.join("\n")
        }
    }
}
