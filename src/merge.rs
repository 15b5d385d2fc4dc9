//! Merge resolution for combining two contact records.
//!
//! Merging never guesses: when both records carry different non-blank
//! values for the same field, an injected [`MergeResolver`] picks the
//! winner. The merged record is assembled in full before the store is
//! touched, so a resolver that gives up aborts the merge without leaving
//! partial state behind.

use serde::{Deserialize, Serialize};

use crate::contact::{today, Address, Contact};
use crate::error::StoreError;

/// Which of the two candidate values wins a merge conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeChoice {
    /// Keep the value from the surviving record.
    Left,
    /// Keep the value from the record being absorbed.
    Right,
}

/// Decides conflicting field values during a merge.
///
/// The resolver is only consulted when both sides are non-blank and
/// different; agreeing or one-sided fields are taken automatically.
/// Returning `None` means no decision could be made, which fails the whole
/// merge with [`StoreError::MergeUnresolved`].
///
/// Any `FnMut(&str, &str, &str) -> Option<MergeChoice>` closure is a
/// resolver, which keeps non-interactive callers and tests trivial:
///
/// ```
/// use rolodex::{MergeChoice, MergeResolver};
///
/// let mut keep_left = |_field: &str, _l: &str, _r: &str| Some(MergeChoice::Left);
/// assert_eq!(keep_left.choose("phone", "111", "222"), Some(MergeChoice::Left));
/// ```
pub trait MergeResolver {
    /// Picks a side for `field`, whose candidates are `left` and `right`.
    fn choose(&mut self, field: &str, left: &str, right: &str) -> Option<MergeChoice>;
}

impl<F> MergeResolver for F
where
    F: FnMut(&str, &str, &str) -> Option<MergeChoice>,
{
    fn choose(&mut self, field: &str, left: &str, right: &str) -> Option<MergeChoice> {
        self(field, left, right)
    }
}

/// Resolves one scalar field.
///
/// Blankness is judged after trimming; the stored value is carried over
/// verbatim. Both blank or both equal short-circuits to the left value
/// without consulting the resolver.
fn resolve_field<R>(
    field: &str,
    left: &str,
    right: &str,
    resolver: &mut R,
) -> Result<String, StoreError>
where
    R: MergeResolver + ?Sized,
{
    let left_blank = left.trim().is_empty();
    let right_blank = right.trim().is_empty();

    if left_blank && !right_blank {
        return Ok(right.to_string());
    }
    if right_blank || left == right {
        return Ok(left.to_string());
    }

    match resolver.choose(field, left, right) {
        Some(MergeChoice::Left) => Ok(left.to_string()),
        Some(MergeChoice::Right) => Ok(right.to_string()),
        None => Err(StoreError::MergeUnresolved {
            field: field.to_string(),
        }),
    }
}

/// Notes concatenate instead of conflicting.
fn merge_notes(left: &str, right: &str) -> String {
    if left.trim().is_empty() {
        right.to_string()
    } else if right.trim().is_empty() {
        left.to_string()
    } else {
        format!("{left} | {right}")
    }
}

/// Combines two records into one, consulting `resolver` for conflicts.
///
/// Address sub-fields are resolved independently under dotted labels
/// (`address.city` and so on). `created_date` takes the earlier of the two
/// dates and `last_modified` is stamped with today.
///
/// # Errors
///
/// Returns [`StoreError::MergeUnresolved`] when the resolver declines to
/// pick a side for some conflicting field.
pub fn merge_records<R>(
    left: &Contact,
    right: &Contact,
    resolver: &mut R,
) -> Result<Contact, StoreError>
where
    R: MergeResolver + ?Sized,
{
    let address = Address {
        street: resolve_field(
            "address.street",
            &left.address.street,
            &right.address.street,
            resolver,
        )?,
        city: resolve_field(
            "address.city",
            &left.address.city,
            &right.address.city,
            resolver,
        )?,
        state: resolve_field(
            "address.state",
            &left.address.state,
            &right.address.state,
            resolver,
        )?,
        zip_code: resolve_field(
            "address.zip_code",
            &left.address.zip_code,
            &right.address.zip_code,
            resolver,
        )?,
    };

    Ok(Contact {
        first_name: resolve_field("first_name", &left.first_name, &right.first_name, resolver)?,
        last_name: resolve_field("last_name", &left.last_name, &right.last_name, resolver)?,
        phone: resolve_field("phone", &left.phone, &right.phone, resolver)?,
        email: resolve_field("email", &left.email, &right.email, resolver)?,
        address,
        category: resolve_field("category", &left.category, &right.category, resolver)?,
        notes: merge_notes(&left.notes, &right.notes),
        created_date: left.created_date.min(right.created_date),
        last_modified: today(),
    })
}
