//! # Rolodex - An in-memory contact book
//!
//! Rolodex keeps a mapping of generated identifiers to contact records and
//! offers the operations a contact manager needs: validated insertion,
//! normalized-phone lookup, name and category search, partial updates,
//! confirmed deletion, conflict-resolved merging, snapshot statistics,
//! duplicate detection, category export, and a plain-JSON snapshot on
//! disk.
//!
//! ## Core Concepts
//!
//! - **Contact**: one person's stored information, keyed by a generated
//!   `contact_NNN` identifier
//! - **ContactBook**: the in-memory mapping all operations run against
//! - **Injected collaborators**: deletions and merge conflicts are decided
//!   by caller-supplied traits, so an automated decision source can stand
//!   in for the console
//!
//! ## Usage
//!
//! ```
//! use rolodex::{ContactBook, ContactPatch, NewContact};
//!
//! let mut book = ContactBook::new();
//! let id = book
//!     .insert(NewContact::new("Ada", "Lovelace", "(402) 555-1111"))
//!     .expect("required fields present");
//!
//! // Lookups normalize phone formatting.
//! let (found, _) = book.find_by_phone("402-555-1111").expect("stored");
//! assert_eq!(found, &id);
//!
//! book.update(&id, ContactPatch::new().email("ada@example.com"))
//!     .expect("contact exists");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod contact;
pub mod dedup;
pub mod error;
pub mod interact;
pub mod merge;
pub mod persist;
pub mod phone;
pub mod render;
pub mod stats;
pub mod store;

// Re-export primary types at crate root for convenience
pub use contact::{Address, Contact, ContactId, ContactPatch, NewContact, DEFAULT_CATEGORY};
pub use dedup::DuplicateReport;
pub use error::{PersistError, RolodexError, RolodexResult, StoreError, ValidationError};
pub use interact::{
    collect_new_contact, ConsolePrompter, DeleteConfirmer, PromptConfirmer, PromptResolver,
    Prompter, ScriptedPrompter,
};
pub use merge::{MergeChoice, MergeResolver};
pub use persist::{load_from_path, save_to_path};
pub use stats::ContactStatistics;
pub use store::ContactBook;
