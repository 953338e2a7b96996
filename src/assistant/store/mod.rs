//! # Storage Layer
//!
//! The [`ContactStore`] trait is the only thing the command layer knows about
//! where contacts live. Handlers are generic over it, so the whole bot can be
//! exercised against a fresh store in tests.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the store the interactive session uses.
//!   Contacts live for the lifetime of the process and are dropped on exit.
//!
//! ## Ordering
//!
//! Enumeration returns contacts in the order their names were first inserted.
//! Overwriting an existing name keeps its original position.

use crate::error::Result;
use crate::model::Contact;

pub mod memory;

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Insert a contact, replacing the phone of an existing name.
    fn insert_contact(&mut self, contact: Contact) -> Result<()>;

    /// Replace the phone of an existing contact.
    ///
    /// Fails with `ContactNotFound` if the name was never inserted.
    fn update_contact(&mut self, contact: Contact) -> Result<()>;

    /// Get a contact by name
    fn get_contact(&self, name: &str) -> Result<Contact>;

    fn contains(&self, name: &str) -> bool;

    /// List all contacts in insertion order
    fn list_contacts(&self) -> Result<Vec<Contact>>;
}
