use super::ContactStore;
use crate::error::{BotError, Result};
use crate::model::{Contact, Phone};
use std::collections::HashMap;

/// In-memory contact storage.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    positions: HashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn set_phone(&mut self, name: &str, phone: Phone) -> bool {
        match self.positions.get(name) {
            Some(&pos) => {
                self.contacts[pos].phone = phone;
                true
            }
            None => false,
        }
    }
}

impl ContactStore for InMemoryStore {
    fn insert_contact(&mut self, contact: Contact) -> Result<()> {
        if !self.set_phone(&contact.name, contact.phone.clone()) {
            self.positions
                .insert(contact.name.clone(), self.contacts.len());
            self.contacts.push(contact);
        }
        Ok(())
    }

    fn update_contact(&mut self, contact: Contact) -> Result<()> {
        if self.set_phone(&contact.name, contact.phone) {
            Ok(())
        } else {
            Err(BotError::ContactNotFound(contact.name))
        }
    }

    fn get_contact(&self, name: &str) -> Result<Contact> {
        self.positions
            .get(name)
            .map(|&pos| self.contacts[pos].clone())
            .ok_or_else(|| BotError::ContactNotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    fn list_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let phone = Phone::parse(phone).unwrap();
            self.store
                .insert_contact(Contact::new(name, phone))
                .unwrap();
            self
        }

        /// Seeds `count` contacts named `Contact 1`..`Contact N`.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let phone = Phone::parse(&format!("+380{:09}", i + 1)).unwrap();
                self.store
                    .insert_contact(Contact::new(format!("Contact {}", i + 1), phone))
                    .unwrap();
            }
            self
        }
    }
}
