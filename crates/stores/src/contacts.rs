//! In-memory contact list. Nothing here is persisted.

use erpdesk_client::services::Contacts;
use erpdesk_client::{ApiResult, ListQuery, ResourceService};
use erpdesk_core::RecordId;
use erpdesk_parties::Contact;

#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    selected: Option<RecordId>,
    loading: bool,
    error: Option<String>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the whole list. A selection that no longer exists is dropped.
    pub fn set_contacts(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        if let Some(id) = &self.selected {
            if !self.contacts.iter().any(|c| &c.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Replace the contact with the same id. Returns `false` if there is none.
    pub fn update(&mut self, contact: Contact) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => {
                *slot = contact;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| &c.id == id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Some(self.contacts.remove(index))
    }

    /// Select a contact by id; `None` (or an unknown id) clears the selection.
    pub fn select(&mut self, id: Option<&RecordId>) {
        self.selected = id.filter(|id| self.contacts.iter().any(|c| &c.id == *id)).cloned();
    }

    pub fn selected(&self) -> Option<&Contact> {
        let id = self.selected.as_ref()?;
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Contacts matching `query` on name, email, phone or company.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Contact> + 'a {
        self.contacts.iter().filter(move |c| c.matches(query))
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Load the list from the backend, tracking loading and error state.
    /// The error is also returned to the caller.
    pub async fn fetch(&mut self, service: &ResourceService<Contacts>, query: &ListQuery) -> ApiResult<()> {
        self.loading = true;
        self.error = None;
        let result = service.get_all(query).await;
        self.loading = false;

        match result {
            Ok(contacts) => {
                self.set_contacts(contacts);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
