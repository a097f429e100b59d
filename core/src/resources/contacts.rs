use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    Contact, ContactCreated, ContactUpdated, ContactUpserted, CreateContact, Deleted,
    ListContactsParams, UpdateContact, UpsertContact,
};

/// Contacts inside a contact book, under `/contactBooks/{book}/contacts`.
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a Unsent,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self, book_id: &str, params: &ListContactsParams) -> Result<Vec<Contact>> {
        let mut query = Query::new();
        if !params.emails.is_empty() {
            query.push("emails", params.emails.join(","));
        }
        query
            .push_opt("page", params.page)
            .push_opt("limit", params.limit);
        if !params.ids.is_empty() {
            query.push("ids", params.ids.join(","));
        }
        self.client.get(&["contactBooks", book_id, "contacts"], &query)
    }

    pub fn create(&self, book_id: &str, contact: &CreateContact) -> Result<ContactCreated> {
        self.client.post(
            &["contactBooks", book_id, "contacts"],
            contact,
            &RequestOptions::default(),
        )
    }

    pub fn get(&self, book_id: &str, contact_id: &str) -> Result<Contact> {
        self.client.get(
            &["contactBooks", book_id, "contacts", contact_id],
            &Query::new(),
        )
    }

    pub fn update(
        &self,
        book_id: &str,
        contact_id: &str,
        update: &UpdateContact,
    ) -> Result<ContactUpdated> {
        self.client.patch(&["contactBooks", book_id, "contacts", contact_id], update)
    }

    /// Create the contact under `contact_id`, or replace it if it exists.
    pub fn upsert(
        &self,
        book_id: &str,
        contact_id: &str,
        contact: &UpsertContact,
    ) -> Result<ContactUpserted> {
        self.client.put(
            &["contactBooks", book_id, "contacts", contact_id],
            Some(contact),
        )
    }

    pub fn delete(&self, book_id: &str, contact_id: &str) -> Result<Deleted> {
        self.client.delete(&["contactBooks", book_id, "contacts", contact_id])
    }
}
