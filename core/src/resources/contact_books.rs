use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    ContactBook, ContactBookCreated, ContactBookUpdated, CreateContactBook, Deleted,
    UpdateContactBook,
};

/// `/contact-books` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ContactBooks<'a> {
    client: &'a Unsent,
}

impl<'a> ContactBooks<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<ContactBook>> {
        self.client.get(&["contact-books"], &Query::new())
    }

    pub fn get(&self, id: &str) -> Result<ContactBook> {
        self.client.get(&["contact-books", id], &Query::new())
    }

    pub fn create(&self, book: &CreateContactBook) -> Result<ContactBookCreated> {
        self.client.post(&["contact-books"], book, &RequestOptions::default())
    }

    pub fn update(&self, id: &str, update: &UpdateContactBook) -> Result<ContactBookUpdated> {
        self.client.patch(&["contact-books", id], update)
    }

    pub fn delete(&self, id: &str) -> Result<Deleted> {
        self.client.delete(&["contact-books", id])
    }
}
