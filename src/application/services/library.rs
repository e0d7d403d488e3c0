//! Library query service
//!
//! Answers catalog questions. Storage is someone else's job: the service only
//! reads through the shared `BookStore`, so changes to the store are visible
//! on the next query.

use std::sync::Arc;

use tracing::debug;

use crate::domain::Book;
use crate::infrastructure::traits::BookStore;

pub struct Library {
    repository: Arc<dyn BookStore>,
}

impl Library {
    pub fn new(repository: Arc<dyn BookStore>) -> Self {
        Self { repository }
    }

    /// First book with exactly this title, in insertion order.
    pub fn get_book_by_title(&self, title: &str) -> Option<Book> {
        let found = self
            .repository
            .list_books()
            .into_iter()
            .find(|book| book.title == title);
        debug!("get_book_by_title: title={:?} found={}", title, found.is_some());
        found
    }

    pub fn get_total_number_of_books(&self) -> usize {
        self.repository.list_books().len()
    }

    pub fn get_books_by_author(&self, author: &str) -> Vec<Book> {
        self.repository
            .list_books()
            .into_iter()
            .filter(|book| book.author == author)
            .collect()
    }

    pub fn get_books_by_publication_year(&self, publication_year: i32) -> Vec<Book> {
        self.repository
            .list_books()
            .into_iter()
            .filter(|book| book.publication_year == publication_year)
            .collect()
    }
}
