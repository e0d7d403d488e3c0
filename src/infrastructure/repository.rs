//! In-memory book repository

use std::sync::RwLock;

use tracing::debug;

use crate::domain::Book;
use crate::infrastructure::traits::BookStore;

/// Book storage backed by a vector. Starts empty.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `books`, in order.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(books.into_iter().collect()),
        }
    }
}

impl BookStore for InMemoryBookRepository {
    fn add_book(&self, book: Book) {
        debug!("add_book: title={:?}", book.title);
        let mut books = self.books.write().unwrap_or_else(|e| e.into_inner());
        books.push(book);
    }

    fn list_books(&self) -> Vec<Book> {
        self.books
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn remove_book(&self, title: &str) {
        let mut books = self.books.write().unwrap_or_else(|e| e.into_inner());
        let before = books.len();
        books.retain(|book| book.title != title);
        debug!("remove_book: title={:?} removed={}", title, before - books.len());
    }
}
