//! Book catalog entity

use std::fmt;

/// A catalog entry. Plain value holder: any title, author or year is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
        }
    }
}

/// Renders the record the way the catalog entry point prints it:
/// `Book { title: 'Clean Code', author: 'Edric Cao', publicationYear: 2023 }`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book {{ title: '{}', author: '{}', publicationYear: {} }}",
            self.title, self.author, self.publication_year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fields_when_creating_book_then_keeps_them() {
        let book = Book::new("Clean Code", "Robert C. Martin", 2008);
        assert_eq!(book.title, "Clean Code");
        assert_eq!(book.author, "Robert C. Martin");
        assert_eq!(book.publication_year, 2008);
    }

    #[test]
    fn given_empty_title_when_creating_book_then_title_is_empty() {
        let book = Book::new("", "Author", 2023);
        assert_eq!(book.title, "");
        assert_eq!(book.author, "Author");
    }

    #[test]
    fn given_book_when_displayed_then_uses_record_form() {
        let book = Book::new("Clean Code", "Edric Cao", 2023);
        assert_eq!(
            book.to_string(),
            "Book { title: 'Clean Code', author: 'Edric Cao', publicationYear: 2023 }"
        );
    }
}
