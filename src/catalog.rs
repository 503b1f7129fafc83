use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Records
// =============================================================================

/// An immutable catalog entry. Fields are private and there are no setters,
/// so a `Book` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    title: String,
    author: String,
    publisher: String,
    id: u64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        id: u64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            id,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Associated function: callable as `Book::find(..)` without an instance.
    pub fn find(id: u64, books: &[Book]) -> Option<&Book> {
        find_book(id, books)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} by {} ({})",
            self.id, self.title, self.author, self.publisher
        )
    }
}

/// Returns the first book whose id equals `id`, scanning in order.
pub fn find_book(id: u64, books: &[Book]) -> Option<&Book> {
    books.iter().find(|book| book.id == id)
}

// =============================================================================
// Collection
// =============================================================================

/// Ordered collection of books. Ids are expected to be distinct but this is
/// not enforced.
///
/// When deserialized, `books` is required and unknown keys are rejected, so a
/// misspelled file fails to load instead of becoming an empty catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn classics() -> Self {
        vec![
            Book::new("Hamlet", "Shakespeare", "Simon & Schuster", 215),
            Book::new("Pride and Prejudice", "Jane Austen", "Penguin Classics", 279),
            Book::new("Moby Dick", "Herman Melville", "Harper & Brothers", 635),
            Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Scribner", 180),
            Book::new("War and Peace", "Leo Tolstoy", "Vintage", 1225),
        ]
        .into()
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&Book> {
        find_book(id, &self.books)
    }

    /// Every book carrying `id`, in catalog order. `find` returns the first.
    pub fn find_all(&self, id: u64) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |book| book.id == id)
    }

    /// Ids that occur more than once, ordered by where each first repeats.
    pub fn duplicate_ids(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for book in &self.books {
            if !seen.insert(book.id) && reported.insert(book.id) {
                duplicates.push(book.id);
            }
        }
        duplicates
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
