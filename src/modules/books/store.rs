//! In-memory book collection.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::models::Book;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no book with id '{id}'")]
    NotFound { id: String },
}

/// Storage seam for the books module. Handlers only ever see this trait.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Snapshot of the whole collection in insertion order
    async fn list(&self) -> Vec<Book>;

    /// Append `book` to the end of the collection and return it
    async fn create(&self, book: Book) -> Book;

    /// Remove the first record whose id equals `id` and return it
    async fn delete(&self, id: &str) -> Result<Book, StoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Ordered collection guarded by a read/write lock so concurrent creates and
/// deletes never interleave on the same buffer.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Store pre-filled with the three sample records.
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "XYZ", "ABC", 2),
        Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
        Book::new("3", "War and Peace", "Leo Tolstoy", 6),
    ]
}

/// Index of the first book whose id matches exactly.
pub fn find_index(books: &[Book], id: &str) -> Option<usize> {
    books.iter().position(|book| book.id == id)
}

#[async_trait]
impl BookRepository for MemoryBookStore {
    async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    async fn create(&self, book: Book) -> Book {
        let mut books = self.books.write().await;
        books.push(book.clone());
        book
    }

    async fn delete(&self, id: &str) -> Result<Book, StoreError> {
        let mut books = self.books.write().await;
        let index = find_index(&books, id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        Ok(books.remove(index))
    }

    async fn len(&self) -> usize {
        self.books.read().await.len()
    }
}
