use serde::{Deserialize, Serialize};

/// A single book record as stored and exchanged over HTTP.
///
/// Missing fields decode to their zero value and the capitalised key spellings
/// are accepted alongside the lowercase ones. The `id` is caller-supplied and
/// is never checked for uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Caller-supplied identifier
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    /// Title of the book
    #[serde(alias = "Title", alias = "TITLE")]
    pub title: String,
    /// Author of the book
    #[serde(alias = "Author", alias = "AUTHOR")]
    pub author: String,
    /// Copies on hand
    #[serde(alias = "Quantity", alias = "QUANTITY")]
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Book deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_keys() {
        let book = Book::new("4", "T", "A", 1);
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            serde_json::json!({"id": "4", "title": "T", "author": "A", "quantity": 1})
        );
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let book: Book = serde_json::from_str(r#"{"id":"4"}"#).unwrap();
        assert_eq!(book, Book::new("4", "", "", 0));

        let book: Book = serde_json::from_str("{}").unwrap();
        assert_eq!(book, Book::default());
    }

    #[test]
    fn capitalised_keys_are_accepted() {
        let book: Book =
            serde_json::from_str(r#"{"ID":"9","Title":"T","Author":"A","Quantity":2}"#).unwrap();
        assert_eq!(book, Book::new("9", "T", "A", 2));
    }

    #[test]
    fn wrong_types_still_fail_to_decode() {
        for body in [
            r#"{"quantity":"many"}"#,
            r#"{"quantity":1.5}"#,
            r#"{"id":4}"#,
        ] {
            assert!(serde_json::from_str::<Book>(body).is_err(), "{}", body);
        }
    }

    #[test]
    fn unknown_fields_are_ignored_and_empty_id_accepted() {
        let book: Book = serde_json::from_str(
            r#"{"id":"","title":"T","author":"A","quantity":0,"isbn":"x"}"#,
        )
        .unwrap();
        assert_eq!(book, Book::new("", "T", "A", 0));
    }
}
