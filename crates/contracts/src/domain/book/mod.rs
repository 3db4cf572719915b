use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    pub page_count: u32,
    pub language: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub total_copies: u32,
    pub available_copies: u32,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Absent fields are omitted from the JSON body
/// entirely so the server applies PATCH semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_copies: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_copies: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

/// Listing filters. Equality decides whether a new fetch is needed; the
/// query encoding omits absent fields so the server's defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    pub page: u32,
    pub page_size: u32,
}

pub const DEFAULT_PAGE_SIZE: u32 = 12;

impl Default for BookFilters {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            author: None,
            available: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BookFilters {
    /// Encode as a query string. Deterministic: identical filters always
    /// produce identical output.
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_encode_only_pagination() {
        let query = BookFilters::default().to_query_string();
        assert_eq!(query, "page=1&page_size=12");
    }

    #[test]
    fn absent_fields_are_omitted_not_sent_empty() {
        let filters = BookFilters {
            search: Some("dune".into()),
            ..BookFilters::default()
        };
        let query = filters.to_query_string();
        assert!(query.contains("search=dune"));
        assert!(!query.contains("category"));
        assert!(!query.contains("author"));
        assert!(!query.contains("available"));
    }

    #[test]
    fn available_false_is_still_sent() {
        let filters = BookFilters {
            available: Some(false),
            ..BookFilters::default()
        };
        assert!(filters.to_query_string().contains("available=false"));
    }

    #[test]
    fn encoding_is_idempotent_for_equal_filters() {
        let filters = BookFilters {
            search: Some("a".into()),
            page: 1,
            page_size: 12,
            ..BookFilters::default()
        };
        assert_eq!(filters.clone().to_query_string(), filters.to_query_string());
    }

    #[test]
    fn book_input_serializes_only_provided_fields() {
        let input = BookInput {
            title: Some("Dune".into()),
            total_copies: Some(3),
            ..BookInput::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "Dune");
        assert_eq!(object["total_copies"], 3);
    }

    #[test]
    fn book_deserializes_wire_shape() {
        let book: Book = serde_json::from_str(
            r#"{
                "id": 5,
                "title": "Dune",
                "author": "Frank Herbert",
                "isbn": "9780441013593",
                "page_count": 412,
                "language": "en",
                "category": "Science Fiction",
                "total_copies": 3,
                "available_copies": 0,
                "is_available": false,
                "created_at": "2024-01-02T10:00:00Z",
                "updated_at": "2024-01-02T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(book.available_copies, 0);
        assert!(!book.is_available);
        assert_eq!(book.publisher, None);
        assert_eq!(book.publication_date, None);
    }
}
