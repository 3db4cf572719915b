use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::book::Book;
use crate::domain::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Borrowed,
    Returned,
    Overdue,
}

/// A loan as reported by the server. `is_overdue`, `days_overdue` and
/// `fine_amount` are server-computed facts; the client never recomputes
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub user: User,
    pub book: Book,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
    pub status: LoanStatus,
    pub is_overdue: bool,
    pub days_overdue: i64,
    pub fine_amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub book_id: i64,
}

/// Client-facing status filter for the personal loan listing. `Active` is
/// an alias the server maps to "not yet returned", which is wider than the
/// `borrowed` literal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatusFilter {
    Active,
    Returned,
    Overdue,
}

impl LoanStatusFilter {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Returned => "returned",
            Self::Overdue => "overdue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan_json(status: &str, return_date: Option<&str>) -> String {
        let return_field = match return_date {
            Some(date) => format!(r#""return_date": "{date}","#),
            None => String::new(),
        };
        format!(
            r#"{{
                "id": 11,
                "user": {{
                    "id": 3,
                    "username": "reader",
                    "email": "reader@example.com",
                    "first_name": "Jo",
                    "last_name": "March",
                    "role": "user",
                    "date_joined": "2024-05-01T09:30:00Z"
                }},
                "book": {{
                    "id": 5,
                    "title": "Dune",
                    "author": "Frank Herbert",
                    "isbn": "9780441013593",
                    "page_count": 412,
                    "language": "en",
                    "category": "Science Fiction",
                    "total_copies": 3,
                    "available_copies": 2,
                    "is_available": true,
                    "created_at": "2024-01-02T10:00:00Z",
                    "updated_at": "2024-01-02T10:00:00Z"
                }},
                "borrow_date": "2024-06-01T12:00:00Z",
                "due_date": "2024-06-15T12:00:00Z",
                {return_field}
                "status": "{status}",
                "is_overdue": false,
                "days_overdue": 0,
                "fine_amount": "0.00"
            }}"#
        )
    }

    #[test]
    fn return_date_present_iff_returned() {
        let open: Loan = serde_json::from_str(&loan_json("borrowed", None)).unwrap();
        assert_eq!(open.status, LoanStatus::Borrowed);
        assert_eq!(open.return_date, None);

        let closed: Loan =
            serde_json::from_str(&loan_json("returned", Some("2024-06-10T08:00:00Z"))).unwrap();
        assert_eq!(closed.status, LoanStatus::Returned);
        assert!(closed.return_date.is_some());
    }

    #[test]
    fn fine_amount_is_an_opaque_string() {
        let loan: Loan = serde_json::from_str(&loan_json("borrowed", None)).unwrap();
        assert_eq!(loan.fine_amount, "0.00");
    }

    #[test]
    fn status_filter_query_values() {
        assert_eq!(LoanStatusFilter::Active.as_query_value(), "active");
        assert_eq!(LoanStatusFilter::Returned.as_query_value(), "returned");
        assert_eq!(LoanStatusFilter::Overdue.as_query_value(), "overdue");
    }
}
