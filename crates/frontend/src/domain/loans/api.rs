use contracts::domain::loan::{BorrowRequest, Loan, LoanStatusFilter};
use contracts::shared::pagination::PaginatedResponse;

use crate::system::http::client;
use crate::system::http::error::ApiError;

/// Borrow one copy. The server rejects the request when no copies are
/// available or the caller already holds an active loan on the book; the
/// rejection message is surfaced verbatim.
pub async fn borrow(book_id: i64) -> Result<Loan, ApiError> {
    client::post("/loans/", &BorrowRequest { book_id }).await
}

/// Return a loan; fails unless the loan is currently borrowed.
pub async fn return_loan(loan_id: i64) -> Result<Loan, ApiError> {
    client::post_empty(&format!("/loans/{}/return/", loan_id)).await
}

/// The caller's own loans, optionally narrowed by status.
pub async fn my_loans(
    status: Option<LoanStatusFilter>,
) -> Result<PaginatedResponse<Loan>, ApiError> {
    let path = match status {
        Some(filter) => format!("/loans/my-loans/?status={}", filter.as_query_value()),
        None => "/loans/my-loans/".to_string(),
    };
    client::get(&path).await
}

/// Full loan listing (admin statistics source).
pub async fn all_loans(page: Option<u32>) -> Result<PaginatedResponse<Loan>, ApiError> {
    let path = match page {
        Some(page) => format!("/loans/?page={}", page),
        None => "/loans/".to_string(),
    };
    client::get(&path).await
}
