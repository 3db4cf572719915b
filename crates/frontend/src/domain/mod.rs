pub mod books;
pub mod loans;
