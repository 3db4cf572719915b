use contracts::domain::book::Book;
use leptos::prelude::*;

/// Catalog card for one book.
#[component]
pub fn BookCard(
    book: Book,
    #[prop(into)] is_borrowing: Signal<bool>,
    on_borrow: Callback<Book>,
    on_details: Callback<Book>,
) -> impl IntoView {
    let book = StoredValue::new(book);

    let availability = move || {
        let current = book.get_value();
        format!(
            "{}/{} available",
            current.available_copies, current.total_copies
        )
    };

    view! {
        <div class="book-card">
            {move || {
                book.get_value()
                    .cover_image
                    .map(|src| view! { <img class="book-cover" src=src alt="Book cover" /> })
            }}
            <div class="book-card-body">
                <h3 class="book-title">{move || book.get_value().title}</h3>
                <p class="book-author">{move || format!("by {}", book.get_value().author)}</p>
                <span class="book-category">{move || book.get_value().category}</span>
                <p class=move || {
                    if book.get_value().is_available {
                        "book-availability"
                    } else {
                        "book-availability unavailable"
                    }
                }>{availability}</p>
            </div>
            <div class="book-card-actions">
                <button class="btn-secondary" on:click=move |_| on_details.run(book.get_value())>
                    "Details"
                </button>
                <button
                    class="btn-primary"
                    disabled=move || is_borrowing.get() || !book.get_value().is_available
                    on:click=move |_| on_borrow.run(book.get_value())
                >
                    {move || {
                        if is_borrowing.get() {
                            "Borrowing..."
                        } else if book.get_value().is_available {
                            "Borrow"
                        } else {
                            "Unavailable"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
