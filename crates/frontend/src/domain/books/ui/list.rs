use contracts::domain::book::{Book, BookFilters};
use contracts::shared::pagination::PaginatedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::books::api;
use crate::domain::loans;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_day;
use crate::system::auth::context::use_session;

use super::card::BookCard;

#[component]
pub fn BooksPage() -> impl IntoView {
    let session = use_session();

    let filters = RwSignal::new(BookFilters::default());
    let (page_data, set_page_data) = signal(PaginatedResponse::<Book>::default());
    let (categories, set_categories) = signal(Vec::<String>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (borrowing_id, set_borrowing_id) = signal(Option::<i64>::None);
    let (selected_book, set_selected_book) = signal(Option::<Book>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);

    // A fresh request on every filter change (pagination included) and
    // after each completed mutation. No caching, no client-side sorting.
    Effect::new(move |_| {
        let current = filters.get();
        reload_tick.track();
        spawn_local(async move {
            set_is_loading.set(true);
            set_error_message.set(None);
            match api::list(&current).await {
                Ok(page) => set_page_data.set(page),
                Err(error) => set_error_message.set(Some(error.user_message())),
            }
            set_is_loading.set(false);
        });
    });

    // Category enumeration is filter-independent; fetched once.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::categories().await {
                Ok(list) => set_categories.set(list),
                Err(error) => log::warn!("category fetch failed: {}", error),
            }
        });
    });

    let on_borrow = Callback::new(move |book: Book| {
        if !session.state().get_untracked().is_authenticated() {
            set_error_message.set(Some("Please log in to borrow books.".to_string()));
            return;
        }
        set_borrowing_id.set(Some(book.id));
        spawn_local(async move {
            match loans::api::borrow(book.id).await {
                // no optimistic update; the re-fetch is the source of truth
                Ok(_) => set_reload_tick.update(|tick| *tick += 1),
                Err(error) => set_error_message.set(Some(error.user_message())),
            }
            set_borrowing_id.set(None);
        });
    });

    let on_details = Callback::new(move |book: Book| set_selected_book.set(Some(book)));

    let on_search = Callback::new(move |text: String| {
        filters.update(|f| {
            let trimmed = text.trim();
            f.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
            f.page = 1;
        });
    });

    let on_category_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| {
            f.category = (!value.is_empty()).then_some(value);
            f.page = 1;
        });
    };

    let on_availability_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| {
            f.available = match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            };
            f.page = 1;
        });
    };

    let on_page_change = Callback::new(move |page: u32| {
        filters.update(|f| f.page = page);
    });

    view! {
        <div class="page books-page">
            <h1>"Browse Books"</h1>
            <p class="page-subtitle">"Discover your next favorite read"</p>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || filters.get().search.unwrap_or_default())
                    on_change=on_search
                    placeholder="Search by title, author, or ISBN..."
                />
                <select on:change=on_category_change>
                    <option value="">"All Categories"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            let label = category.clone();
                            view! { <option value=category>{label}</option> }
                        }
                    />
                </select>
                <select on:change=on_availability_change>
                    <option value="">"All Books"</option>
                    <option value="true">"Available Only"</option>
                    <option value="false">"Unavailable"</option>
                </select>
            </div>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                <div class="results-summary">
                    {move || {
                        let page = page_data.get();
                        format!("Showing {} of {} books", page.results.len(), page.count)
                    }}
                </div>

                <div class="book-grid">
                    <For
                        each=move || page_data.get().results
                        key=|book| book.id
                        children=move |book| {
                            let id = book.id;
                            view! {
                                <BookCard
                                    book=book
                                    is_borrowing=Signal::derive(move || {
                                        borrowing_id.get() == Some(id)
                                    })
                                    on_borrow=on_borrow
                                    on_details=on_details
                                />
                            }
                        }
                    />
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || filters.get().page)
                    total_pages=Signal::derive(move || {
                        page_data.get().total_pages(filters.get().page_size)
                    })
                    total_count=Signal::derive(move || page_data.get().count)
                    on_page_change=on_page_change
                />
            </Show>

            {move || {
                selected_book
                    .get()
                    .map(|book| {
                        view! {
                            <BookDetails
                                book=book
                                on_close=Callback::new(move |_| set_selected_book.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Read-only details overlay for a selected book.
#[component]
fn BookDetails(book: Book, on_close: Callback<()>) -> impl IntoView {
    let publication = book.publication_date.as_ref().map(format_day);
    let availability = format!("{}/{} available", book.available_copies, book.total_copies);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{book.title.clone()}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    <p class="book-author">{format!("by {}", book.author)}</p>
                    <dl class="book-details">
                        <dt>"ISBN"</dt>
                        <dd>{book.isbn.clone()}</dd>
                        <dt>"Category"</dt>
                        <dd>{book.category.clone()}</dd>
                        {book
                            .publisher
                            .clone()
                            .map(|publisher| {
                                view! {
                                    <dt>"Publisher"</dt>
                                    <dd>{publisher}</dd>
                                }
                            })}
                        {publication
                            .map(|date| {
                                view! {
                                    <dt>"Published"</dt>
                                    <dd>{date}</dd>
                                }
                            })}
                        <dt>"Pages"</dt>
                        <dd>{book.page_count}</dd>
                        <dt>"Language"</dt>
                        <dd>{book.language.clone()}</dd>
                        <dt>"Availability"</dt>
                        <dd>{availability}</dd>
                    </dl>
                    {book
                        .description
                        .clone()
                        .map(|description| view! { <p class="book-description">{description}</p> })}
                </div>
            </div>
        </div>
    }
}
