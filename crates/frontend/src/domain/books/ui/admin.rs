use chrono::NaiveDate;
use contracts::domain::book::{Book, BookFilters, BookInput};
use contracts::domain::loan::LoanStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::books::api;
use crate::domain::loans;
use crate::system::auth::guard::RequireAdmin;

/// How many catalog rows the management table loads at once.
const MANAGEMENT_PAGE_SIZE: u32 = 100;

/// Editable form model for the add/edit dialogs. All fields are kept as
/// text while editing; [`BookFormState::to_input`] validates and converts.
#[derive(Clone, Default)]
struct BookFormState {
    id: Option<i64>,
    title: String,
    author: String,
    isbn: String,
    category: String,
    publisher: String,
    publication_date: String,
    page_count: String,
    language: String,
    description: String,
    total_copies: String,
    available_copies: String,
    cover_image: String,
}

impl BookFormState {
    fn from_book(book: &Book) -> Self {
        Self {
            id: Some(book.id),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            category: book.category.clone(),
            publisher: book.publisher.clone().unwrap_or_default(),
            publication_date: book
                .publication_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            page_count: book.page_count.to_string(),
            language: book.language.clone(),
            description: book.description.clone().unwrap_or_default(),
            total_copies: book.total_copies.to_string(),
            available_copies: book.available_copies.to_string(),
            cover_image: book.cover_image.clone().unwrap_or_default(),
        }
    }

    /// Client-side validation and conversion to the API payload. Failures
    /// never reach the server.
    fn to_input(&self) -> Result<BookInput, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("Author is required".to_string());
        }
        if self.isbn.trim().is_empty() {
            return Err("ISBN is required".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".to_string());
        }
        let page_count: u32 = self
            .page_count
            .trim()
            .parse()
            .ok()
            .filter(|count| *count >= 1)
            .ok_or_else(|| "Page count must be a positive number".to_string())?;
        let total_copies: u32 = self
            .total_copies
            .trim()
            .parse()
            .ok()
            .filter(|count| *count >= 1)
            .ok_or_else(|| "Total copies must be a positive number".to_string())?;
        let available_copies: u32 = self
            .available_copies
            .trim()
            .parse()
            .map_err(|_| "Available copies must be zero or more".to_string())?;
        if available_copies > total_copies {
            return Err("Available copies cannot exceed total copies".to_string());
        }
        let publication_date = match self.publication_date.trim() {
            "" => None,
            text => Some(
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .map_err(|_| "Publication date must be YYYY-MM-DD".to_string())?,
            ),
        };

        Ok(BookInput {
            title: Some(self.title.trim().to_string()),
            author: Some(self.author.trim().to_string()),
            isbn: Some(self.isbn.trim().to_string()),
            publisher: optional(&self.publisher),
            publication_date,
            page_count: Some(page_count),
            language: Some(if self.language.trim().is_empty() {
                "en".to_string()
            } else {
                self.language.trim().to_string()
            }),
            description: optional(&self.description),
            category: Some(self.category.trim().to_string()),
            total_copies: Some(total_copies),
            available_copies: Some(available_copies),
            cover_image: optional(&self.cover_image),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminContent />
        </RequireAdmin>
    }
}

#[component]
fn AdminContent() -> impl IntoView {
    let (books, set_books) = signal(Vec::<Book>::new());
    let (total_books, set_total_books) = signal(0u64);
    let (total_loans, set_total_loans) = signal(0u64);
    let (active_loans, set_active_loans) = signal(0usize);
    let (is_loading, set_is_loading) = signal(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);

    // None = dialog closed; Some with/without id = edit/create.
    let form = RwSignal::new(Option::<BookFormState>::None);

    Effect::new(move |_| {
        reload_tick.track();
        spawn_local(async move {
            set_is_loading.set(true);
            set_error_message.set(None);

            let filters = BookFilters {
                page_size: MANAGEMENT_PAGE_SIZE,
                ..BookFilters::default()
            };
            match api::list(&filters).await {
                Ok(page) => {
                    set_total_books.set(page.count);
                    set_books.set(page.results);
                }
                Err(error) => set_error_message.set(Some(error.user_message())),
            }

            match loans::api::all_loans(None).await {
                Ok(page) => {
                    set_total_loans.set(page.count);
                    // active count covers the first page of results
                    set_active_loans.set(
                        page.results
                            .iter()
                            .filter(|loan| loan.status == LoanStatus::Borrowed)
                            .count(),
                    );
                }
                Err(error) => log::warn!("loan statistics fetch failed: {}", error),
            }

            set_is_loading.set(false);
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get() else { return };
        match current.to_input() {
            Err(message) => set_form_error.set(Some(message)),
            Ok(input) => {
                set_is_saving.set(true);
                set_form_error.set(None);
                spawn_local(async move {
                    let result = match current.id {
                        Some(id) => api::update(id, &input).await.map(|_| ()),
                        None => api::create(&input).await.map(|_| ()),
                    };
                    match result {
                        Ok(()) => {
                            form.set(None);
                            set_reload_tick.update(|tick| *tick += 1);
                        }
                        Err(error) => set_form_error.set(Some(error.user_message())),
                    }
                    set_is_saving.set(false);
                });
            }
        }
    };

    let delete_book = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|window| window.confirm_with_message("Delete this book?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => set_reload_tick.update(|tick| *tick += 1),
                Err(error) => set_error_message.set(Some(error.user_message())),
            }
        });
    };

    view! {
        <div class="page admin-page">
            <h1>"Admin Dashboard"</h1>
            <p class="page-subtitle">"Manage books and monitor library statistics"</p>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-label">"Total Books"</span>
                    <span class="stat-value">{move || total_books.get()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Active Loans"</span>
                    <span class="stat-value">{move || active_loans.get()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Total Loans"</span>
                    <span class="stat-value">{move || total_loans.get()}</span>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>"Books Management"</h2>
                    <button
                        class="btn-primary"
                        on:click=move |_| form.set(Some(BookFormState::default()))
                    >
                        "Add Book"
                    </button>
                </div>

                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Author"</th>
                                <th>"Category"</th>
                                <th>"Available"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || books.get()
                                key=|book| book.id
                                children=move |book| {
                                    let row = StoredValue::new(book);
                                    view! {
                                        <tr>
                                            <td>{move || row.get_value().title}</td>
                                            <td>{move || row.get_value().author}</td>
                                            <td>{move || row.get_value().category}</td>
                                            <td>
                                                {move || {
                                                    let book = row.get_value();
                                                    format!(
                                                        "{}/{}",
                                                        book.available_copies,
                                                        book.total_copies
                                                    )
                                                }}
                                            </td>
                                            <td class="admin-actions">
                                                <button
                                                    class="btn-link"
                                                    on:click=move |_| {
                                                        form.set(
                                                            Some(BookFormState::from_book(&row.get_value())),
                                                        )
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn-link btn-danger"
                                                    on:click=move |_| delete_book(row.get_value().id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>

            // Show tracks only open/closed, so typing into the form does
            // not re-mount the dialog.
            <Show when=move || form.with(|state| state.is_some())>
                <div class="modal-overlay" on:click=move |_| form.set(None)>
                    <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2>
                                {move || {
                                    let is_edit = form
                                        .with(|state| {
                                            state.as_ref().is_some_and(|s| s.id.is_some())
                                        });
                                    if is_edit { "Edit Book" } else { "Add New Book" }
                                }}
                            </h2>
                            <button class="modal-close" on:click=move |_| form.set(None)>
                                "×"
                            </button>
                        </div>
                        <Show when=move || form_error.get().is_some()>
                            <div class="error-message">
                                {move || form_error.get().unwrap_or_default()}
                            </div>
                        </Show>
                        <form on:submit=on_save>
                            <div class="form-grid">
                                <BookFormFields form=form is_saving=is_saving />
                            </div>
                            <button
                                type="submit"
                                class="btn-primary"
                                disabled=move || is_saving.get()
                            >
                                {move || {
                                    let is_edit = form
                                        .with(|state| {
                                            state.as_ref().is_some_and(|s| s.id.is_some())
                                        });
                                    if is_saving.get() {
                                        "Saving..."
                                    } else if is_edit {
                                        "Update Book"
                                    } else {
                                        "Add Book"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Text inputs for every editable book field, bound to the shared form
/// signal.
#[component]
fn BookFormFields(
    form: RwSignal<Option<BookFormState>>,
    #[prop(into)] is_saving: Signal<bool>,
) -> impl IntoView {
    let text_field = move |label: &'static str,
                           value: fn(&BookFormState) -> String,
                           write: fn(&mut BookFormState, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    prop:value=move || {
                        form.with(|state| state.as_ref().map(value).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        form.update(|state| {
                            if let Some(state) = state.as_mut() {
                                write(state, event_target_value(&ev));
                            }
                        })
                    }
                    disabled=move || is_saving.get()
                />
            </div>
        }
    };

    view! {
        {text_field("Title", |s| s.title.clone(), |s, v| s.title = v)}
        {text_field("Author", |s| s.author.clone(), |s, v| s.author = v)}
        {text_field("ISBN", |s| s.isbn.clone(), |s, v| s.isbn = v)}
        {text_field("Category", |s| s.category.clone(), |s, v| s.category = v)}
        {text_field("Publisher", |s| s.publisher.clone(), |s, v| s.publisher = v)}
        {text_field(
            "Publication Date (YYYY-MM-DD)",
            |s| s.publication_date.clone(),
            |s, v| s.publication_date = v,
        )}
        {text_field("Page Count", |s| s.page_count.clone(), |s, v| s.page_count = v)}
        {text_field("Language", |s| s.language.clone(), |s, v| s.language = v)}
        {text_field("Total Copies", |s| s.total_copies.clone(), |s, v| s.total_copies = v)}
        {text_field(
            "Available Copies",
            |s| s.available_copies.clone(),
            |s, v| s.available_copies = v,
        )}
        {text_field("Description", |s| s.description.clone(), |s, v| s.description = v)}
        {text_field("Cover Image URL", |s| s.cover_image.clone(), |s, v| s.cover_image = v)}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> BookFormState {
        BookFormState {
            id: None,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            isbn: "9780441013593".into(),
            category: "Science Fiction".into(),
            publisher: String::new(),
            publication_date: "1965-08-01".into(),
            page_count: "412".into(),
            language: "en".into(),
            description: "  ".into(),
            total_copies: "3".into(),
            available_copies: "3".into(),
            cover_image: String::new(),
        }
    }

    #[test]
    fn complete_form_converts_to_input() {
        let input = complete_form().to_input().unwrap();
        assert_eq!(input.title.as_deref(), Some("Dune"));
        assert_eq!(input.page_count, Some(412));
        assert_eq!(
            input.publication_date,
            Some(NaiveDate::from_ymd_opt(1965, 8, 1).unwrap())
        );
        // blank optionals are omitted entirely
        assert_eq!(input.publisher, None);
        assert_eq!(input.description, None);
        assert_eq!(input.cover_image, None);
    }

    #[test]
    fn required_text_fields_are_enforced() {
        let mut form = complete_form();
        form.title = "  ".into();
        assert_eq!(form.to_input().unwrap_err(), "Title is required");
    }

    #[test]
    fn numeric_fields_must_parse_and_be_positive() {
        let mut form = complete_form();
        form.page_count = "lots".into();
        assert!(form.to_input().is_err());

        let mut form = complete_form();
        form.total_copies = "0".into();
        assert!(form.to_input().is_err());
    }

    #[test]
    fn available_copies_cannot_exceed_total() {
        let mut form = complete_form();
        form.available_copies = "4".into();
        assert_eq!(
            form.to_input().unwrap_err(),
            "Available copies cannot exceed total copies"
        );
    }

    #[test]
    fn malformed_publication_date_is_rejected() {
        let mut form = complete_form();
        form.publication_date = "01/08/1965".into();
        assert!(form.to_input().is_err());
    }

    #[test]
    fn language_defaults_when_blank() {
        let mut form = complete_form();
        form.language = String::new();
        assert_eq!(form.to_input().unwrap().language.as_deref(), Some("en"));
    }
}
