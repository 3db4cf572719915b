use contracts::domain::loan::{Loan, LoanStatus, LoanStatusFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::loans::api;
use crate::shared::date_utils::format_date;
use crate::system::auth::guard::RequireAuth;

const FILTER_TABS: [(&str, Option<LoanStatusFilter>); 4] = [
    ("All Loans", None),
    ("Active", Some(LoanStatusFilter::Active)),
    ("Returned", Some(LoanStatusFilter::Returned)),
    ("Overdue", Some(LoanStatusFilter::Overdue)),
];

#[component]
pub fn MyLoansPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <LoansContent />
        </RequireAuth>
    }
}

#[component]
fn LoansContent() -> impl IntoView {
    let (status_filter, set_status_filter) = signal(Option::<LoanStatusFilter>::None);
    let (loans, set_loans) = signal(Vec::<Loan>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (returning_id, set_returning_id) = signal(Option::<i64>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);

    Effect::new(move |_| {
        let filter = status_filter.get();
        reload_tick.track();
        spawn_local(async move {
            set_is_loading.set(true);
            set_error_message.set(None);
            match api::my_loans(filter).await {
                Ok(page) => set_loans.set(page.results),
                Err(error) => set_error_message.set(Some(error.user_message())),
            }
            set_is_loading.set(false);
        });
    });

    let handle_return = move |loan_id: i64| {
        set_returning_id.set(Some(loan_id));
        spawn_local(async move {
            match api::return_loan(loan_id).await {
                // the re-fetch reflects the server's view of the loan
                Ok(_) => set_reload_tick.update(|tick| *tick += 1),
                Err(error) => set_error_message.set(Some(error.user_message())),
            }
            set_returning_id.set(None);
        });
    };

    view! {
        <div class="page loans-page">
            <h1>"My Loans"</h1>
            <p class="page-subtitle">"Manage your borrowed books"</p>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <div class="filter-tabs">
                {FILTER_TABS
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <button
                                class=move || {
                                    if status_filter.get() == value {
                                        "filter-tab active"
                                    } else {
                                        "filter-tab"
                                    }
                                }
                                on:click=move |_| set_status_filter.set(value)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                <Show
                    when=move || !loans.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p>"No loans found"</p>
                                <a href="/books" class="btn-primary">
                                    "Browse Books"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="loan-list">
                        <For
                            each=move || loans.get()
                            key=|loan| loan.id
                            children=move |loan| {
                                view! {
                                    <LoanRow
                                        loan=loan
                                        returning_id=returning_id
                                        on_return=Callback::new(handle_return)
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn LoanRow(
    loan: Loan,
    #[prop(into)] returning_id: Signal<Option<i64>>,
    on_return: Callback<i64>,
) -> impl IntoView {
    let loan_id = loan.id;
    let is_returned = loan.status == LoanStatus::Returned;
    let show_overdue = loan.is_overdue && !is_returned;
    let overdue_text = format!(
        "Overdue by {} days - Fine: ${}",
        loan.days_overdue, loan.fine_amount
    );
    let status_class = match loan.status {
        LoanStatus::Borrowed => "loan-status borrowed",
        LoanStatus::Returned => "loan-status returned",
        LoanStatus::Overdue => "loan-status overdue",
    };
    let status_text = match loan.status {
        LoanStatus::Borrowed => "BORROWED",
        LoanStatus::Returned => "RETURNED",
        LoanStatus::Overdue => "OVERDUE",
    };
    let returned_text = loan
        .return_date
        .as_ref()
        .map(|date| format!("Returned: {}", format_date(date)));

    view! {
        <div class="loan-card">
            <div class="loan-card-body">
                <h3>{loan.book.title.clone()}</h3>
                <p class="book-author">{format!("by {}", loan.book.author)}</p>
                <div class="loan-dates">
                    <span>{format!("Borrowed: {}", format_date(&loan.borrow_date))}</span>
                    <span>{format!("Due: {}", format_date(&loan.due_date))}</span>
                    {returned_text.map(|text| view! { <span class="loan-returned">{text}</span> })}
                </div>
                <Show when=move || show_overdue>
                    <div class="overdue-notice">{overdue_text.clone()}</div>
                </Show>
                <span class=status_class>{status_text}</span>
            </div>
            <Show when=move || !is_returned>
                <div class="loan-card-actions">
                    <button
                        class="btn-primary"
                        disabled=move || returning_id.get() == Some(loan_id)
                        on:click=move |_| on_return.run(loan_id)
                    >
                        {move || {
                            if returning_id.get() == Some(loan_id) {
                                "Returning..."
                            } else {
                                "Return Book"
                            }
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
