use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-indexed to match the server's paging contract.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u64>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                "Previous"
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({} items)",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if u64::from(page) < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || u64::from(current_page.get()) >= total_pages.get()
                title="Next page"
            >
                "Next"
            </button>
        </div>
    }
}
