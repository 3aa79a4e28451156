use leptos::prelude::*;

/// PaginationControls component - Prev / "Page x of y" / Next
///
/// Works on a 1-based page number derived by the list state; the buttons
/// only navigate, they never trigger a refetch.
#[component]
pub fn PaginationControls(
    /// Current page (1-based, already clamped)
    #[prop(into)]
    page: Signal<usize>,

    /// Total number of pages (>= 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Whether a previous page exists
    #[prop(into)]
    has_prev: Signal<bool>,

    /// Whether a next page exists
    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback for the Prev button
    on_prev: Callback<()>,

    /// Callback for the Next button
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                disabled=move || !has_prev.get()
                on:click=move |_| on_prev.run(())
            >
                "Prev"
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                disabled=move || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
