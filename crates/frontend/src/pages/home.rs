use crate::domain::metal_rate::ui::MetalRateManager;
use crate::domain::purity::ui::PurityManager;
use leptos::prelude::*;

/// Single page composing both management panels.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <PurityManager />
            <MetalRateManager />
        </div>
    }
}
