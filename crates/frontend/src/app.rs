use crate::pages::home::Home;
use crate::shared::notify::{NotifierService, ToastHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the notifier to the whole app via context so view models stay
    // decoupled from the toast rendering.
    provide_context(NotifierService::new());

    view! {
        <Home />
        <ToastHost />
    }
}
