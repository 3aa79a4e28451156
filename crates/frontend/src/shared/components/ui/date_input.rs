use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays dates in locale format; the value stays yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: Callback<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                class="form__input"
                type="date"
                prop:value=move || value.get()
                disabled=disabled
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
        </div>
    }
}
