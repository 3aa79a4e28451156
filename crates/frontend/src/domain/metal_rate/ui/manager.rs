use crate::domain::metal_rate::ui::view_model::MetalRateFormViewModel;
use crate::domain::metal_rate::{api, latest_rate_for};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, DateInput, Input, Select};
use crate::shared::date_utils::format_naive_date;
use crate::shared::list_view::ListState;
use crate::shared::notify::NotifierService;
use contracts::domain::metal_rate::{MetalRateRecord, RateQuery};
use contracts::domain::metals::METALS;
use leptos::prelude::*;
use std::rc::Rc;

const FILTER_METAL: usize = 0;
const FILTER_PURITY: usize = 1;

/// Metal rate panel: entry form with latest-rate hint plus searchable,
/// paginated rate listing.
#[component]
pub fn MetalRateManager() -> impl IntoView {
    let notifier =
        use_context::<NotifierService>().expect("NotifierService not found in context");
    let vm = MetalRateFormViewModel::new(notifier);
    let list = RwSignal::new(ListState::<MetalRateRecord>::new(2));

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_metal_rates(&RateQuery::default()).await {
                Ok(records) => list.update(|l| l.replace_records(records)),
                Err(e) => {
                    log::error!("Error fetching metal rates: {}", e);
                    notifier.error("Failed to fetch metal rates");
                }
            }
        });
    };
    load();

    // Track only the metal selection, not every keystroke in the form.
    let selected_metal = Memo::new(move |_| vm.form.get().metalname);
    Effect::new(move || {
        vm.refresh_purity_options(selected_metal.get());
    });

    let metal_options = Signal::derive(|| {
        std::iter::once((String::new(), "Select metal".to_string()))
            .chain(METALS.iter().map(|m| (m.to_string(), m.to_string())))
            .collect::<Vec<_>>()
    });

    let purity_options = Signal::derive(move || {
        std::iter::once((String::new(), "Select purity".to_string()))
            .chain(
                vm.purity_options
                    .get()
                    .into_iter()
                    .map(|o| (o.purity.clone(), o.purity)),
            )
            .collect::<Vec<_>>()
    });

    // Suppressed entirely when no record matches the selected metal.
    let latest_info = move || {
        list.with(|l| {
            latest_rate_for(l.records(), &selected_metal.get())
                .map(|r| (r.rate, format_naive_date(r.date)))
        })
    };

    view! {
        <div class="panel metal-rate-manager">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Metal Rate Management"</h1>
                </div>
            </div>

            <div class="form-grid">
                <Select
                    label="Metal"
                    value=Signal::derive(move || vm.form.get().metalname)
                    on_change=Callback::new(move |value: String| {
                        vm.form.update(|f| f.metalname = value);
                    })
                    options=metal_options
                />
                <Input
                    label="Rate"
                    placeholder="Input rate"
                    value=Signal::derive(move || vm.form.get().rate)
                    on_input=Callback::new(move |value: String| {
                        vm.form.update(|f| f.rate = value);
                    })
                />
                <div class="form__group">
                    {move || latest_info().map(|(rate, date)| view! {
                        <p class="latest-rate">
                            "Latest Rate: "
                            <span class="latest-rate__value">{rate}</span>
                            " at "
                            <span class="latest-rate__value">{date}</span>
                        </p>
                    })}
                    <DateInput
                        label="Date"
                        value=Signal::derive(move || vm.form.get().date)
                        on_change=Callback::new(move |value: String| {
                            vm.form.update(|f| f.date = value);
                        })
                    />
                </div>
                <div class="form-row">
                    <Select
                        label="Purity"
                        value=Signal::derive(move || vm.form.get().purity)
                        on_change=Callback::new(move |value: String| {
                            vm.form.update(|f| f.purity = value);
                        })
                        options=purity_options
                    />
                    <Button
                        disabled=Signal::derive(move || vm.saving.get())
                        on_click=Callback::new(move |_| {
                            vm.save_command(Rc::new(move |_| load()));
                        })
                    >
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>

            <div class="table-header">
                <h2 class="table-header__title">"Metal Rate Manager"</h2>
                <div class="table-header__filters">
                    <Input
                        label="Search Metal"
                        value=Signal::derive(move || list.with(|l| l.filter(FILTER_METAL)))
                        on_input=Callback::new(move |value: String| {
                            list.update(|l| l.set_filter(FILTER_METAL, value));
                        })
                    />
                    <Input
                        label="Search Purity"
                        value=Signal::derive(move || list.with(|l| l.filter(FILTER_PURITY)))
                        on_input=Callback::new(move |value: String| {
                            list.update(|l| l.set_filter(FILTER_PURITY, value));
                        })
                    />
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Metal"</th>
                            <th class="table__header-cell">"Purity"</th>
                            <th class="table__header-cell">"Rate"</th>
                            <th class="table__header-cell">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let visible = list.with(|l| l.visible());
                            if visible.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="4">
                                            "No results found."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                visible
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.metalname}</td>
                                                <td class="table__cell">{row.purity}</td>
                                                <td class="table__cell">{row.rate}</td>
                                                <td class="table__cell">
                                                    {format_naive_date(row.date)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                page=Signal::derive(move || list.with(|l| l.page()))
                total_pages=Signal::derive(move || list.with(|l| l.total_pages()))
                has_prev=Signal::derive(move || list.with(|l| l.has_prev()))
                has_next=Signal::derive(move || list.with(|l| l.has_next()))
                on_prev=Callback::new(move |_| list.update(|l| l.prev_page()))
                on_next=Callback::new(move |_| list.update(|l| l.next_page()))
            />
        </div>
    }
}
