use crate::domain::purity::api;
use crate::domain::purity::ui::view_model::PurityFormViewModel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::list_view::ListState;
use crate::shared::notify::NotifierService;
use contracts::domain::metals::METALS;
use contracts::domain::purity::PurityRecord;
use leptos::prelude::*;
use std::rc::Rc;

const FILTER_METAL: usize = 0;
const FILTER_PURITY: usize = 1;

/// Purity management panel: entry form plus searchable, paginated list.
#[component]
pub fn PurityManager() -> impl IntoView {
    let notifier =
        use_context::<NotifierService>().expect("NotifierService not found in context");
    let vm = PurityFormViewModel::new(notifier);
    let list = RwSignal::new(ListState::<PurityRecord>::new(2));

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_purities().await {
                Ok(records) => list.update(|l| l.replace_records(records)),
                Err(e) => {
                    log::error!("Error fetching purities: {}", e);
                    notifier.error("Failed to fetch purities");
                }
            }
        });
    };
    load();

    let metal_options = Signal::derive(|| {
        std::iter::once((String::new(), "Select metal".to_string()))
            .chain(METALS.iter().map(|m| (m.to_string(), m.to_string())))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="panel purity-manager">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Purity Management"</h1>
                </div>
            </div>

            <div class="form-row">
                <Select
                    label="Metal"
                    value=Signal::derive(move || vm.form.get().metalname)
                    on_change=Callback::new(move |value: String| {
                        vm.form.update(|f| f.metalname = value);
                    })
                    options=metal_options
                />
                <Input
                    label="Purity"
                    placeholder="Input purity"
                    value=Signal::derive(move || vm.form.get().purity)
                    on_input=Callback::new(move |value: String| {
                        vm.form.update(|f| f.purity = value);
                    })
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

            <div class="table-header">
                <h2 class="table-header__title">"Purity Manager"</h2>
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
                            <th class="table__header-cell">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let visible = list.with(|l| l.visible());
                            if visible.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="3">
                                            "No results found."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                visible
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.id.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.metalname}</td>
                                                <td class="table__cell">{row.purity}</td>
                                                <td class="table__cell">
                                                    <Button
                                                        variant="danger"
                                                        on_click=Callback::new(move |_| {
                                                            vm.delete_command(
                                                                id.clone(),
                                                                Rc::new(move |_| load()),
                                                            );
                                                        })
                                                    >
                                                        "Delete"
                                                    </Button>
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
