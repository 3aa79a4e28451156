use crate::domain::metal_rate::api;
use crate::domain::purity::api as purity_api;
use crate::domain::{save_effect, SaveEffect};
use crate::shared::date_utils::today_iso;
use crate::shared::notify::NotifierService;
use contracts::domain::metal_rate::MetalRateDraft;
use contracts::domain::purity::PurityOption;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the rate entry form.
///
/// Besides the draft itself it owns the purity options scoped to the
/// currently selected metal; the options are refetched whenever the metal
/// selection changes and cleared immediately when it is emptied.
#[derive(Clone, Copy)]
pub struct MetalRateFormViewModel {
    pub form: RwSignal<MetalRateDraft>,
    pub purity_options: RwSignal<Vec<PurityOption>>,
    pub saving: RwSignal<bool>,
    notifier: NotifierService,
}

impl MetalRateFormViewModel {
    pub fn new(notifier: NotifierService) -> Self {
        Self {
            form: RwSignal::new(MetalRateDraft {
                date: today_iso(),
                ..MetalRateDraft::default()
            }),
            purity_options: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            notifier,
        }
    }

    /// Replace the purity option list for the given metal selection. An empty
    /// selection empties the options without a network call; a fetch that
    /// yields an empty list is a valid result, not an error.
    pub fn refresh_purity_options(&self, metalname: String) {
        let options = self.purity_options;
        if metalname.trim().is_empty() {
            options.set(Vec::new());
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match purity_api::fetch_purities_for_metal(&metalname).await {
                Ok(list) => options.set(list),
                Err(e) => {
                    log::error!("Failed to fetch purity options: {}", e);
                    options.set(Vec::new());
                }
            }
        });
    }

    /// Save the draft. On 200 the form resets (date back to today) and
    /// `on_saved` runs exactly once so the list reloads; on 406 or failure
    /// the fields stay untouched.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let draft = self.form.get();
        if !draft.is_complete() {
            self.notifier.warning("Please fill all fields");
            return;
        }
        let record = match draft.to_record() {
            Ok(record) => record,
            Err(e) => {
                self.notifier.warning(e);
                return;
            }
        };
        // A second click while a request is outstanding is ignored; the
        // button is also disabled through `saving`.
        if self.saving.get() {
            return;
        }

        let form = self.form;
        let saving = self.saving;
        let notifier = self.notifier;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save_metal_rate(&record).await;
            match save_effect(&result) {
                SaveEffect::ResetAndReload => {
                    notifier.success("Metal rate saved successfully");
                    form.set(MetalRateDraft {
                        date: today_iso(),
                        ..MetalRateDraft::default()
                    });
                    (on_saved)(());
                }
                SaveEffect::KeepFields => {
                    notifier.warning("Metal rate already exists for this date");
                }
                SaveEffect::ReportFailure => {
                    if let Err(e) = &result {
                        log::error!("Error saving metal rate: {}", e);
                    }
                    notifier.error("Error saving metal rate");
                }
            }
            saving.set(false);
        });
    }
}
