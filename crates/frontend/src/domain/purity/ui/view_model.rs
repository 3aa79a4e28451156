use crate::domain::purity::api;
use crate::domain::{save_effect, SaveEffect};
use crate::shared::notify::NotifierService;
use contracts::domain::purity::PurityDraft;
use leptos::prelude::*;
use std::rc::Rc;

/// Records missing a server-assigned id cannot be addressed for deletion.
fn is_valid_record_id(id: &str) -> bool {
    !id.trim().is_empty()
}

/// ViewModel for the purity entry form.
#[derive(Clone, Copy)]
pub struct PurityFormViewModel {
    pub form: RwSignal<PurityDraft>,
    pub saving: RwSignal<bool>,
    notifier: NotifierService,
}

impl PurityFormViewModel {
    pub fn new(notifier: NotifierService) -> Self {
        Self {
            form: RwSignal::new(PurityDraft::default()),
            saving: RwSignal::new(false),
            notifier,
        }
    }

    /// Save the draft. On 200 the form resets and `on_saved` runs exactly
    /// once so the sibling list reloads; on 406 or failure the fields stay
    /// untouched for correction and retry.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let draft = self.form.get();
        if !draft.is_complete() {
            self.notifier
                .warning("Please select a metal and enter a purity value");
            return;
        }
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
            let result = api::save_purity(&draft).await;
            match save_effect(&result) {
                SaveEffect::ResetAndReload => {
                    notifier.success("Purity saved successfully");
                    form.set(PurityDraft::default());
                    (on_saved)(());
                }
                SaveEffect::KeepFields => {
                    notifier.warning("Purity already exists");
                }
                SaveEffect::ReportFailure => {
                    if let Err(e) = &result {
                        log::error!("Error saving purity: {}", e);
                    }
                    notifier.error("Error saving purity");
                }
            }
            saving.set(false);
        });
    }

    /// Delete a record from the list. An empty id is a caller-side error and
    /// never becomes a network request.
    pub fn delete_command(&self, id: String, on_deleted: Rc<dyn Fn(())>) {
        if !is_valid_record_id(&id) {
            self.notifier.error("Error deleting purity: invalid id");
            return;
        }

        let notifier = self.notifier;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_purity(&id).await {
                Ok(()) => {
                    notifier.info("Purity deleted successfully");
                    (on_deleted)(());
                }
                Err(e) => {
                    log::error!("Error deleting purity {}: {}", id, e);
                    notifier.error("Failed to delete purity");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected_before_any_request() {
        assert!(!is_valid_record_id(""));
        assert!(!is_valid_record_id("   "));
    }

    #[test]
    fn server_assigned_ids_pass_the_guard() {
        assert!(is_valid_record_id("66b2f0a1c9d4e83f5a7b1c2d"));
    }
}
