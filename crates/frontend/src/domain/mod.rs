pub mod metal_rate;
pub mod purity;

/// Outcome of a create call.
///
/// The backend answers 200 for a created record and exactly 406 when the
/// combination already exists; callers branch on this to show a duplicate
/// warning instead of a generic error. Any other status is a plain `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Duplicate,
}

/// What a finished create call does to the form and the surrounding list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEffect {
    /// Created: success notification, reset the form, reload the list.
    ResetAndReload,
    /// Duplicate: warning notification, fields kept for correction.
    KeepFields,
    /// Request failed: error notification, fields kept for retry.
    ReportFailure,
}

impl SaveEffect {
    /// The draft is cleared only after a confirmed create.
    pub fn resets_form(self) -> bool {
        matches!(self, SaveEffect::ResetAndReload)
    }

    /// The list reloads exactly when the server accepted the record.
    pub fn reloads(self) -> bool {
        matches!(self, SaveEffect::ResetAndReload)
    }
}

/// Map a create-call result onto the single allowed form transition. Both
/// entry forms route their completion handling through this so a duplicate
/// or a failure can never trigger a reload or wipe the user's input.
pub fn save_effect<E>(result: &Result<SaveOutcome, E>) -> SaveEffect {
    match result {
        Ok(SaveOutcome::Created) => SaveEffect::ResetAndReload,
        Ok(SaveOutcome::Duplicate) => SaveEffect::KeepFields,
        Err(_) => SaveEffect::ReportFailure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_resets_form_and_reloads() {
        let effect = save_effect::<String>(&Ok(SaveOutcome::Created));
        assert_eq!(effect, SaveEffect::ResetAndReload);
        assert!(effect.resets_form());
        assert!(effect.reloads());
    }

    #[test]
    fn duplicate_keeps_fields_and_skips_reload() {
        let effect = save_effect::<String>(&Ok(SaveOutcome::Duplicate));
        assert_eq!(effect, SaveEffect::KeepFields);
        assert!(!effect.resets_form());
        assert!(!effect.reloads());
    }

    #[test]
    fn transport_failure_keeps_fields_and_skips_reload() {
        let effect = save_effect(&Err::<SaveOutcome, _>("Request failed: timeout".to_string()));
        assert_eq!(effect, SaveEffect::ReportFailure);
        assert!(!effect.resets_form());
        assert!(!effect.reloads());
    }
}
