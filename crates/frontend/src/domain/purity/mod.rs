pub mod api;
pub mod ui;

use crate::shared::list_view::Filterable;
use contracts::domain::purity::PurityRecord;

impl Filterable for PurityRecord {
    fn filter_fields(&self) -> Vec<&str> {
        vec![&self.metalname, &self.purity]
    }
}
