//! Client-side list derivation: search filtering and pagination over a
//! record set fetched in full.
//!
//! The state is a pure value (records + filter texts + 1-based page); every
//! view is derived on read. Page navigation only re-slices, it never
//! refetches. The record set is replaced wholesale after a reload, never
//! patched field-by-field.

/// Fixed page size for every paginated table.
pub const PAGE_SIZE: usize = 5;

/// A record whose fields can be matched against per-field filter text.
pub trait Filterable {
    /// Values of the filterable fields, in the same order as the filter
    /// texts handed to [`ListState::set_filter`].
    fn filter_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match used by every list filter.
/// An empty filter matches everything.
pub fn matches_filter(value: &str, filter: &str) -> bool {
    value.to_lowercase().contains(&filter.to_lowercase())
}

/// Number of pages for a filtered set; at least 1 even when it is empty.
pub fn total_page_count(filtered_len: usize, page_size: usize) -> usize {
    filtered_len.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages)
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    records: Vec<T>,
    filters: Vec<String>,
    page: usize,
}

impl<T: Filterable + Clone> ListState<T> {
    pub fn new(filter_count: usize) -> Self {
        Self {
            records: Vec::new(),
            filters: vec![String::new(); filter_count],
            page: 1,
        }
    }

    /// Wholesale replacement after a reload. The page is kept and clamped on
    /// read, so a shrunken set can never leave a dangling page number.
    pub fn replace_records(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn filter(&self, index: usize) -> String {
        self.filters.get(index).cloned().unwrap_or_default()
    }

    /// Changing any filter resets the page to 1 so a stale page number can
    /// never point past the narrowed set.
    pub fn set_filter(&mut self, index: usize, text: String) {
        if let Some(slot) = self.filters.get_mut(index) {
            *slot = text;
            self.page = 1;
        }
    }

    fn matches(&self, record: &T) -> bool {
        record
            .filter_fields()
            .iter()
            .zip(self.filters.iter())
            .all(|(value, filter)| matches_filter(value, filter))
    }

    /// All records matching every active filter, in original relative order.
    pub fn filtered(&self) -> Vec<T> {
        self.records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        let filtered_len = self.records.iter().filter(|r| self.matches(r)).count();
        total_page_count(filtered_len, PAGE_SIZE)
    }

    /// Current page, clamped into the valid range.
    pub fn page(&self) -> usize {
        clamp_page(self.page, self.total_pages())
    }

    /// The slice of the filtered set shown on the current page.
    pub fn visible(&self) -> Vec<T> {
        let filtered = self.filtered();
        let page = clamp_page(self.page, total_page_count(filtered.len(), PAGE_SIZE));
        filtered
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        self.page = self.page().saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        let page = clamp_page(self.page, total);
        self.page = if page < total { page + 1 } else { page };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        metal: String,
        grade: String,
    }

    impl Row {
        fn new(metal: &str, grade: &str) -> Self {
            Self {
                metal: metal.into(),
                grade: grade.into(),
            }
        }
    }

    impl Filterable for Row {
        fn filter_fields(&self) -> Vec<&str> {
            vec![&self.metal, &self.grade]
        }
    }

    fn seven_rows() -> Vec<Row> {
        vec![
            Row::new("Gold", "24K"),
            Row::new("Gold", "22K"),
            Row::new("Silver", "999"),
            Row::new("Silver", "925"),
            Row::new("Platinum", "950"),
            Row::new("Gold", "18K"),
            Row::new("Copper", "C110"),
        ]
    }

    fn state_with(rows: Vec<Row>) -> ListState<Row> {
        let mut state = ListState::new(2);
        state.replace_records(rows);
        state
    }

    #[test]
    fn visible_is_subset_of_filtered_and_bounded_by_page_size() {
        let mut state = state_with(seven_rows());
        state.set_filter(0, "gold".into());

        let filtered = state.filtered();
        let visible = state.visible();
        assert!(visible.len() <= PAGE_SIZE);
        assert!(visible.iter().all(|v| filtered.contains(v)));
        assert!(filtered.iter().all(|f| state.records().contains(f)));
    }

    #[test]
    fn seven_records_page_one_shows_first_five() {
        let state = state_with(seven_rows());
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page(), 1);
        assert_eq!(state.visible(), seven_rows()[..5].to_vec());
    }

    #[test]
    fn next_shows_remaining_two() {
        let mut state = state_with(seven_rows());
        state.next_page();
        assert_eq!(state.page(), 2);
        assert_eq!(state.visible(), seven_rows()[5..].to_vec());
        assert!(!state.has_next());
        assert!(state.has_prev());
    }

    #[test]
    fn navigation_never_leaves_valid_range() {
        let mut state = state_with(seven_rows());
        state.prev_page();
        assert_eq!(state.page(), 1);
        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn filtering_is_case_insensitive_and_anded() {
        let mut state = state_with(seven_rows());
        state.set_filter(0, "SILVER".into());
        state.set_filter(1, "92".into());
        assert_eq!(state.filtered(), vec![Row::new("Silver", "925")]);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = state_with(seven_rows());
        state.next_page();
        assert_eq!(state.page(), 2);
        state.set_filter(0, "gold".into());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn narrowing_filter_clamps_out_of_range_page() {
        let mut state = state_with(seven_rows());
        state.next_page();
        // Narrow without going through set_filter to exercise the clamp.
        state.replace_records(vec![Row::new("Gold", "24K"), Row::new("Gold", "22K")]);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page(), 1);
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn empty_set_still_has_one_page() {
        let state = state_with(Vec::new());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page(), 1);
        assert!(state.visible().is_empty());
        assert!(!state.has_prev());
        assert!(!state.has_next());
    }

    #[test]
    fn no_match_filter_yields_empty_visible() {
        let mut state = state_with(seven_rows());
        state.set_filter(0, "rhodium".into());
        assert!(state.visible().is_empty());
        assert_eq!(state.total_pages(), 1);
        assert!(!state.has_next());
    }
}
