pub mod api;
pub mod ui;

use crate::shared::list_view::Filterable;
use contracts::domain::metal_rate::MetalRateRecord;

impl Filterable for MetalRateRecord {
    fn filter_fields(&self) -> Vec<&str> {
        vec![&self.metalname, &self.purity]
    }
}

/// Latest rate among the records quoted for `metalname`.
///
/// Picks the maximum date; when two records share that date the one that
/// appears last in server response order wins. Returns `None` for an empty
/// selection or when no record matches, in which case the latest-rate line
/// is suppressed entirely.
pub fn latest_rate_for<'a>(
    records: &'a [MetalRateRecord],
    metalname: &str,
) -> Option<&'a MetalRateRecord> {
    if metalname.trim().is_empty() {
        return None;
    }
    records
        .iter()
        .filter(|r| r.metalname == metalname)
        .fold(None, |best: Option<&MetalRateRecord>, r| match best {
            Some(b) if b.date > r.date => Some(b),
            _ => Some(r),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(metal: &str, rate: f64, date: (i32, u32, u32)) -> MetalRateRecord {
        MetalRateRecord {
            metalname: metal.into(),
            purity: "24K".into(),
            rate,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn picks_maximum_date_for_the_metal() {
        let records = vec![
            record("Gold", 7100.0, (2025, 8, 1)),
            record("Silver", 95.0, (2025, 8, 3)),
            record("Gold", 7250.0, (2025, 8, 2)),
        ];
        let latest = latest_rate_for(&records, "Gold").unwrap();
        assert_eq!(latest.rate, 7250.0);
    }

    #[test]
    fn equal_dates_resolve_to_last_in_input_order() {
        let records = vec![
            record("Gold", 7100.0, (2025, 8, 2)),
            record("Gold", 7250.0, (2025, 8, 2)),
        ];
        let latest = latest_rate_for(&records, "Gold").unwrap();
        assert_eq!(latest.rate, 7250.0);
    }

    #[test]
    fn no_match_is_none() {
        let records = vec![record("Gold", 7100.0, (2025, 8, 1))];
        assert!(latest_rate_for(&records, "Silver").is_none());
        assert!(latest_rate_for(&records, "").is_none());
        assert!(latest_rate_for(&[], "Gold").is_none());
    }
}
