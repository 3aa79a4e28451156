use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dated price quotation for one metal+purity combination.
///
/// The backend rejects duplicate `(metalname, purity, date)` combinations
/// with HTTP 406. Rate records are created by this client, never updated or
/// deleted. Dates travel as ISO-8601 (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalRateRecord {
    pub metalname: String,
    pub purity: String,
    pub rate: f64,
    pub date: NaiveDate,
}

/// In-progress user input for a new rate record.
///
/// Rate and date are kept as raw input text until submission; `to_record`
/// performs the parse so the form can surface a readable message instead of
/// sending garbage to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetalRateDraft {
    pub metalname: String,
    pub purity: String,
    pub rate: String,
    pub date: String,
}

impl MetalRateDraft {
    /// Submission is permitted only when every field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.metalname.trim().is_empty()
            && !self.purity.trim().is_empty()
            && !self.rate.trim().is_empty()
            && !self.date.trim().is_empty()
    }

    /// Parse the draft into a wire record.
    pub fn to_record(&self) -> Result<MetalRateRecord, String> {
        let rate: f64 = self
            .rate
            .trim()
            .parse()
            .map_err(|_| format!("Rate must be a number, got \"{}\"", self.rate))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| format!("Date must be YYYY-MM-DD, got \"{}\"", self.date))?;
        Ok(MetalRateRecord {
            metalname: self.metalname.trim().to_string(),
            purity: self.purity.trim().to_string(),
            rate,
            date,
        })
    }
}

/// Optional filters for the rate listing endpoint.
///
/// Absent fields are omitted from the query string entirely, never sent as
/// empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metalname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purity: Option<String>,
}

impl RateQuery {
    pub fn is_empty(&self) -> bool {
        self.metalname.is_none() && self.purity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(metal: &str, purity: &str, rate: &str, date: &str) -> MetalRateDraft {
        MetalRateDraft {
            metalname: metal.into(),
            purity: purity.into(),
            rate: rate.into(),
            date: date.into(),
        }
    }

    #[test]
    fn draft_requires_all_four_fields() {
        assert!(!MetalRateDraft::default().is_complete());
        assert!(!draft("Gold", "24K", "", "2025-08-02").is_complete());
        assert!(!draft("Gold", "24K", "7250", "").is_complete());
        assert!(draft("Gold", "24K", "7250", "2025-08-02").is_complete());
    }

    #[test]
    fn to_record_parses_rate_and_date() {
        let record = draft("Gold", "24K", " 7250.50 ", "2025-08-02")
            .to_record()
            .unwrap();
        assert_eq!(record.rate, 7250.50);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 8, 2).unwrap());
    }

    #[test]
    fn to_record_rejects_bad_input() {
        assert!(draft("Gold", "24K", "abc", "2025-08-02").to_record().is_err());
        assert!(draft("Gold", "24K", "7250", "02-08-2025").to_record().is_err());
    }

    #[test]
    fn record_date_is_iso_on_the_wire() {
        let record = MetalRateRecord {
            metalname: "Gold".into(),
            purity: "24K".into(),
            rate: 7250.0,
            date: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2025-08-02\""));
    }
}
