//! Gateway for the metal rate endpoints.

use crate::domain::SaveOutcome;
use crate::shared::api_utils::api_url;
use crate::shared::http;
use contracts::domain::metal_rate::{MetalRateRecord, RateQuery};
use gloo_net::http::Method;

/// Create a rate record.
pub async fn save_metal_rate(record: &MetalRateRecord) -> Result<SaveOutcome, String> {
    let response = http::request(Method::POST, &api_url("/save-metal-price"), Some(record)).await?;
    match response.status {
        200 => Ok(SaveOutcome::Created),
        406 => Ok(SaveOutcome::Duplicate),
        status => Err(format!("HTTP error: {}", status)),
    }
}

/// List rate records, optionally filtered. `None` query fields are omitted
/// from the URL entirely.
pub async fn fetch_metal_rates(query: &RateQuery) -> Result<Vec<MetalRateRecord>, String> {
    let url = rates_url(query)?;
    let response = http::request::<()>(Method::GET, &url, None).await?;
    if response.status != 200 {
        return Err(format!("HTTP error: {}", response.status));
    }
    response.json()
}

fn rates_url(query: &RateQuery) -> Result<String, String> {
    let mut url = api_url("/get-all-metal-prices");
    if !query.is_empty() {
        let qs = serde_qs::to_string(query)
            .map_err(|e| format!("Failed to serialize query: {}", e))?;
        url.push('?');
        url.push_str(&qs);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_query_string() {
        let url = rates_url(&RateQuery::default()).unwrap();
        assert!(url.ends_with("/get-all-metal-prices"));
    }

    #[test]
    fn populated_fields_become_key_value_pairs() {
        let query = RateQuery {
            metalname: Some("Gold".into()),
            purity: Some("24K".into()),
        };
        let url = rates_url(&query).unwrap();
        assert!(url.ends_with("/get-all-metal-prices?metalname=Gold&purity=24K"));
    }

    #[test]
    fn absent_field_is_omitted_not_sent_empty() {
        let query = RateQuery {
            metalname: Some("Gold".into()),
            purity: None,
        };
        let url = rates_url(&query).unwrap();
        assert!(url.ends_with("?metalname=Gold"));
        assert!(!url.contains("purity"));
    }
}
