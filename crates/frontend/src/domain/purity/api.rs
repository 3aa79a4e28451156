//! Gateway for the purity endpoints.

use crate::domain::SaveOutcome;
use crate::shared::api_utils::api_url;
use crate::shared::http;
use contracts::domain::purity::{PurityDraft, PurityOption, PurityRecord};
use gloo_net::http::Method;

/// List every purity record.
pub async fn fetch_purities() -> Result<Vec<PurityRecord>, String> {
    let response = http::request::<()>(Method::GET, &api_url("/get-all-purities"), None).await?;
    if response.status != 200 {
        return Err(format!("HTTP error: {}", response.status));
    }
    response.json()
}

/// Create a purity record.
pub async fn save_purity(draft: &PurityDraft) -> Result<SaveOutcome, String> {
    let response = http::request(Method::POST, &api_url("/save-purity"), Some(draft)).await?;
    match response.status {
        200 => Ok(SaveOutcome::Created),
        406 => Ok(SaveOutcome::Duplicate),
        status => Err(format!("HTTP error: {}", status)),
    }
}

/// Delete a purity record by id.
///
/// Callers must reject an empty id before getting here; this function always
/// issues the request.
pub async fn delete_purity(id: &str) -> Result<(), String> {
    let url = api_url(&format!("/delete-purity/{}", urlencoding::encode(id)));
    let response = http::request::<()>(Method::DELETE, &url, None).await?;
    if response.status != 200 {
        return Err(format!("HTTP error: {}", response.status));
    }
    Ok(())
}

/// Purity options for one metal. An empty list is a valid answer, not an
/// error.
pub async fn fetch_purities_for_metal(metalname: &str) -> Result<Vec<PurityOption>, String> {
    let url = api_url(&format!("/get-purities/{}", urlencoding::encode(metalname)));
    let response = http::request::<()>(Method::GET, &url, None).await?;
    if response.status != 200 {
        return Err(format!("HTTP error: {}", response.status));
    }
    response.json()
}
