use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::RequestCache;

use crate::error::RetrievalError;

/// Fetches and decodes a JSON resource, bypassing the HTTP cache so every
/// page load reflects the latest catalog data.
pub async fn fetch_json<T>(url: &str) -> Result<T, RetrievalError>
where
    T: DeserializeOwned,
{
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|err| RetrievalError::Request(err.to_string()))?;

    if !response.ok() {
        return Err(RetrievalError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| RetrievalError::Decode(err.to_string()))
}
