/// Shared request/response plumbing for the admin API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn decode<T>(response: Response) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if response.ok() {
        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub(crate) async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    decode(response).await
}

/// POST with an empty JSON body, as the node endpoints expect.
pub(crate) async fn post_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::post(path)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    decode(response).await
}

/// PATCH with no body; the response content is not interpreted.
pub(crate) async fn patch_empty(path: &str) -> Result<(), String> {
    let response = Request::patch(path)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

/// PATCH with a JSON body; the response content is not interpreted.
pub(crate) async fn patch_json<B>(path: &str, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let response = Request::patch(path)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}
