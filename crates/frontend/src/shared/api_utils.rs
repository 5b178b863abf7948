//! HTTP plumbing shared by every screen.
//!
//! Two external API families back the app: the resource API (entity
//! collections) and the user API (clients, purchase history, login).
//! All helpers return `Result<_, String>`; the caller decides what the
//! user sees and what goes to the console.

use serde::de::DeserializeOwned;
use serde::Serialize;

use gloo_net::http::Request;

/// Base host of the general resource API.
pub const RESOURCE_API: &str = "https://api-iv1i.onrender.com";

/// Base host of the user/client API.
pub const USUARIOS_API: &str = "https://apilimpieza.onrender.com";

pub fn resource_url(path: &str) -> String {
    format!("{}{}", RESOURCE_API, path)
}

pub fn usuarios_url(path: &str) -> String {
    format!("{}{}", USUARIOS_API, path)
}

/// GET a full collection (or a single record) as JSON. One attempt, no
/// retry; the caller keeps its stale state on failure.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("bad response body: {}", e))
}

pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    send_with_body(Request::post(url), body).await
}

pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    send_with_body(Request::put(url), body).await
}

pub async fn patch_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    send_with_body(Request::patch(url), body).await
}

async fn send_with_body<B: Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<(), String> {
    let response = builder
        .json(body)
        .map_err(|e| format!("failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;

    if !response.ok() {
        // The response body often carries the server-side detail; keep it
        // for the console log.
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), detail));
    }

    Ok(())
}
