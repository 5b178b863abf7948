use contracts::domain::common::{Status, StatusPatch};
use contracts::domain::producto::{Producto, ProductoForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/producto";

pub async fn fetch_all() -> Result<Vec<Producto>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &ProductoForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &ProductoForm) -> Result<(), String> {
    let id = form.id.ok_or("update without product id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}

/// Out-of-band status flip, independent of the main form.
pub async fn set_status(id: i64, status: Status) -> Result<(), String> {
    api_utils::patch_json(
        &resource_url(&format!("{}/{}", ENDPOINT, id)),
        &StatusPatch { status },
    )
    .await
}
