use contracts::domain::common::{Status, StatusPatch};
use contracts::domain::inventario::{Inventario, InventarioForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/inventario";

pub async fn fetch_all() -> Result<Vec<Inventario>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &InventarioForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &InventarioForm) -> Result<(), String> {
    let id = form.id.ok_or("update without inventory id")?;
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
