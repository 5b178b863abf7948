use contracts::domain::proveedor::{Proveedor, ProveedorForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/proveedor";

pub async fn fetch_all() -> Result<Vec<Proveedor>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &ProveedorForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &ProveedorForm) -> Result<(), String> {
    let id = form.id.ok_or("update without supplier id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
