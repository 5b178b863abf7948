use contracts::domain::compra::{CompraProducto, CompraProductoForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/compra_producto";

pub async fn fetch_all() -> Result<Vec<CompraProducto>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &CompraProductoForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &CompraProductoForm) -> Result<(), String> {
    let id = form.id.ok_or("update without purchase id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
