use contracts::domain::promocion_producto::{PromocionProducto, PromocionProductoForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/promocion_producto";

pub async fn fetch_all() -> Result<Vec<PromocionProducto>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &PromocionProductoForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &PromocionProductoForm) -> Result<(), String> {
    let id = form.id.ok_or("update without promotion-product id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
