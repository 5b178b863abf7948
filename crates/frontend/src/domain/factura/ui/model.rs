use contracts::domain::factura::{Cliente, Factura, FacturaForm};

use crate::shared::api_utils::{self, resource_url, usuarios_url};

const ENDPOINT: &str = "/facturacion";

pub async fn fetch_all() -> Result<Vec<Factura>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

/// Clients live on the user API, not the resource API.
pub async fn fetch_clientes() -> Result<Vec<Cliente>, String> {
    api_utils::get_json(&usuarios_url("/clientes")).await
}

pub async fn create(form: &FacturaForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &FacturaForm) -> Result<(), String> {
    let id = form.id.ok_or("update without invoice id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
