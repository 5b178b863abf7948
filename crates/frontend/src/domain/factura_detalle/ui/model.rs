use contracts::domain::factura_detalle::{FacturaDetalle, FacturaDetalleForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/factura_detalle";

pub async fn fetch_all() -> Result<Vec<FacturaDetalle>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &FacturaDetalleForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &FacturaDetalleForm) -> Result<(), String> {
    let id = form.id.ok_or("update without invoice line id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
