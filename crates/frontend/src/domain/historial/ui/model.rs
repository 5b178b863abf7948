use contracts::domain::historial::HistorialCompra;

use crate::shared::api_utils::{self, usuarios_url};

pub async fn fetch_all() -> Result<Vec<HistorialCompra>, String> {
    api_utils::get_json(&usuarios_url("/historial_compras")).await
}
