use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Read-only purchase-history row from the user API
/// (`/historial_compras`). There is no form for these; the screen only
/// lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorialCompra {
    pub id_pedido: i64,
    pub id_cliente: i64,
    pub total_compra: f64,
    pub status: Status,
    #[serde(default)]
    pub empleado_mod: String,
}

impl Activable for HistorialCompra {
    fn status(&self) -> Status {
        self.status
    }
}
