use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Link between a promotion and a product, served by `/promocion_producto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromocionProducto {
    pub promocion_producto_id: i64,
    pub promocion_id: i64,
    pub producto_id: i64,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for PromocionProducto {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromocionProductoForm {
    #[serde(
        rename = "promocion_producto_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub promocion_id: Option<i64>,
    pub producto_id: Option<i64>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl PromocionProductoForm {
    pub fn from_row(row: &PromocionProducto) -> Self {
        Self {
            id: Some(row.promocion_producto_id),
            promocion_id: Some(row.promocion_id),
            producto_id: Some(row.producto_id),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}
