use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Purchase of product stock from a supplier, served by `/compra_producto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompraProducto {
    pub compra_producto_id: i64,
    pub proveedor_id: i64,
    pub producto_id: i64,
    /// Purchase date, `YYYY-MM-DD` (the API may append a time part).
    pub fecha: String,
    pub monto: f64,
    pub descripcion: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for CompraProducto {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompraProductoForm {
    #[serde(rename = "compra_producto_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub proveedor_id: Option<i64>,
    pub producto_id: Option<i64>,
    pub fecha: String,
    pub monto: f64,
    pub descripcion: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl CompraProductoForm {
    pub fn from_row(row: &CompraProducto) -> Self {
        Self {
            id: Some(row.compra_producto_id),
            proveedor_id: Some(row.proveedor_id),
            producto_id: Some(row.producto_id),
            // Date inputs want the plain date part.
            fecha: row.fecha.split('T').next().unwrap_or(&row.fecha).to_string(),
            monto: row.monto,
            descripcion: row.descripcion.clone(),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::filter_by_month;

    fn compra(id: i64, fecha: &str) -> CompraProducto {
        CompraProducto {
            compra_producto_id: id,
            proveedor_id: 1,
            producto_id: 1,
            fecha: fecha.to_string(),
            monto: 100.0,
            descripcion: String::new(),
            status: Status::Activo,
            usuario_mod: None,
        }
    }

    #[test]
    fn month_filter_over_purchases() {
        let compras = vec![
            compra(1, "2024-05-02"),
            compra(2, "2024-06-15T08:00:00"),
            compra(3, "2023-06-30"),
        ];
        let junio = filter_by_month(&compras, Some(6), |c| &c.fecha);
        assert_eq!(
            junio.iter().map(|c| c.compra_producto_id).collect::<Vec<_>>(),
            vec![2, 3]
        );
        assert_eq!(filter_by_month(&compras, None, |c| &c.fecha).len(), 3);
    }

    #[test]
    fn from_row_strips_time_part_from_fecha() {
        let form = CompraProductoForm::from_row(&compra(9, "2024-06-15T08:00:00"));
        assert_eq!(form.fecha, "2024-06-15");
        assert!(form.usuario_mod.is_empty());
    }
}
