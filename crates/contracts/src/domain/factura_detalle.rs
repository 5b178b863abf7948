use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};
use super::factura::Factura;
use super::producto::Producto;

/// Invoice line item as served by `/factura_detalle`. Some rows carry a
/// server-computed `total`; when absent the client-side `subtotal` stands
/// in for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacturaDetalle {
    pub factura_detalle_id: i64,
    pub factura_id: i64,
    pub producto_id: i64,
    pub cantidad: u32,
    pub subtotal: f64,
    #[serde(default)]
    pub total: Option<f64>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for FacturaDetalle {
    fn status(&self) -> Status {
        self.status
    }
}

impl FacturaDetalle {
    /// Amount this line contributes to its invoice.
    pub fn importe(&self) -> f64 {
        self.total.unwrap_or(self.subtotal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacturaDetalleForm {
    #[serde(rename = "factura_detalle_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub factura_id: Option<i64>,
    pub producto_id: Option<i64>,
    pub cantidad: u32,
    pub subtotal: f64,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl FacturaDetalleForm {
    pub fn from_row(row: &FacturaDetalle) -> Self {
        Self {
            id: Some(row.factura_detalle_id),
            factura_id: Some(row.factura_id),
            producto_id: Some(row.producto_id),
            cantidad: row.cantidad,
            subtotal: row.subtotal,
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}

/// `precio × cantidad` for the selected product; zero while no product is
/// selected. Recomputed whenever the product or quantity changes.
pub fn line_subtotal(productos: &[Producto], producto_id: Option<i64>, cantidad: u32) -> f64 {
    let precio = producto_id
        .and_then(|id| productos.iter().find(|p| p.producto_id == id))
        .map(|p| p.precio)
        .unwrap_or(0.0);
    precio * cantidad as f64
}

/// One aggregated row of the "Totales de Factura" table.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalFactura {
    pub factura_id: i64,
    /// Client id of the owning invoice; `None` when the invoice is not in
    /// the fetched collection.
    pub cliente: Option<i64>,
    pub total: f64,
}

/// Fold line items into one total per invoice, summing each line's
/// `total` (or `subtotal` when absent). Invoices without lines do not
/// appear; row order follows first appearance in the line collection.
pub fn invoice_totals(detalles: &[FacturaDetalle], facturas: &[Factura]) -> Vec<TotalFactura> {
    let mut totales: Vec<TotalFactura> = Vec::new();
    for detalle in detalles {
        match totales.iter_mut().find(|t| t.factura_id == detalle.factura_id) {
            Some(existing) => existing.total += detalle.importe(),
            None => {
                let cliente = facturas
                    .iter()
                    .find(|f| f.factura_id == detalle.factura_id)
                    .map(|f| f.cliente);
                totales.push(TotalFactura {
                    factura_id: detalle.factura_id,
                    cliente,
                    total: detalle.importe(),
                });
            }
        }
    }
    totales
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detalle(factura_id: i64, subtotal: f64, total: Option<f64>) -> FacturaDetalle {
        FacturaDetalle {
            factura_detalle_id: subtotal as i64,
            factura_id,
            producto_id: 1,
            cantidad: 1,
            subtotal,
            total,
            status: Status::Activo,
            usuario_mod: None,
        }
    }

    fn factura(id: i64, cliente: i64) -> Factura {
        Factura {
            factura_id: id,
            cliente,
            fecha: "2024-01-01T00:00:00".into(),
            status: Status::Activo,
            usuario_mod: None,
        }
    }

    #[test]
    fn totals_sum_line_subtotals() {
        let detalles = vec![
            detalle(1, 5.0, None),
            detalle(1, 10.0, None),
            detalle(1, 7.5, None),
        ];
        let totales = invoice_totals(&detalles, &[factura(1, 42)]);
        assert_eq!(totales.len(), 1);
        assert_eq!(totales[0].total, 22.5);
        assert_eq!(totales[0].cliente, Some(42));
    }

    #[test]
    fn invoices_without_lines_are_absent() {
        let totales = invoice_totals(&[detalle(1, 5.0, None)], &[factura(1, 1), factura(2, 2)]);
        assert_eq!(totales.len(), 1);
        assert_eq!(totales[0].factura_id, 1);
    }

    #[test]
    fn total_field_wins_over_subtotal() {
        let totales = invoice_totals(&[detalle(3, 5.0, Some(8.0))], &[]);
        assert_eq!(totales[0].total, 8.0);
        assert_eq!(totales[0].cliente, None);
    }

    #[test]
    fn line_subtotal_uses_selected_product_price() {
        let productos = vec![Producto {
            producto_id: 2,
            nombre: "Jabon".into(),
            descripcion: String::new(),
            precio: 3.5,
            categoria_id: None,
            status: Status::Activo,
            usuario_mod: None,
        }];
        assert_eq!(line_subtotal(&productos, Some(2), 4), 14.0);
        assert_eq!(line_subtotal(&productos, Some(9), 4), 0.0);
        assert_eq!(line_subtotal(&productos, None, 4), 0.0);
    }
}
