use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// One stock movement row as served by `/inventario`. Several rows may
/// exist per product; the summary table groups them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventario {
    pub inventario_id: i64,
    pub producto_id: i64,
    pub cantidad: i64,
    /// Entry date, `YYYY-MM-DD`.
    #[serde(default)]
    pub fecha_creac: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for Inventario {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventarioForm {
    #[serde(rename = "inventario_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub producto_id: Option<i64>,
    pub cantidad: i64,
    pub fecha_creac: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl InventarioForm {
    pub fn from_row(row: &Inventario) -> Self {
        Self {
            id: Some(row.inventario_id),
            producto_id: Some(row.producto_id),
            cantidad: row.cantidad,
            fecha_creac: row
                .fecha_creac
                .split('T')
                .next()
                .unwrap_or(&row.fecha_creac)
                .to_string(),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}

/// Collapse entries into one row per product, summing `cantidad`. The
/// first-seen entry is the template for the grouped row and group order
/// follows first appearance.
pub fn group_by_product(items: &[Inventario]) -> Vec<Inventario> {
    let mut grouped: Vec<Inventario> = Vec::new();
    for item in items {
        match grouped.iter_mut().find(|g| g.producto_id == item.producto_id) {
            Some(existing) => existing.cantidad += item.cantidad,
            None => grouped.push(item.clone()),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrada(id: i64, producto_id: i64, cantidad: i64, status: Status) -> Inventario {
        Inventario {
            inventario_id: id,
            producto_id,
            cantidad,
            fecha_creac: "2024-04-01".into(),
            status,
            usuario_mod: None,
        }
    }

    #[test]
    fn grouping_sums_quantities_per_product() {
        let items = vec![
            entrada(1, 10, 5, Status::Activo),
            entrada(2, 20, 3, Status::Activo),
            entrada(3, 10, 7, Status::Inactivo),
        ];
        let grouped = group_by_product(&items);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].producto_id, 10);
        assert_eq!(grouped[0].cantidad, 12);
        assert_eq!(grouped[1].cantidad, 3);
    }

    #[test]
    fn first_seen_entry_is_the_group_template() {
        let items = vec![
            entrada(1, 10, 5, Status::Activo),
            entrada(3, 10, 7, Status::Inactivo),
        ];
        let grouped = group_by_product(&items);
        // Everything but the summed quantity comes from the first entry.
        assert_eq!(grouped[0].inventario_id, 1);
        assert_eq!(grouped[0].status, Status::Activo);
    }

    #[test]
    fn one_group_per_distinct_product() {
        let items = vec![
            entrada(1, 1, 1, Status::Activo),
            entrada(2, 2, 1, Status::Activo),
            entrada(3, 3, 1, Status::Activo),
            entrada(4, 2, 1, Status::Activo),
        ];
        assert_eq!(group_by_product(&items).len(), 3);
    }
}
