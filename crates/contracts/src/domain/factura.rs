use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Invoice header as served by `/facturacion`. The `cliente` column holds
/// the client id; client names come from the user API's `/clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factura {
    pub factura_id: i64,
    pub cliente: i64,
    /// Invoice datetime, ISO 8601 without offset.
    pub fecha: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for Factura {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacturaForm {
    #[serde(rename = "factura_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub cliente: Option<i64>,
    pub fecha: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl FacturaForm {
    pub fn from_row(row: &Factura) -> Self {
        Self {
            id: Some(row.factura_id),
            cliente: Some(row.cliente),
            fecha: row.fecha.split('T').next().unwrap_or(&row.fecha).to_string(),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}

/// Client record from the user API (`/clientes`). Reference data only;
/// never edited from these screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id_cliente: i64,
    pub nombre: String,
    #[serde(default)]
    pub apellidos: String,
}

impl Cliente {
    pub fn nombre_completo(&self) -> String {
        if self.apellidos.is_empty() {
            self.nombre.clone()
        } else {
            format!("{} {}", self.nombre, self.apellidos)
        }
    }
}

/// `true` when the selected client id resolves against the fetched client
/// list. The invoice form refuses to submit otherwise.
pub fn cliente_resuelve(clientes: &[Cliente], seleccionado: Option<i64>) -> bool {
    match seleccionado {
        Some(id) => clientes.iter().any(|c| c.id_cliente == id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cliente_resuelve_requires_known_id() {
        let clientes = vec![Cliente {
            id_cliente: 4,
            nombre: "Ana".into(),
            apellidos: "Lopez".into(),
        }];
        assert!(cliente_resuelve(&clientes, Some(4)));
        assert!(!cliente_resuelve(&clientes, Some(5)));
        assert!(!cliente_resuelve(&clientes, None));
        assert!(!cliente_resuelve(&[], Some(4)));
    }

    #[test]
    fn nombre_completo_skips_empty_apellidos() {
        let c = Cliente {
            id_cliente: 1,
            nombre: "Ana".into(),
            apellidos: String::new(),
        };
        assert_eq!(c.nombre_completo(), "Ana");
    }
}
