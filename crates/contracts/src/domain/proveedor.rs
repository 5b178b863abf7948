use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Supplier record as served by `/proveedor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proveedor {
    pub proveedor_id: i64,
    pub nombre_proveedor: String,
    pub nombre_contacto: String,
    pub telefono: String,
    pub correo: String,
    #[serde(default)]
    pub direccion: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for Proveedor {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProveedorForm {
    #[serde(rename = "proveedor_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre_proveedor: String,
    pub nombre_contacto: String,
    pub telefono: String,
    pub correo: String,
    pub direccion: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl ProveedorForm {
    pub fn from_row(row: &Proveedor) -> Self {
        Self {
            id: Some(row.proveedor_id),
            nombre_proveedor: row.nombre_proveedor.clone(),
            nombre_contacto: row.nombre_contacto.clone(),
            telefono: row.telefono.clone(),
            correo: row.correo.clone(),
            direccion: row.direccion.clone(),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}
