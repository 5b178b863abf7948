use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Surface category (the kind of surface a product is meant for), served
/// by `/categoria_superficie_producto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriaSuperficie {
    pub categoria_superficie_producto_id: i64,
    pub superficie_nombre: String,
    pub superficie_descripcion: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for CategoriaSuperficie {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriaSuperficieForm {
    #[serde(
        rename = "categoria_superficie_producto_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub superficie_nombre: String,
    pub superficie_descripcion: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl CategoriaSuperficieForm {
    pub fn from_row(row: &CategoriaSuperficie) -> Self {
        Self {
            id: Some(row.categoria_superficie_producto_id),
            superficie_nombre: row.superficie_nombre.clone(),
            superficie_descripcion: row.superficie_descripcion.clone(),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}
