use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Product category as served by `/categoria`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub categoria_id: i64,
    pub nombre_categoria: String,
    pub descripcion: String,
    /// Creation date, `YYYY-MM-DD`.
    #[serde(default)]
    pub fecha_creac: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for Categoria {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriaForm {
    #[serde(rename = "categoria_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre_categoria: String,
    pub descripcion: String,
    pub fecha_creac: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl CategoriaForm {
    pub fn from_row(row: &Categoria) -> Self {
        Self {
            id: Some(row.categoria_id),
            nombre_categoria: row.nombre_categoria.clone(),
            descripcion: row.descripcion.clone(),
            fecha_creac: row.fecha_creac.clone(),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}
