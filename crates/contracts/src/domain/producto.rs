use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Product record as served by `/producto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub producto_id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub categoria_id: Option<i64>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for Producto {
    fn status(&self) -> Status {
        self.status
    }
}

/// Editable fields of the product form. `id` is `None` in create mode;
/// updates take their `PUT` path from it and from nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductoForm {
    #[serde(rename = "producto_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub categoria_id: Option<i64>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl ProductoForm {
    /// Load a row into the form for editing. `usuario_mod` is blanked so
    /// the editor has to be named again on every edit.
    pub fn from_row(row: &Producto) -> Self {
        Self {
            id: Some(row.producto_id),
            nombre: row.nombre.clone(),
            descripcion: row.descripcion.clone(),
            precio: row.precio,
            categoria_id: row.categoria_id,
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_row_blanks_usuario_mod() {
        let row = Producto {
            producto_id: 7,
            nombre: "Desengrasante".into(),
            descripcion: "Uso industrial".into(),
            precio: 45.5,
            categoria_id: Some(2),
            status: Status::Activo,
            usuario_mod: Some("Natalia Martinez".into()),
        };
        let form = ProductoForm::from_row(&row);
        assert_eq!(form.id, Some(7));
        assert_eq!(form.precio, 45.5);
        assert!(form.usuario_mod.is_empty());
    }

    #[test]
    fn create_payload_omits_id_and_empty_usuario_mod() {
        let form = ProductoForm {
            nombre: "Cloro".into(),
            precio: 12.0,
            categoria_id: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("producto_id").is_none());
        assert!(json.get("usuario_mod").is_none());
        assert_eq!(json["status"], "A");
    }
}
