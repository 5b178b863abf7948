use serde::{Deserialize, Serialize};

use super::common::{Activable, Status};

/// Discount campaign as served by `/promocion`. The month filter on the
/// promotions screen works on `fecha_inicio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promocion {
    pub promocion_id: i64,
    pub nombre_promocion: String,
    pub descripcion: String,
    pub porcentaje_descuento: f64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_mod: Option<String>,
}

impl Activable for Promocion {
    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromocionForm {
    #[serde(rename = "promocion_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre_promocion: String,
    pub descripcion: String,
    pub porcentaje_descuento: f64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usuario_mod: String,
}

impl PromocionForm {
    pub fn from_row(row: &Promocion) -> Self {
        Self {
            id: Some(row.promocion_id),
            nombre_promocion: row.nombre_promocion.clone(),
            descripcion: row.descripcion.clone(),
            porcentaje_descuento: row.porcentaje_descuento,
            fecha_inicio: date_part(&row.fecha_inicio),
            fecha_fin: date_part(&row.fecha_fin),
            status: row.status,
            usuario_mod: String::new(),
        }
    }
}

fn date_part(fecha: &str) -> String {
    fecha.split('T').next().unwrap_or(fecha).to_string()
}
