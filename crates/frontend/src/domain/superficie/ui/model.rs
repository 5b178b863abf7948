use contracts::domain::superficie::{CategoriaSuperficie, CategoriaSuperficieForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/categoria_superficie_producto";

pub async fn fetch_all() -> Result<Vec<CategoriaSuperficie>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &CategoriaSuperficieForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &CategoriaSuperficieForm) -> Result<(), String> {
    let id = form.id.ok_or("update without surface category id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
