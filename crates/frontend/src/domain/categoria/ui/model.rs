use contracts::domain::categoria::{Categoria, CategoriaForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/categoria";

pub async fn fetch_all() -> Result<Vec<Categoria>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &CategoriaForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &CategoriaForm) -> Result<(), String> {
    let id = form.id.ok_or("update without category id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
