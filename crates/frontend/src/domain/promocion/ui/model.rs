use contracts::domain::promocion::{Promocion, PromocionForm};

use crate::shared::api_utils::{self, resource_url};

const ENDPOINT: &str = "/promocion";

pub async fn fetch_all() -> Result<Vec<Promocion>, String> {
    api_utils::get_json(&resource_url(ENDPOINT)).await
}

pub async fn create(form: &PromocionForm) -> Result<(), String> {
    api_utils::post_json(&resource_url(ENDPOINT), form).await
}

pub async fn update(form: &PromocionForm) -> Result<(), String> {
    let id = form.id.ok_or("update without promotion id")?;
    api_utils::put_json(&resource_url(&format!("{}/{}", ENDPOINT, id)), form).await
}
