use contracts::domain::superficie::{CategoriaSuperficie, CategoriaSuperficieForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct SuperficieViewModel {
    pub items: RwSignal<Vec<CategoriaSuperficie>>,
    pub form: RwSignal<CategoriaSuperficieForm>,
    pub editing: RwSignal<Option<CategoriaSuperficie>>,
    pub flash: Flash,
}

impl SuperficieViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            form: RwSignal::new(CategoriaSuperficieForm::default()),
            editing: RwSignal::new(None),
            flash: Flash::new(),
        }
    }

    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(data) => vm.items.set(data),
                Err(e) => {
                    log::error!("fetch superficies: {}", e);
                    vm.flash
                        .error("Error al cargar las superficies. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn start_edit(&self, row: CategoriaSuperficie) {
        self.form.set(CategoriaSuperficieForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(CategoriaSuperficieForm::default());
    }

    pub fn save(&self) {
        let vm = *self;
        let form = self.form.get_untracked();
        let is_edit = self.editing.with_untracked(|e| e.is_some());
        self.flash.clear_error();

        spawn_local(async move {
            let result = if is_edit {
                model::update(&form).await
            } else {
                model::create(&form).await
            };
            match result {
                Ok(()) => {
                    vm.flash.success(if is_edit {
                        "Superficie actualizada exitosamente!"
                    } else {
                        "Superficie guardada exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(CategoriaSuperficieForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save superficie: {}", e);
                    vm.flash
                        .error("Error guardando la superficie. Inténtalo de nuevo.");
                }
            }
        });
    }
}
