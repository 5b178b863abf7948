use contracts::domain::categoria::{Categoria, CategoriaForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct CategoriaViewModel {
    pub items: RwSignal<Vec<Categoria>>,
    pub form: RwSignal<CategoriaForm>,
    pub editing: RwSignal<Option<Categoria>>,
    pub flash: Flash,
}

impl CategoriaViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            form: RwSignal::new(CategoriaForm::default()),
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
                    log::error!("fetch categorias: {}", e);
                    vm.flash
                        .error("Error al cargar las categorías. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn start_edit(&self, row: Categoria) {
        self.form.set(CategoriaForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(CategoriaForm::default());
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
                        "Categoría actualizada exitosamente!"
                    } else {
                        "Categoría guardada exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(CategoriaForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save categoria: {}", e);
                    vm.flash
                        .error("Error guardando la categoría. Inténtalo de nuevo.");
                }
            }
        });
    }
}
