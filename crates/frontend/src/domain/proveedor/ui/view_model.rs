use contracts::domain::proveedor::{Proveedor, ProveedorForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct ProveedorViewModel {
    pub items: RwSignal<Vec<Proveedor>>,
    pub form: RwSignal<ProveedorForm>,
    pub editing: RwSignal<Option<Proveedor>>,
    pub flash: Flash,
}

impl ProveedorViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            form: RwSignal::new(ProveedorForm::default()),
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
                    log::error!("fetch proveedores: {}", e);
                    vm.flash
                        .error("Error al cargar los proveedores. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn start_edit(&self, row: Proveedor) {
        self.form.set(ProveedorForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(ProveedorForm::default());
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
                        "Proveedor actualizado exitosamente!"
                    } else {
                        "Proveedor guardado exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(ProveedorForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save proveedor: {}", e);
                    vm.flash
                        .error("Error guardando el proveedor. Inténtalo de nuevo.");
                }
            }
        });
    }
}
