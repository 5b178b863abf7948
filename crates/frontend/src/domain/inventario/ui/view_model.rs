use contracts::domain::common::active_only;
use contracts::domain::inventario::{group_by_product, Inventario, InventarioForm};
use contracts::domain::producto::Producto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::producto::ui::model as producto_model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct InventarioViewModel {
    pub items: RwSignal<Vec<Inventario>>,
    pub productos: RwSignal<Vec<Producto>>,
    pub form: RwSignal<InventarioForm>,
    pub editing: RwSignal<Option<Inventario>>,
    pub flash: Flash,
}

impl InventarioViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            productos: RwSignal::new(Vec::new()),
            form: RwSignal::new(InventarioForm::default()),
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
                    log::error!("fetch inventario: {}", e);
                    vm.flash
                        .error("Error al cargar los inventarios. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn load_productos(&self) {
        let vm = *self;
        spawn_local(async move {
            match producto_model::fetch_all().await {
                Ok(data) => vm.productos.set(active_only(data)),
                Err(e) => {
                    log::error!("fetch productos: {}", e);
                    vm.flash
                        .error("Error al cargar los productos. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    /// Summary rows: one per product with the summed stock.
    pub fn agrupados(&self) -> Vec<Inventario> {
        self.items.with(|items| group_by_product(items))
    }

    pub fn start_edit(&self, row: Inventario) {
        self.form.set(InventarioForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(InventarioForm::default());
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
                        "Inventario actualizado exitosamente!"
                    } else {
                        "Inventario guardado exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(InventarioForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save inventario: {}", e);
                    vm.flash
                        .error("Error guardando el inventario. Inténtalo de nuevo.");
                }
            }
        });
    }

    /// Quick A/I flip from the detailed table, no form involved.
    pub fn toggle_status(&self, row: &Inventario) {
        let vm = *self;
        let id = row.inventario_id;
        let nuevo = row.status.toggled();
        spawn_local(async move {
            match model::set_status(id, nuevo).await {
                Ok(()) => {
                    vm.flash.success("Estado actualizado exitosamente!");
                    vm.load();
                }
                Err(e) => {
                    log::error!("patch inventario status: {}", e);
                    vm.flash
                        .error("Error al actualizar el estado. Inténtalo de nuevo.");
                }
            }
        });
    }
}
