use contracts::domain::categoria::Categoria;
use contracts::domain::common::active_only;
use contracts::domain::producto::{Producto, ProductoForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::categoria::ui::model as categoria_model;
use crate::shared::flash::Flash;

/// ViewModel for the product screen: collection, reference data, form
/// state and submit commands.
#[derive(Clone, Copy)]
pub struct ProductoViewModel {
    pub items: RwSignal<Vec<Producto>>,
    pub categorias: RwSignal<Vec<Categoria>>,
    pub form: RwSignal<ProductoForm>,
    pub editing: RwSignal<Option<Producto>>,
    pub flash: Flash,
}

impl ProductoViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            categorias: RwSignal::new(Vec::new()),
            form: RwSignal::new(ProductoForm::default()),
            editing: RwSignal::new(None),
            flash: Flash::new(),
        }
    }

    /// Reload the product collection. On failure the previous list stays.
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(data) => vm.items.set(data),
                Err(e) => {
                    log::error!("fetch productos: {}", e);
                    vm.flash
                        .error("Error al cargar los productos. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    /// Categories feed the selection dropdown; only active ones qualify.
    pub fn load_categorias(&self) {
        let vm = *self;
        spawn_local(async move {
            match categoria_model::fetch_all().await {
                Ok(data) => vm.categorias.set(active_only(data)),
                Err(e) => {
                    log::error!("fetch categorias: {}", e);
                    vm.flash
                        .error("Error al cargar las categorías. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn start_edit(&self, row: Producto) {
        self.form.set(ProductoForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(ProductoForm::default());
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
                        "Producto actualizado exitosamente!"
                    } else {
                        "Producto guardado exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(ProductoForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save producto: {}", e);
                    vm.flash
                        .error("Error guardando el producto. Inténtalo de nuevo.");
                }
            }
        });
    }

    /// Quick A/I flip from the table, no form involved.
    pub fn toggle_status(&self, row: &Producto) {
        let vm = *self;
        let id = row.producto_id;
        let nuevo = row.status.toggled();
        spawn_local(async move {
            match model::set_status(id, nuevo).await {
                Ok(()) => {
                    vm.flash.success("Estado actualizado exitosamente!");
                    vm.load();
                }
                Err(e) => {
                    log::error!("patch producto status: {}", e);
                    vm.flash
                        .error("Error al actualizar el estado. Inténtalo de nuevo.");
                }
            }
        });
    }
}
