use contracts::domain::common::{active_only, filter_by_month};
use contracts::domain::compra::{CompraProducto, CompraProductoForm};
use contracts::domain::producto::Producto;
use contracts::domain::proveedor::Proveedor;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::producto::ui::model as producto_model;
use crate::domain::proveedor::ui::model as proveedor_model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct CompraViewModel {
    pub items: RwSignal<Vec<CompraProducto>>,
    pub proveedores: RwSignal<Vec<Proveedor>>,
    pub productos: RwSignal<Vec<Producto>>,
    pub form: RwSignal<CompraProductoForm>,
    pub editing: RwSignal<Option<CompraProducto>>,
    /// Month picked in the dropdown; applied to the table on "Filtrar".
    pub selected_month: RwSignal<Option<u32>>,
    pub applied_month: RwSignal<Option<u32>>,
    pub flash: Flash,
}

impl CompraViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            proveedores: RwSignal::new(Vec::new()),
            productos: RwSignal::new(Vec::new()),
            form: RwSignal::new(CompraProductoForm::default()),
            editing: RwSignal::new(None),
            selected_month: RwSignal::new(None),
            applied_month: RwSignal::new(None),
            flash: Flash::new(),
        }
    }

    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(data) => vm.items.set(data),
                Err(e) => {
                    log::error!("fetch compras: {}", e);
                    vm.flash
                        .error("Error al cargar las compras. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn load_referencias(&self) {
        let vm = *self;
        spawn_local(async move {
            match proveedor_model::fetch_all().await {
                Ok(data) => vm.proveedores.set(active_only(data)),
                Err(e) => {
                    log::error!("fetch proveedores: {}", e);
                    vm.flash
                        .error("Error al cargar los proveedores. Inténtalo de nuevo más tarde.");
                }
            }
        });
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

    /// Purchases shown in the table, restricted to the applied month.
    pub fn filtered(&self) -> Vec<CompraProducto> {
        let month = self.applied_month.get();
        self.items.with(|items| filter_by_month(items, month, |c| &c.fecha))
    }

    pub fn apply_month_filter(&self) {
        self.applied_month.set(self.selected_month.get_untracked());
    }

    pub fn start_edit(&self, row: CompraProducto) {
        self.form.set(CompraProductoForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(CompraProductoForm::default());
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
                        "Compra actualizada exitosamente!"
                    } else {
                        "Compra guardada exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(CompraProductoForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save compra: {}", e);
                    vm.flash
                        .error("Error guardando la compra. Inténtalo de nuevo.");
                }
            }
        });
    }
}
