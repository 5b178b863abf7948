use contracts::domain::common::active_only;
use contracts::domain::producto::Producto;
use contracts::domain::promocion::Promocion;
use contracts::domain::promocion_producto::{PromocionProducto, PromocionProductoForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::producto::ui::model as producto_model;
use crate::domain::promocion::ui::model as promocion_model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct PromocionProductoViewModel {
    pub items: RwSignal<Vec<PromocionProducto>>,
    pub promociones: RwSignal<Vec<Promocion>>,
    pub productos: RwSignal<Vec<Producto>>,
    pub form: RwSignal<PromocionProductoForm>,
    pub editing: RwSignal<Option<PromocionProducto>>,
    pub flash: Flash,
}

impl PromocionProductoViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            promociones: RwSignal::new(Vec::new()),
            productos: RwSignal::new(Vec::new()),
            form: RwSignal::new(PromocionProductoForm::default()),
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
                    log::error!("fetch promocion_producto: {}", e);
                    vm.flash.error(
                        "Error al cargar las promociones de productos. Inténtalo de nuevo más tarde.",
                    );
                }
            }
        });
    }

    pub fn load_referencias(&self) {
        let vm = *self;
        spawn_local(async move {
            match promocion_model::fetch_all().await {
                Ok(data) => vm.promociones.set(active_only(data)),
                Err(e) => {
                    log::error!("fetch promociones: {}", e);
                    vm.flash
                        .error("Error al cargar las promociones. Inténtalo de nuevo más tarde.");
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

    pub fn start_edit(&self, row: PromocionProducto) {
        self.form.set(PromocionProductoForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(PromocionProductoForm::default());
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
                        "Promoción de producto actualizada exitosamente!"
                    } else {
                        "Promoción de producto guardada exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(PromocionProductoForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save promocion_producto: {}", e);
                    vm.flash
                        .error("Error guardando la promoción de producto. Inténtalo de nuevo.");
                }
            }
        });
    }
}
