use contracts::domain::factura::{cliente_resuelve, Cliente, Factura, FacturaForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct FacturaViewModel {
    pub items: RwSignal<Vec<Factura>>,
    pub clientes: RwSignal<Vec<Cliente>>,
    pub form: RwSignal<FacturaForm>,
    pub editing: RwSignal<Option<Factura>>,
    pub flash: Flash,
}

impl FacturaViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            clientes: RwSignal::new(Vec::new()),
            form: RwSignal::new(FacturaForm::default()),
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
                    log::error!("fetch facturas: {}", e);
                    vm.flash
                        .error("Error al cargar las facturas. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn load_clientes(&self) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_clientes().await {
                Ok(data) => vm.clientes.set(data),
                Err(e) => {
                    log::error!("fetch clientes: {}", e);
                    vm.flash
                        .error("Error al cargar los clientes. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    pub fn start_edit(&self, row: Factura) {
        self.form.set(FacturaForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(FacturaForm::default());
    }

    pub fn save(&self) {
        let vm = *self;
        let form = self.form.get_untracked();
        let is_edit = self.editing.with_untracked(|e| e.is_some());
        self.flash.clear_error();

        // The selected client id has to resolve before anything is sent.
        let valido = self
            .clientes
            .with_untracked(|clientes| cliente_resuelve(clientes, form.cliente));
        if !valido {
            self.flash.error("Debes seleccionar un cliente válido.");
            return;
        }

        spawn_local(async move {
            let result = if is_edit {
                model::update(&form).await
            } else {
                model::create(&form).await
            };
            match result {
                Ok(()) => {
                    vm.flash.success(if is_edit {
                        "Factura actualizada exitosamente!"
                    } else {
                        "Factura guardada exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(FacturaForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save factura: {}", e);
                    vm.flash
                        .error("Error guardando la factura. Inténtalo de nuevo.");
                }
            }
        });
    }
}
