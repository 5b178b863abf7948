use contracts::domain::common::active_only;
use contracts::domain::factura::{Cliente, Factura};
use contracts::domain::factura_detalle::{
    invoice_totals, line_subtotal, FacturaDetalle, FacturaDetalleForm, TotalFactura,
};
use contracts::domain::producto::Producto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::factura::ui::model as factura_model;
use crate::domain::producto::ui::model as producto_model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct FacturaDetalleViewModel {
    pub items: RwSignal<Vec<FacturaDetalle>>,
    pub facturas: RwSignal<Vec<Factura>>,
    pub productos: RwSignal<Vec<Producto>>,
    pub clientes: RwSignal<Vec<Cliente>>,
    pub form: RwSignal<FacturaDetalleForm>,
    pub editing: RwSignal<Option<FacturaDetalle>>,
    pub flash: Flash,
}

impl FacturaDetalleViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            facturas: RwSignal::new(Vec::new()),
            productos: RwSignal::new(Vec::new()),
            clientes: RwSignal::new(Vec::new()),
            form: RwSignal::new(FacturaDetalleForm::default()),
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
                    log::error!("fetch factura_detalle: {}", e);
                    vm.flash.error(
                        "Error al cargar los detalles de la factura. Inténtalo de nuevo más tarde.",
                    );
                }
            }
        });
    }

    pub fn load_referencias(&self) {
        let vm = *self;
        spawn_local(async move {
            match factura_model::fetch_all().await {
                Ok(data) => vm.facturas.set(active_only(data)),
                Err(e) => {
                    log::error!("fetch facturas: {}", e);
                    vm.flash
                        .error("Error al cargar las facturas. Inténtalo de nuevo más tarde.");
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
        spawn_local(async move {
            match factura_model::fetch_clientes().await {
                Ok(data) => vm.clientes.set(data),
                Err(e) => {
                    log::error!("fetch clientes: {}", e);
                    vm.flash
                        .error("Error al cargar los clientes. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    /// Invoice label as shown in dropdowns and tables: client plus id.
    pub fn factura_label(&self, factura: &Factura) -> String {
        let cliente = self
            .clientes
            .with(|cs| {
                cs.iter()
                    .find(|c| c.id_cliente == factura.cliente)
                    .map(|c| c.nombre_completo())
            })
            .unwrap_or_else(|| factura.cliente.to_string());
        format!("{} - {}", cliente, factura.factura_id)
    }

    /// One row per invoice with the summed line amounts.
    pub fn totales(&self) -> Vec<TotalFactura> {
        self.items.with(|detalles| {
            self.facturas
                .with(|facturas| invoice_totals(detalles, facturas))
        })
    }

    /// Subtotal follows the selected product's price and the quantity.
    fn recompute_subtotal(&self) {
        let productos = self.productos.get_untracked();
        self.form.update(|f| {
            f.subtotal = line_subtotal(&productos, f.producto_id, f.cantidad);
        });
    }

    pub fn set_producto(&self, producto_id: Option<i64>) {
        self.form.update(|f| f.producto_id = producto_id);
        self.recompute_subtotal();
    }

    pub fn set_cantidad(&self, cantidad: u32) {
        self.form.update(|f| f.cantidad = cantidad);
        self.recompute_subtotal();
    }

    pub fn start_edit(&self, row: FacturaDetalle) {
        self.form.set(FacturaDetalleForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(FacturaDetalleForm::default());
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
                        "Detalle de factura actualizado exitosamente!"
                    } else {
                        "Detalle de factura guardado exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(FacturaDetalleForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save factura_detalle: {}", e);
                    vm.flash
                        .error("Error guardando el detalle de factura. Inténtalo de nuevo.");
                }
            }
        });
    }
}
