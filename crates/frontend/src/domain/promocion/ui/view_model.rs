use contracts::domain::common::filter_by_month;
use contracts::domain::promocion::{Promocion, PromocionForm};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::flash::Flash;

#[derive(Clone, Copy)]
pub struct PromocionViewModel {
    pub items: RwSignal<Vec<Promocion>>,
    pub form: RwSignal<PromocionForm>,
    pub editing: RwSignal<Option<Promocion>>,
    pub selected_month: RwSignal<Option<u32>>,
    pub applied_month: RwSignal<Option<u32>>,
    pub flash: Flash,
}

impl PromocionViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            form: RwSignal::new(PromocionForm::default()),
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
                    log::error!("fetch promociones: {}", e);
                    vm.flash
                        .error("Error al cargar las promociones. Inténtalo de nuevo más tarde.");
                }
            }
        });
    }

    /// Promotions shown in the table; the filter works on the start date.
    pub fn filtered(&self) -> Vec<Promocion> {
        let month = self.applied_month.get();
        self.items
            .with(|items| filter_by_month(items, month, |p| &p.fecha_inicio))
    }

    pub fn apply_month_filter(&self) {
        self.applied_month.set(self.selected_month.get_untracked());
    }

    pub fn start_edit(&self, row: Promocion) {
        self.form.set(PromocionForm::from_row(&row));
        self.editing.set(Some(row));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.set(PromocionForm::default());
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
                        "Promoción actualizada exitosamente!"
                    } else {
                        "Promoción guardada exitosamente!"
                    });
                    vm.editing.set(None);
                    vm.form.set(PromocionForm::default());
                    vm.load();
                }
                Err(e) => {
                    log::error!("save promocion: {}", e);
                    vm.flash
                        .error("Error guardando la promoción. Inténtalo de nuevo.");
                }
            }
        });
    }
}
