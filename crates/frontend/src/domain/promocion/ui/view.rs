use contracts::domain::common::Status;
use contracts::domain::promocion::Promocion;
use leptos::prelude::*;

use super::view_model::PromocionViewModel;
use crate::shared::date_utils::{format_date, MESES};
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn PromocionPage() -> impl IntoView {
    let vm = PromocionViewModel::new();
    vm.load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE PROMOCIONES"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Promoción"</strong></legend>

                <div class="form__group">
                    <label for="nombre_promocion">"Nombre"</label>
                    <input
                        type="text"
                        id="nombre_promocion"
                        placeholder="Nombre de la promoción"
                        prop:value=move || vm.form.get().nombre_promocion
                        on:input=move |ev| vm.form.update(|f| f.nombre_promocion = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="descripcion">"Descripción"</label>
                    <input
                        type="text"
                        id="descripcion"
                        placeholder="Descripción de la promoción"
                        prop:value=move || vm.form.get().descripcion
                        on:input=move |ev| vm.form.update(|f| f.descripcion = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="porcentaje_descuento">"Porcentaje de descuento (%)"</label>
                    <input
                        type="number"
                        id="porcentaje_descuento"
                        step="0.01"
                        min="0"
                        max="100"
                        placeholder="Porcentaje de descuento"
                        prop:value=move || {
                            let pct = vm.form.get().porcentaje_descuento;
                            if pct == 0.0 { String::new() } else { pct.to_string() }
                        }
                        on:input=move |ev| {
                            let valor = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.porcentaje_descuento = valor);
                        }
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="fecha_inicio">"Fecha de inicio"</label>
                    <input
                        type="date"
                        id="fecha_inicio"
                        prop:value=move || vm.form.get().fecha_inicio
                        on:input=move |ev| vm.form.update(|f| f.fecha_inicio = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="fecha_fin">"Fecha de fin"</label>
                    <input
                        type="date"
                        id="fecha_fin"
                        prop:value=move || vm.form.get().fecha_fin
                        on:input=move |ev| vm.form.update(|f| f.fecha_fin = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="status">"Estado"</label>
                    <select
                        id="status"
                        prop:value=move || vm.form.get().status.code()
                        on:change=move |ev| {
                            let status = Status::from_code(&event_target_value(&ev));
                            vm.form.update(|f| f.status = status);
                        }
                        required
                    >
                        <option value="A">"Activo"</option>
                        <option value="I">"Inactivo"</option>
                    </select>
                </div>

                <Show when=move || vm.editing.get().is_some()>
                    <div class="form__group">
                        <label for="usuario_mod">"Usuario que edita"</label>
                        <input
                            type="text"
                            id="usuario_mod"
                            placeholder="Nombre del usuario"
                            prop:value=move || vm.form.get().usuario_mod
                            on:input=move |ev| vm.form.update(|f| f.usuario_mod = event_target_value(&ev))
                            required
                        />
                    </div>
                </Show>

                <div class="form__actions">
                    <button type="submit" class="button button--primary">
                        {move || if vm.editing.get().is_some() { "Actualizar" } else { "Agregar" }}
                    </button>
                    <Show when=move || vm.editing.get().is_some()>
                        <button type="button" class="button button--secondary" on:click=move |_| vm.cancel_edit()>
                            "Cancelar"
                        </button>
                    </Show>
                </div>

                <FlashView flash=vm.flash />
            </form>

            <div class="filter-panel">
                <label for="mes">"Filtrar por mes:"</label>
                <select
                    id="mes"
                    prop:value=move || {
                        vm.selected_month.get().map(|m| m.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        vm.selected_month.set(event_target_value(&ev).parse().ok());
                    }
                >
                    <option value="">"Selecciona un mes"</option>
                    {MESES.iter().enumerate().map(|(i, nombre)| view! {
                        <option value={(i + 1).to_string()}>{*nombre}</option>
                    }).collect_view()}
                </select>
                <button type="button" class="button button--primary" on:click=move |_| vm.apply_month_filter()>
                    {icon("refresh")}
                    "Filtrar"
                </button>
            </div>

            <div class="widget">
                <h5 class="widget__title">"Tabla " <span class="widget__subtitle">"Promociones"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Descripción"</th>
                            <th>"Descuento"</th>
                            <th>"Fecha de inicio"</th>
                            <th>"Fecha de fin"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.filtered()
                            key=|p| p.promocion_id
                            children=move |p: Promocion| {
                                let row_for_edit = p.clone();
                                view! {
                                    <tr>
                                        <td>{p.nombre_promocion.clone()}</td>
                                        <td>{p.descripcion.clone()}</td>
                                        <td>{format!("{}%", p.porcentaje_descuento)}</td>
                                        <td>{format_date(&p.fecha_inicio)}</td>
                                        <td>{format_date(&p.fecha_fin)}</td>
                                        <td>
                                            {if p.status.is_active() {
                                                view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge--error">"Inactivo"</span> }.into_any()
                                            }}
                                        </td>
                                        <td class="table__actions">
                                            <button
                                                type="button"
                                                class="button button--small"
                                                on:click=move |_| vm.start_edit(row_for_edit.clone())
                                            >
                                                {icon("edit")}
                                                "Editar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
