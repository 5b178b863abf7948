use contracts::domain::common::Status;
use contracts::domain::compra::CompraProducto;
use leptos::prelude::*;

use super::view_model::CompraViewModel;
use crate::shared::date_utils::{format_date, format_money, MESES};
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn CompraPage() -> impl IntoView {
    let vm = CompraViewModel::new();
    vm.load();
    vm.load_referencias();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE COMPRAS"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Compra"</strong></legend>

                <div class="form__group">
                    <label for="proveedor_id">"Proveedor"</label>
                    <select
                        id="proveedor_id"
                        prop:value=move || {
                            vm.form.get().proveedor_id.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let valor = event_target_value(&ev).parse().ok();
                            vm.form.update(|f| f.proveedor_id = valor);
                        }
                        required
                    >
                        <option value="" disabled selected>"Selecciona un proveedor"</option>
                        {move || vm.proveedores.get().into_iter().map(|p| view! {
                            <option value=p.proveedor_id.to_string()>{p.nombre_proveedor}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <label for="producto_id">"Producto"</label>
                    <select
                        id="producto_id"
                        prop:value=move || {
                            vm.form.get().producto_id.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let valor = event_target_value(&ev).parse().ok();
                            vm.form.update(|f| f.producto_id = valor);
                        }
                        required
                    >
                        <option value="" disabled selected>"Selecciona un producto"</option>
                        {move || vm.productos.get().into_iter().map(|p| view! {
                            <option value=p.producto_id.to_string()>{p.nombre}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <label for="fecha">"Fecha"</label>
                    <input
                        type="date"
                        id="fecha"
                        prop:value=move || vm.form.get().fecha
                        on:input=move |ev| vm.form.update(|f| f.fecha = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="monto">"Monto ($)"</label>
                    <input
                        type="number"
                        id="monto"
                        step="0.01"
                        min="0"
                        placeholder="Monto de la compra"
                        prop:value=move || {
                            let monto = vm.form.get().monto;
                            if monto == 0.0 { String::new() } else { monto.to_string() }
                        }
                        on:input=move |ev| {
                            let valor = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.monto = valor);
                        }
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="descripcion">"Descripción"</label>
                    <input
                        type="text"
                        id="descripcion"
                        placeholder="Descripción de la compra"
                        prop:value=move || vm.form.get().descripcion
                        on:input=move |ev| vm.form.update(|f| f.descripcion = event_target_value(&ev))
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
                <h5 class="widget__title">"Compras " <span class="widget__subtitle">"Realizadas"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Proveedor"</th>
                            <th>"Producto"</th>
                            <th>"Fecha"</th>
                            <th>"Monto"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.filtered()
                            key=|c| c.compra_producto_id
                            children=move |c: CompraProducto| {
                                let row_for_edit = c.clone();
                                let proveedor_id = c.proveedor_id;
                                let producto_id = c.producto_id;
                                let proveedor_nombre = move || {
                                    vm.proveedores.with(|ps| {
                                        ps.iter()
                                            .find(|p| p.proveedor_id == proveedor_id)
                                            .map(|p| p.nombre_proveedor.clone())
                                    })
                                    .unwrap_or_else(|| "Proveedor no encontrado".to_string())
                                };
                                let producto_nombre = move || {
                                    vm.productos.with(|ps| {
                                        ps.iter()
                                            .find(|p| p.producto_id == producto_id)
                                            .map(|p| p.nombre.clone())
                                    })
                                    .unwrap_or_else(|| "Producto no encontrado".to_string())
                                };
                                view! {
                                    <tr>
                                        <td>{proveedor_nombre}</td>
                                        <td>{producto_nombre}</td>
                                        <td>{format_date(&c.fecha)}</td>
                                        <td>{format_money(c.monto)}</td>
                                        <td>
                                            {if c.status.is_active() {
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
