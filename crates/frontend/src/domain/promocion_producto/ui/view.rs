use contracts::domain::common::Status;
use contracts::domain::promocion_producto::PromocionProducto;
use leptos::prelude::*;

use super::view_model::PromocionProductoViewModel;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn PromocionProductoPage() -> impl IntoView {
    let vm = PromocionProductoViewModel::new();
    vm.load();
    vm.load_referencias();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE PROMOCIONES DE PRODUCTOS"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Promoción de Producto"</strong></legend>

                <div class="form__group">
                    <label for="promocion_id">"Promoción"</label>
                    <select
                        id="promocion_id"
                        prop:value=move || {
                            vm.form.get().promocion_id.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let valor = event_target_value(&ev).parse().ok();
                            vm.form.update(|f| f.promocion_id = valor);
                        }
                        required
                    >
                        <option value="" disabled selected>"Selecciona una promoción"</option>
                        {move || vm.promociones.get().into_iter().map(|p| view! {
                            <option value=p.promocion_id.to_string()>{p.nombre_promocion}</option>
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

            <div class="widget">
                <h5 class="widget__title">"Promociones " <span class="widget__subtitle">"por Producto"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Promoción"</th>
                            <th>"Producto"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|pp| pp.promocion_producto_id
                            children=move |pp: PromocionProducto| {
                                let row_for_edit = pp.clone();
                                let promocion_id = pp.promocion_id;
                                let producto_id = pp.producto_id;
                                let promocion_nombre = move || {
                                    vm.promociones.with(|ps| {
                                        ps.iter()
                                            .find(|p| p.promocion_id == promocion_id)
                                            .map(|p| p.nombre_promocion.clone())
                                    })
                                    .unwrap_or_else(|| "Promoción no encontrada".to_string())
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
                                        <td>{promocion_nombre}</td>
                                        <td>{producto_nombre}</td>
                                        <td>
                                            {if pp.status.is_active() {
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
