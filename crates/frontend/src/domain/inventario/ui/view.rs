use contracts::domain::common::Status;
use contracts::domain::inventario::Inventario;
use leptos::prelude::*;

use super::view_model::InventarioViewModel;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn InventarioPage() -> impl IntoView {
    let vm = InventarioViewModel::new();
    vm.load();
    vm.load_productos();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    let producto_nombre = move |producto_id: i64| {
        vm.productos
            .with(|ps| {
                ps.iter()
                    .find(|p| p.producto_id == producto_id)
                    .map(|p| p.nombre.clone())
            })
            .unwrap_or_else(|| "No disponible".to_string())
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE INVENTARIO"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Inventario"</strong></legend>

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
                    <label for="cantidad">"Cantidad"</label>
                    <input
                        type="number"
                        id="cantidad"
                        min="0"
                        placeholder="Cantidad"
                        prop:value=move || {
                            let cantidad = vm.form.get().cantidad;
                            if cantidad == 0 { String::new() } else { cantidad.to_string() }
                        }
                        on:input=move |ev| {
                            let valor = event_target_value(&ev).parse().unwrap_or(0);
                            vm.form.update(|f| f.cantidad = valor);
                        }
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="fecha_creac">"Fecha"</label>
                    <input
                        type="date"
                        id="fecha_creac"
                        prop:value=move || vm.form.get().fecha_creac
                        on:input=move |ev| vm.form.update(|f| f.fecha_creac = event_target_value(&ev))
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

            <div class="widget">
                <h5 class="widget__title">"Inventario " <span class="widget__subtitle">"por Producto"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Producto"</th>
                            <th>"Cantidad total"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.agrupados().into_iter().map(|g| {
                            let nombre = producto_nombre(g.producto_id);
                            view! {
                                <tr>
                                    <td>{nombre}</td>
                                    <td>{g.cantidad}</td>
                                    <td>
                                        {if g.status.is_active() {
                                            view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--error">"Inactivo"</span> }.into_any()
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="widget">
                <h5 class="widget__title">"Inventario " <span class="widget__subtitle">"Gestión Detallada"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Producto"</th>
                            <th>"Cantidad"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|i| i.inventario_id
                            children=move |i: Inventario| {
                                let row_for_edit = i.clone();
                                let row_for_toggle = i.clone();
                                let producto_id = i.producto_id;
                                let nombre = move || producto_nombre(producto_id);
                                view! {
                                    <tr>
                                        <td>{nombre}</td>
                                        <td>{i.cantidad}</td>
                                        <td>
                                            {if i.status.is_active() {
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
                                            <button
                                                type="button"
                                                class="button button--small button--secondary"
                                                title="Cambiar estado"
                                                on:click=move |_| vm.toggle_status(&row_for_toggle)
                                            >
                                                {icon("refresh")}
                                                {if i.status.is_active() { "Desactivar" } else { "Activar" }}
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
