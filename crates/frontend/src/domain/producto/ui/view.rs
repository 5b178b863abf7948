use contracts::domain::common::Status;
use contracts::domain::producto::Producto;
use leptos::prelude::*;

use super::view_model::ProductoViewModel;
use crate::shared::date_utils::format_money;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn ProductoPage() -> impl IntoView {
    let vm = ProductoViewModel::new();
    vm.load();
    vm.load_categorias();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE PRODUCTOS"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Producto"</strong></legend>

                <div class="form__group">
                    <label for="nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="nombre"
                        placeholder="Nombre del producto"
                        prop:value=move || vm.form.get().nombre
                        on:input=move |ev| vm.form.update(|f| f.nombre = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="descripcion">"Descripción"</label>
                    <input
                        type="text"
                        id="descripcion"
                        placeholder="Descripción del producto"
                        prop:value=move || vm.form.get().descripcion
                        on:input=move |ev| vm.form.update(|f| f.descripcion = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="precio">"Precio ($)"</label>
                    <input
                        type="number"
                        id="precio"
                        step="0.01"
                        min="0"
                        placeholder="Precio del producto"
                        prop:value=move || {
                            let precio = vm.form.get().precio;
                            if precio == 0.0 { String::new() } else { precio.to_string() }
                        }
                        on:input=move |ev| {
                            let valor = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.precio = valor);
                        }
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="categoria_id">"Categoría"</label>
                    <select
                        id="categoria_id"
                        prop:value=move || {
                            vm.form.get().categoria_id.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let valor = event_target_value(&ev).parse().ok();
                            vm.form.update(|f| f.categoria_id = valor);
                        }
                        required
                    >
                        <option value="" disabled selected>"Selecciona una categoría"</option>
                        {move || vm.categorias.get().into_iter().map(|c| view! {
                            <option value=c.categoria_id.to_string()>{c.nombre_categoria}</option>
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
                <h5 class="widget__title">"Productos " <span class="widget__subtitle">"Limpieza"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Descripción"</th>
                            <th>"Precio"</th>
                            <th>"Categoría"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|p| p.producto_id
                            children=move |p: Producto| {
                                let row_for_edit = p.clone();
                                let row_for_toggle = p.clone();
                                let categoria_id = p.categoria_id;
                                let categoria_nombre = move || {
                                    categoria_id
                                        .and_then(|id| {
                                            vm.categorias.with(|cats| {
                                                cats.iter()
                                                    .find(|c| c.categoria_id == id)
                                                    .map(|c| c.nombre_categoria.clone())
                                            })
                                        })
                                        .unwrap_or_else(|| "Categoría no encontrada".to_string())
                                };
                                view! {
                                    <tr>
                                        <td>{p.nombre.clone()}</td>
                                        <td>{p.descripcion.clone()}</td>
                                        <td>{format_money(p.precio)}</td>
                                        <td>{categoria_nombre}</td>
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
                                            <button
                                                type="button"
                                                class="button button--small button--secondary"
                                                title="Cambiar estado"
                                                on:click=move |_| vm.toggle_status(&row_for_toggle)
                                            >
                                                {icon("refresh")}
                                                {if p.status.is_active() { "Desactivar" } else { "Activar" }}
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
