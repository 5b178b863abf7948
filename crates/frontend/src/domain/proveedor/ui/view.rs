use contracts::domain::common::Status;
use contracts::domain::proveedor::Proveedor;
use leptos::prelude::*;

use super::view_model::ProveedorViewModel;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn ProveedorPage() -> impl IntoView {
    let vm = ProveedorViewModel::new();
    vm.load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE PROVEEDORES"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Proveedor"</strong></legend>

                <div class="form__group">
                    <label for="nombre_proveedor">"Nombre del Proveedor"</label>
                    <input
                        type="text"
                        id="nombre_proveedor"
                        placeholder="Nombre del proveedor"
                        prop:value=move || vm.form.get().nombre_proveedor
                        on:input=move |ev| vm.form.update(|f| f.nombre_proveedor = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="nombre_contacto">"Nombre de Contacto"</label>
                    <input
                        type="text"
                        id="nombre_contacto"
                        placeholder="Nombre de contacto"
                        prop:value=move || vm.form.get().nombre_contacto
                        on:input=move |ev| vm.form.update(|f| f.nombre_contacto = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="telefono">"Teléfono"</label>
                    <input
                        type="text"
                        id="telefono"
                        placeholder="Teléfono"
                        prop:value=move || vm.form.get().telefono
                        on:input=move |ev| vm.form.update(|f| f.telefono = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="correo">"Correo"</label>
                    <input
                        type="email"
                        id="correo"
                        placeholder="Correo electrónico"
                        prop:value=move || vm.form.get().correo
                        on:input=move |ev| vm.form.update(|f| f.correo = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="direccion">"Dirección"</label>
                    <input
                        type="text"
                        id="direccion"
                        placeholder="Dirección"
                        prop:value=move || vm.form.get().direccion
                        on:input=move |ev| vm.form.update(|f| f.direccion = event_target_value(&ev))
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
                <h5 class="widget__title">"Proveedores " <span class="widget__subtitle">"Registro"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Nombre del Proveedor"</th>
                            <th>"Nombre de Contacto"</th>
                            <th>"Teléfono"</th>
                            <th>"Estado"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|p| p.proveedor_id
                            children=move |p: Proveedor| {
                                let row_for_edit = p.clone();
                                view! {
                                    <tr>
                                        <td>{p.nombre_proveedor.clone()}</td>
                                        <td>{p.nombre_contacto.clone()}</td>
                                        <td>{p.telefono.clone()}</td>
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
