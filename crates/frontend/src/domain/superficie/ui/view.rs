use contracts::domain::common::Status;
use contracts::domain::superficie::CategoriaSuperficie;
use leptos::prelude::*;

use super::view_model::SuperficieViewModel;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn SuperficiePage() -> impl IntoView {
    let vm = SuperficieViewModel::new();
    vm.load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE CATEGORÍAS DE ÁREAS"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Áreas"</strong></legend>

                <div class="form__group">
                    <label for="superficie_nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="superficie_nombre"
                        placeholder="Nombre de la superficie"
                        prop:value=move || vm.form.get().superficie_nombre
                        on:input=move |ev| vm.form.update(|f| f.superficie_nombre = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="superficie_descripcion">"Descripción"</label>
                    <input
                        type="text"
                        id="superficie_descripcion"
                        placeholder="Descripción de la superficie"
                        prop:value=move || vm.form.get().superficie_descripcion
                        on:input=move |ev| vm.form.update(|f| f.superficie_descripcion = event_target_value(&ev))
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
                <h5 class="widget__title">"Categorías de Áreas " <span class="widget__subtitle">"Registro"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Descripción"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|s| s.categoria_superficie_producto_id
                            children=move |s: CategoriaSuperficie| {
                                let row_for_edit = s.clone();
                                view! {
                                    <tr>
                                        <td>{s.superficie_nombre.clone()}</td>
                                        <td>{s.superficie_descripcion.clone()}</td>
                                        <td>
                                            {if s.status.is_active() {
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
