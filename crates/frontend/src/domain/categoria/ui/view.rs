use contracts::domain::categoria::Categoria;
use contracts::domain::common::Status;
use leptos::prelude::*;

use super::view_model::CategoriaViewModel;
use crate::shared::date_utils::format_date;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn CategoriaPage() -> impl IntoView {
    let vm = CategoriaViewModel::new();
    vm.load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE CATEGORÍAS"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Categoría"</strong></legend>

                <div class="form__group">
                    <label for="nombre_categoria">"Nombre"</label>
                    <input
                        type="text"
                        id="nombre_categoria"
                        placeholder="Nombre de la categoría"
                        prop:value=move || vm.form.get().nombre_categoria
                        on:input=move |ev| vm.form.update(|f| f.nombre_categoria = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="descripcion">"Descripción"</label>
                    <input
                        type="text"
                        id="descripcion"
                        placeholder="Descripción de la categoría"
                        prop:value=move || vm.form.get().descripcion
                        on:input=move |ev| vm.form.update(|f| f.descripcion = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="fecha_creac">"Fecha de creación"</label>
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
                <h5 class="widget__title">"Categorías " <span class="widget__subtitle">"Registro"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Descripción"</th>
                            <th>"Fecha de creación"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|c| c.categoria_id
                            children=move |c: Categoria| {
                                let row_for_edit = c.clone();
                                view! {
                                    <tr>
                                        <td>{c.nombre_categoria.clone()}</td>
                                        <td>{c.descripcion.clone()}</td>
                                        <td>{format_date(&c.fecha_creac)}</td>
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
