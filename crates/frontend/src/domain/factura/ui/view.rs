use contracts::domain::common::Status;
use contracts::domain::factura::Factura;
use leptos::prelude::*;

use super::view_model::FacturaViewModel;
use crate::shared::date_utils::format_date;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn FacturaPage() -> impl IntoView {
    let vm = FacturaViewModel::new();
    vm.load();
    vm.load_clientes();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE FACTURAS"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Factura"</strong></legend>

                <div class="form__group">
                    <label for="cliente">"Cliente"</label>
                    <select
                        id="cliente"
                        prop:value=move || {
                            vm.form.get().cliente.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let valor = event_target_value(&ev).parse().ok();
                            vm.form.update(|f| f.cliente = valor);
                        }
                        required
                    >
                        <option value="" disabled selected>"Seleccione un cliente"</option>
                        {move || vm.clientes.get().into_iter().map(|c| view! {
                            <option value=c.id_cliente.to_string()>{c.nombre_completo()}</option>
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
                <h5 class="widget__title">"Facturas " <span class="widget__subtitle">"Emitidas"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Fecha"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|f| f.factura_id
                            children=move |f: Factura| {
                                let row_for_edit = f.clone();
                                let cliente_id = f.cliente;
                                let cliente_nombre = move || {
                                    vm.clientes.with(|cs| {
                                        cs.iter()
                                            .find(|c| c.id_cliente == cliente_id)
                                            .map(|c| c.nombre_completo())
                                    })
                                    .unwrap_or_else(|| "Cliente no encontrado".to_string())
                                };
                                view! {
                                    <tr>
                                        <td>{cliente_nombre}</td>
                                        <td>{format_date(&f.fecha)}</td>
                                        <td>
                                            {if f.status.is_active() {
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
