use contracts::domain::common::Status;
use contracts::domain::factura_detalle::FacturaDetalle;
use leptos::prelude::*;

use super::view_model::FacturaDetalleViewModel;
use crate::shared::date_utils::format_money;
use crate::shared::flash::FlashView;
use crate::shared::icons::icon;

#[component]
pub fn FacturaDetallePage() -> impl IntoView {
    let vm = FacturaDetalleViewModel::new();
    vm.load();
    vm.load_referencias();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <div class="page">
            <h2 class="page__title">"GESTIÓN DE DETALLES DE FACTURA"</h2>

            <form class="form" on:submit=on_submit>
                <legend><strong>"Formulario de Detalle de Factura"</strong></legend>

                <div class="form__group">
                    <label for="factura_id">"Factura"</label>
                    <select
                        id="factura_id"
                        prop:value=move || {
                            vm.form.get().factura_id.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let valor = event_target_value(&ev).parse().ok();
                            vm.form.update(|f| f.factura_id = valor);
                        }
                        required
                    >
                        <option value="" disabled selected>"Selecciona una factura"</option>
                        {move || vm.facturas.get().into_iter().map(|f| {
                            let etiqueta = vm.factura_label(&f);
                            view! {
                                <option value=f.factura_id.to_string()>{etiqueta}</option>
                            }
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
                            vm.set_producto(event_target_value(&ev).parse().ok());
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
                        min="1"
                        placeholder="Cantidad"
                        prop:value=move || {
                            let cantidad = vm.form.get().cantidad;
                            if cantidad == 0 { String::new() } else { cantidad.to_string() }
                        }
                        on:input=move |ev| {
                            vm.set_cantidad(event_target_value(&ev).parse().unwrap_or(0));
                        }
                        required
                    />
                </div>

                <div class="form__group">
                    <label for="subtotal">"Subtotal"</label>
                    <input
                        type="text"
                        id="subtotal"
                        prop:value=move || format_money(vm.form.get().subtotal)
                        readonly
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
                <h5 class="widget__title">"Detalles de Factura " <span class="widget__subtitle">"Limpieza"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Factura"</th>
                            <th>"Producto"</th>
                            <th>"Cantidad"</th>
                            <th>"Subtotal"</th>
                            <th>"Status"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|d| d.factura_detalle_id
                            children=move |d: FacturaDetalle| {
                                let row_for_edit = d.clone();
                                let factura_id = d.factura_id;
                                let producto_id = d.producto_id;
                                let factura_etiqueta = move || {
                                    vm.facturas.with(|fs| {
                                        fs.iter()
                                            .find(|f| f.factura_id == factura_id)
                                            .map(|f| vm.factura_label(f))
                                    })
                                    .unwrap_or_else(|| factura_id.to_string())
                                };
                                let producto_nombre = move || {
                                    vm.productos.with(|ps| {
                                        ps.iter()
                                            .find(|p| p.producto_id == producto_id)
                                            .map(|p| p.nombre.clone())
                                    })
                                    .unwrap_or_else(|| producto_id.to_string())
                                };
                                view! {
                                    <tr>
                                        <td>{factura_etiqueta}</td>
                                        <td>{producto_nombre}</td>
                                        <td>{d.cantidad}</td>
                                        <td>{format_money(d.subtotal)}</td>
                                        <td>
                                            {if d.status.is_active() {
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

            <div class="widget">
                <h5 class="widget__title">"Totales de Factura"</h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"Factura"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.totales().into_iter().map(|t| {
                            let cliente = t
                                .cliente
                                .and_then(|id| {
                                    vm.clientes.with(|cs| {
                                        cs.iter()
                                            .find(|c| c.id_cliente == id)
                                            .map(|c| c.nombre_completo())
                                    })
                                })
                                .unwrap_or_else(|| "Desconocido".to_string());
                            view! {
                                <tr>
                                    <td>{format!("{} - {}", cliente, t.factura_id)}</td>
                                    <td>{format_money(t.total)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
