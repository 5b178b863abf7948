use contracts::domain::historial::HistorialCompra;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::date_utils::format_money;
use crate::shared::flash::{Flash, FlashView};

#[component]
pub fn HistorialComprasPage() -> impl IntoView {
    let items: RwSignal<Vec<HistorialCompra>> = RwSignal::new(Vec::new());
    let flash = Flash::new();

    spawn_local(async move {
        match model::fetch_all().await {
            Ok(data) => items.set(data),
            Err(e) => {
                log::error!("fetch historial_compras: {}", e);
                flash.error("Error al cargar el historial de compras. Inténtalo de nuevo más tarde.");
            }
        }
    });

    view! {
        <div class="page">
            <h2 class="page__title">"HISTORIAL DE COMPRAS"</h2>

            <FlashView flash=flash />

            <div class="widget">
                <h5 class="widget__title">"Historial " <span class="widget__subtitle">"Compras"</span></h5>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th>"ID Cliente"</th>
                            <th>"ID Pedido"</th>
                            <th>"Total Compra"</th>
                            <th>"Status"</th>
                            <th>"Empleado Modificador"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|h| h.id_pedido
                            children=move |h: HistorialCompra| {
                                view! {
                                    <tr>
                                        <td>{h.id_cliente}</td>
                                        <td>{h.id_pedido}</td>
                                        <td>{format_money(h.total_compra)}</td>
                                        <td>
                                            {if h.status.is_active() {
                                                view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge--error">"Inactivo"</span> }.into_any()
                                            }}
                                        </td>
                                        <td>{h.empleado_mod.clone()}</td>
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
