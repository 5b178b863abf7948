//! Tab content registry: maps tab keys to screen components.

use crate::dashboards::resumen::ResumenDashboard;
use crate::domain::categoria::ui::CategoriaPage;
use crate::domain::compra::ui::CompraPage;
use crate::domain::factura::ui::FacturaPage;
use crate::domain::factura_detalle::ui::FacturaDetallePage;
use crate::domain::historial::ui::HistorialComprasPage;
use crate::domain::inventario::ui::InventarioPage;
use crate::domain::producto::ui::ProductoPage;
use crate::domain::promocion::ui::PromocionPage;
use crate::domain::promocion_producto::ui::PromocionProductoPage;
use crate::domain::proveedor::ui::ProveedorPage;
use crate::domain::superficie::ui::SuperficiePage;
use leptos::prelude::*;

/// Tab title for a given key; the sidebar and the URL restore both go
/// through this.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "resumen" => "Resumen",
        "productos" => "Productos",
        "categorias" => "Categorías",
        "superficies" => "Categorías de Áreas",
        "proveedores" => "Proveedores",
        "inventario" => "Inventario",
        "compras" => "Compras",
        "promociones" => "Promociones",
        "promocion_producto" => "Promoción Producto",
        "facturas" => "Facturas",
        "factura_detalle" => "Detalles de Factura",
        "historial_compras" => "Historial de Compras",
        _ => "Pantalla",
    }
}

/// Render a tab's content by key. Unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "resumen" => view! { <ResumenDashboard /> }.into_any(),
        "productos" => view! { <ProductoPage /> }.into_any(),
        "categorias" => view! { <CategoriaPage /> }.into_any(),
        "superficies" => view! { <SuperficiePage /> }.into_any(),
        "proveedores" => view! { <ProveedorPage /> }.into_any(),
        "inventario" => view! { <InventarioPage /> }.into_any(),
        "compras" => view! { <CompraPage /> }.into_any(),
        "promociones" => view! { <PromocionPage /> }.into_any(),
        "promocion_producto" => view! { <PromocionProductoPage /> }.into_any(),
        "facturas" => view! { <FacturaPage /> }.into_any(),
        "factura_detalle" => view! { <FacturaDetallePage /> }.into_any(),
        "historial_compras" => view! { <HistorialComprasPage /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">{"Pantalla no disponible"}</div> }.into_any()
        }
    }
}
