//! Summary dashboard.
//!
//! Demo charts over fixed series, no network calls. Stat cards on top,
//! a monthly revenue bar chart and a category share list below.

use leptos::prelude::*;

use crate::shared::icons::icon;

const MESES_CORTOS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Monthly revenue, one value per month.
const VENTAS_MENSUALES: [f64; 12] = [
    12400.0, 11800.0, 13950.0, 12700.0, 15300.0, 16100.0, 14850.0, 15900.0, 17200.0, 16400.0,
    18100.0, 19650.0,
];

/// (category, share %) of yearly sales.
const VENTAS_POR_CATEGORIA: [(&str, f64); 5] = [
    ("Desinfectantes", 32.0),
    ("Detergentes", 26.0),
    ("Multiusos", 18.0),
    ("Pisos", 14.0),
    ("Vidrios", 10.0),
];

#[component]
fn StatCard(label: &'static str, icon_name: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}

/// Vertical bar chart rendered as plain SVG.
#[component]
fn VentasChart() -> impl IntoView {
    let max = VENTAS_MENSUALES.iter().cloned().fold(f64::MIN, f64::max);
    let bar_width = 28.0;
    let gap = 14.0;
    let chart_height = 180.0;

    let bars = VENTAS_MENSUALES
        .iter()
        .enumerate()
        .map(|(i, valor)| {
            let height = valor / max * chart_height;
            let x = i as f64 * (bar_width + gap);
            let y = chart_height - height;
            view! {
                <g>
                    <rect
                        x=x.to_string()
                        y=y.to_string()
                        width=bar_width.to_string()
                        height=height.to_string()
                        rx="3"
                        fill="var(--color-primary, #4caf50)"
                    />
                    <text
                        x=(x + bar_width / 2.0).to_string()
                        y=(chart_height + 16.0).to_string()
                        text-anchor="middle"
                        font-size="11"
                        fill="currentColor"
                    >
                        {MESES_CORTOS[i]}
                    </text>
                </g>
            }
        })
        .collect_view();

    let total_width = 12.0 * (bar_width + gap);
    view! {
        <svg
            viewBox=format!("0 0 {} {}", total_width, chart_height + 24.0)
            style="width: 100%; max-width: 640px;"
            role="img"
            aria-label="Ventas mensuales"
        >
            {bars}
        </svg>
    }
}

/// Horizontal share bars, one per category.
#[component]
fn CategoriaChart() -> impl IntoView {
    view! {
        <div class="share-list">
            {VENTAS_POR_CATEGORIA.iter().map(|(nombre, pct)| view! {
                <div class="share-list__row">
                    <span class="share-list__label">{*nombre}</span>
                    <div class="share-list__track">
                        <div
                            class="share-list__fill"
                            style=format!("width: {}%;", pct)
                        ></div>
                    </div>
                    <span class="share-list__pct">{format!("{:.0}%", pct)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn ResumenDashboard() -> impl IntoView {
    let total_anual: f64 = VENTAS_MENSUALES.iter().sum();

    view! {
        <div class="page">
            <h2 class="page__title">"RESUMEN"</h2>

            <div class="stat-row">
                <StatCard label="Ventas del año" icon_name="invoices" value=format!("${:.0}", total_anual) />
                <StatCard label="Productos activos" icon_name="products" value="124".to_string() />
                <StatCard label="Proveedores" icon_name="suppliers" value="18".to_string() />
                <StatCard label="Promociones vigentes" icon_name="promotions" value="6".to_string() />
            </div>

            <div class="widget">
                <h5 class="widget__title">"Ventas " <span class="widget__subtitle">"Mensuales"</span></h5>
                <VentasChart />
            </div>

            <div class="widget">
                <h5 class="widget__title">"Ventas " <span class="widget__subtitle">"por Categoría"</span></h5>
                <CategoriaChart />
            </div>
        </div>
    }
}
