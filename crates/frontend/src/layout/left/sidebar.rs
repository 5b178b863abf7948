//! Sidebar with collapsible menu groups, one entry per screen.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "resumen",
            label: "Resumen",
            icon: "dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "catalogo",
            label: "Catálogo",
            icon: "products",
            items: vec![
                ("productos", tab_label_for_key("productos"), "products"),
                ("categorias", tab_label_for_key("categorias"), "categories"),
                ("superficies", tab_label_for_key("superficies"), "surfaces"),
                ("proveedores", tab_label_for_key("proveedores"), "suppliers"),
            ],
        },
        MenuGroup {
            id: "operacion",
            label: "Operación",
            icon: "inventory",
            items: vec![
                ("inventario", tab_label_for_key("inventario"), "inventory"),
                ("compras", tab_label_for_key("compras"), "purchases"),
                ("promociones", tab_label_for_key("promociones"), "promotions"),
                (
                    "promocion_producto",
                    tab_label_for_key("promocion_producto"),
                    "promo-link",
                ),
            ],
        },
        MenuGroup {
            id: "ventas",
            label: "Ventas",
            icon: "invoices",
            items: vec![
                ("facturas", tab_label_for_key("facturas"), "invoices"),
                (
                    "factura_detalle",
                    tab_label_for_key("factura_detalle"),
                    "invoice-lines",
                ),
                (
                    "historial_compras",
                    tab_label_for_key("historial_compras"),
                    "history",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec![
        "catalogo".to_string(),
        "operacion".to_string(),
        "ventas".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();

                    let group_id_stored = StoredValue::new(group_id.clone());
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            // Parent item
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let gid = group_id_stored.get_value();
                                    !has_children && ctx.active.get().as_ref().map(|a| a == &gid).unwrap_or(false)
                                }
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(group.id, group.label);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            // Children
                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
