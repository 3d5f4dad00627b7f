use dioxus::prelude::*;
use std::rc::Rc;

use crate::constants::*;
use crate::state::MenuState;

#[component]
pub fn SiteHeader(
    brand: String,
    nav_models: String,
    nav_faq: String,
    nav_contact: String,
    whatsapp_label: String,
    whatsapp_href: String,
    facebook_label: String,
    facebook_href: String,
    language_label: String,
    menu: MenuState,
    on_top: EventHandler<MouseEvent>,
    on_toggle_language: EventHandler<MouseEvent>,
    // Receives the measured header height, if any.
    on_toggle_menu: EventHandler<Option<f64>>,
    on_close_menu: EventHandler<()>,
    // Receives the re-measured header height after a resize.
    on_header_resized: EventHandler<Option<f64>>,
) -> Element {
    let mut header_node = use_signal(|| None::<Rc<MountedData>>);

    use_future(move || async move {
        let mut eval = document::eval(HEADER_RESIZE_SCRIPT);
        loop {
            match eval.recv::<String>().await {
                Ok(reason) => {
                    let node = header_node.peek().clone();
                    let height = match node {
                        Some(node) => node.get_client_rect().await.ok().map(|rect| rect.size.height),
                        None => None,
                    };
                    log::trace!("header: {} -> {:?}", reason, height);
                    on_header_resized.call(height);
                }
                Err(err) => {
                    log::warn!("header: resize bridge closed: {:?}", err);
                    break;
                }
            }
        }
    });
    let panel_display = if menu.open { "flex" } else { "none" };
    let panel_top = menu.panel_top_px;
    let expanded = menu.aria_expanded();
    let menu_class = if menu.open { "hmenu is-open" } else { "hmenu" };

    let link_style = format!(
        "color: {TEXT_PRIMARY}; text-decoration: none; font-size: 15px; padding: 10px 14px; border-radius: 8px;"
    );

    rsx! {
        header {
            class: "header",
            style: "
                position: sticky; top: 0; z-index: 20;
                display: flex; align-items: center; justify-content: space-between;
                padding: 18px 24px;
                background-color: {BG_BASE}; border-bottom: 1px solid {BORDER_DEFAULT};
            ",
            onmounted: move |evt: MountedEvent| header_node.set(Some(evt.data())),
            a {
                class: "js-top",
                href: "#pageTop",
                style: "font-size: 20px; font-weight: 700; color: {ACCENT_PRIMARY}; text-decoration: none;",
                onclick: move |e| {
                    e.prevent_default();
                    on_top.call(e);
                },
                "{brand}"
            }
            div {
                id: "hmenu",
                class: "{menu_class}",
                style: "display: flex; align-items: center; gap: 10px;",
                button {
                    id: "langToggle",
                    class: "pill-btn",
                    style: "
                        background: transparent; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_PRIMARY}; font-size: 13px; cursor: pointer;
                        padding: 6px 12px; border-radius: 999px;
                    ",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_toggle_language.call(e);
                    },
                    "{language_label}"
                }
                button {
                    id: "hmenuBtn",
                    class: "pill-btn",
                    aria_expanded: "{expanded}",
                    aria_controls: "hmenuPanel",
                    style: "
                        background: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_PRIMARY}; font-size: 18px; cursor: pointer;
                        width: 40px; height: 40px; border-radius: 10px;
                    ",
                    onclick: move |e| {
                        e.prevent_default();
                        e.stop_propagation();
                        let node = header_node();
                        spawn(async move {
                            let height = match node {
                                Some(node) => node.get_client_rect().await.ok().map(|rect| rect.size.height),
                                None => None,
                            };
                            on_toggle_menu.call(height);
                        });
                    },
                    "☰"
                }
                nav {
                    id: "hmenuPanel",
                    style: "
                        display: {panel_display}; flex-direction: column; gap: 4px;
                        position: fixed; top: {panel_top}px; inset-inline-end: 16px;
                        min-width: 220px; padding: 10px;
                        background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                        border-radius: 12px; box-shadow: 0 12px 32px rgba(0,0,0,0.45);
                    ",
                    onclick: move |e| e.stop_propagation(),
                    ontouchstart: move |e| e.stop_propagation(),
                    ontouchmove: move |e| e.stop_propagation(),
                    a {
                        class: "menu-link",
                        href: "#models",
                        style: "{link_style}",
                        onclick: move |_| on_close_menu.call(()),
                        "{nav_models}"
                    }
                    a {
                        class: "menu-link",
                        href: "#faq",
                        style: "{link_style}",
                        onclick: move |_| on_close_menu.call(()),
                        "{nav_faq}"
                    }
                    a {
                        class: "menu-link",
                        href: "#contact",
                        style: "{link_style}",
                        onclick: move |_| on_close_menu.call(()),
                        "{nav_contact}"
                    }
                    a {
                        id: "waTop",
                        class: "menu-link",
                        href: "{whatsapp_href}",
                        target: "_blank",
                        rel: "noopener",
                        style: "{link_style} color: {ACCENT_WHATSAPP};",
                        onclick: move |_| on_close_menu.call(()),
                        "{whatsapp_label}"
                    }
                    a {
                        id: "fbTop",
                        class: "menu-link",
                        href: "{facebook_href}",
                        target: "_blank",
                        rel: "noopener",
                        style: "{link_style} color: {ACCENT_FACEBOOK};",
                        onclick: move |_| on_close_menu.call(()),
                        "{facebook_label}"
                    }
                }
            }
        }
    }
}
