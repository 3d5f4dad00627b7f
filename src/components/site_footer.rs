use dioxus::prelude::*;

use crate::constants::*;

#[component]
pub fn SiteFooter(
    copyright: String,
    note: String,
    whatsapp_label: String,
    whatsapp_href: String,
    facebook_label: String,
    facebook_href: String,
    cta_label: String,
    cta_href: String,
    report_label: String,
    report_href: String,
    show_report: bool,
) -> Element {
    let report_display = if show_report { "inline-flex" } else { "none" };

    rsx! {
        footer {
            id: "contact",
            style: "padding: 48px 24px 32px; background-color: {BG_DEEPEST}; border-top: 1px solid {BORDER_SUBTLE};",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; justify-content: center; margin-bottom: 28px;",
                a { id: "ctaFooter", class: "cta", href: "{cta_href}", target: "_blank", rel: "noopener", "{cta_label}" }
                a {
                    id: "ctaReport",
                    class: "cta cta--ghost",
                    href: "{report_href}",
                    target: "_blank",
                    rel: "noopener",
                    style: "display: {report_display};",
                    "{report_label}"
                }
                a {
                    id: "waFooter",
                    class: "cta cta--ghost",
                    href: "{whatsapp_href}",
                    target: "_blank",
                    rel: "noopener",
                    style: "color: {ACCENT_WHATSAPP};",
                    "{whatsapp_label}"
                }
                a {
                    id: "fbFooter",
                    class: "cta cta--ghost",
                    href: "{facebook_href}",
                    target: "_blank",
                    rel: "noopener",
                    style: "color: {ACCENT_FACEBOOK};",
                    "{facebook_label}"
                }
            }
            p {
                id: "footerNote",
                style: "margin: 0 0 8px; text-align: center; font-size: 14px; color: {TEXT_MUTED};",
                "{note}"
            }
            p {
                id: "footerCopy",
                style: "margin: 0; text-align: center; font-size: 13px; color: {TEXT_MUTED};",
                "{copyright}"
            }
        }
    }
}
