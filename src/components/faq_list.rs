use dioxus::prelude::*;

use crate::constants::*;
use crate::state::{FaqEntry, FaqState};

fn item_class(open: bool) -> &'static str {
    if open {
        "faqItem is-open"
    } else {
        "faqItem"
    }
}

/// Accordion of questions. Callers key it by render epoch so every
/// re-render starts with all entries collapsed.
#[component]
pub fn FaqList(title: String, entries: Vec<FaqEntry>) -> Element {
    let mut faq = use_signal(FaqState::default);
    let open = faq.read().clone();

    rsx! {
        section {
            id: "faq",
            style: "padding: 56px 24px; background-color: {BG_BASE};",
            h2 {
                style: "margin: 0 auto 24px; max-width: 860px; font-size: 28px; color: {TEXT_PRIMARY};",
                "{title}"
            }
            div {
                id: "faqList",
                style: "display: flex; flex-direction: column; gap: 10px; max-width: 860px; margin: 0 auto;",
                for (index, entry) in entries.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: item_class(open.is_open(index)),
                        style: "border: 1px solid {BORDER_DEFAULT}; border-radius: 12px; background-color: {BG_ELEVATED}; overflow: hidden;",
                        button {
                            class: "faqQ",
                            r#type: "button",
                            style: "
                                display: flex; width: 100%; align-items: center; justify-content: space-between; gap: 12px;
                                padding: 16px 18px; background: transparent; border: none;
                                color: {TEXT_PRIMARY}; font-size: 16px; text-align: start; cursor: pointer;
                            ",
                            onclick: move |_| faq.write().toggle(index),
                            span { "{entry.q}" }
                            span { class: "faqIcon", {open.icon(index)} }
                        }
                        if open.is_open(index) {
                            div {
                                class: "faqA",
                                style: "padding: 0 18px 16px; line-height: 1.7; color: {TEXT_SECONDARY};",
                                "{entry.a}"
                            }
                        }
                    }
                }
            }
        }
    }
}
