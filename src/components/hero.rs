use dioxus::prelude::*;

use crate::constants::*;
use crate::utils::css_url;

#[component]
pub fn Hero(
    // Empty for no background image.
    background: String,
    title: String,
    subtitle: String,
    cta_label: String,
    cta_href: String,
) -> Element {
    let background_image = if background.trim().is_empty() {
        "none".to_string()
    } else {
        css_url(background.trim())
    };

    rsx! {
        section {
            id: "hero",
            class: "hero",
            style: "position: relative; min-height: 420px; display: flex; align-items: center; justify-content: center; overflow: hidden;",
            div {
                id: "heroBg",
                style: "
                    position: absolute; inset: 0;
                    background-image: {background_image}; background-size: cover; background-position: center;
                    filter: brightness(0.45);
                ",
            }
            div {
                style: "position: relative; max-width: 760px; padding: 64px 24px; text-align: center;",
                h1 {
                    style: "margin: 0 0 16px; font-size: 42px; color: {TEXT_PRIMARY};",
                    "{title}"
                }
                p {
                    class: "hero__subtitle",
                    style: "margin: 0 0 28px; font-size: 18px; line-height: 1.6; color: {TEXT_SECONDARY};",
                    "{subtitle}"
                }
                a {
                    id: "ctaHero",
                    class: "cta",
                    href: "{cta_href}",
                    target: "_blank",
                    rel: "noopener",
                    "{cta_label}"
                }
            }
        }
    }
}
