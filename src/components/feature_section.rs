use dioxus::prelude::*;

use crate::constants::*;

/// Image + bullet list section used for the "problem" and "why" blocks.
#[component]
pub fn FeatureSection(
    id: String,
    title: String,
    image: String,
    image_alt: String,
    bullets: Vec<String>,
    // Empty strings leave out the intro paragraph and the call to action.
    #[props(default)] intro: String,
    #[props(default)] cta_id: String,
    #[props(default)] cta_label: String,
    #[props(default)] cta_href: String,
    #[props(default = false)] reversed: bool,
) -> Element {
    let row_direction = if reversed { "row-reverse" } else { "row" };
    let image = Some(image).filter(|src| !src.trim().is_empty());
    let intro = Some(intro).filter(|text| !text.trim().is_empty());
    let cta = if cta_label.is_empty() || cta_href.is_empty() {
        None
    } else {
        Some((cta_id, cta_label, cta_href))
    };

    rsx! {
        section {
            id: "{id}",
            style: "padding: 56px 24px; background-color: {BG_BASE};",
            div {
                class: "feature-row",
                style: "display: flex; flex-direction: {row_direction}; flex-wrap: wrap; gap: 32px; align-items: center; max-width: 1100px; margin: 0 auto;",
                if let Some(src) = image {
                    img {
                        id: "{id}Img",
                        src: "{src}",
                        alt: "{image_alt}",
                        style: "flex: 1 1 320px; max-width: 480px; width: 100%; border-radius: 16px; object-fit: cover;",
                    }
                }
                div {
                    style: "flex: 1 1 320px;",
                    h2 {
                        style: "margin: 0 0 16px; font-size: 28px; color: {TEXT_PRIMARY};",
                        "{title}"
                    }
                    if let Some(text) = intro {
                        p {
                            class: "problemIntro muted",
                            style: "margin: 0 0 16px; line-height: 1.7; color: {TEXT_MUTED};",
                            "{text}"
                        }
                    }
                    ul {
                        id: "{id}Bullets",
                        style: "margin: 0; padding-inline-start: 20px; line-height: 1.9; color: {TEXT_SECONDARY};",
                        for bullet in bullets.iter() {
                            li { "{bullet}" }
                        }
                    }
                    if let Some((cta_id, label, href)) = cta {
                        a {
                            id: "{cta_id}",
                            class: "cta",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener",
                            style: "margin-top: 24px;",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
