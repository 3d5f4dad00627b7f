//! Root application component
//!
//! Loads the site config, owns page-level state (language, menu) and lays
//! out the sections.

use dioxus::prelude::*;

use crate::components::{FaqList, FeatureSection, Hero, ModelsMarquee, SiteFooter, SiteHeader};
use crate::constants::*;
use crate::core::config_loader::load_site_config;
use crate::hotkeys::{handle_hotkey, key_from_name, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{text, ContactLinks, Language, MenuState, SiteConfig};
use crate::utils::{copyright_line, current_year};

fn document_language_script(language: Language) -> String {
    format!(
        "document.documentElement.lang = \"{}\"; document.documentElement.dir = \"{}\";",
        language.code(),
        language.direction()
    )
}

#[component]
pub fn App() -> Element {
    let mut config = use_signal(SiteConfig::default);
    let mut config_failed = use_signal(|| false);
    let mut language = use_signal(Language::default);
    // Bumped on every language switch; sections keyed by it start fresh.
    let mut epoch = use_signal(|| 0_u32);
    let mut menu = use_signal(MenuState::default);

    use_future(move || async move {
        match load_site_config().await {
            Ok(loaded) => {
                log::info!(
                    "site config loaded ({} model items)",
                    loaded.model_items().len()
                );
                config.set(loaded);
            }
            Err(err) => {
                log::error!("failed to load site config: {}", err);
                config_failed.set(true);
            }
        }
    });

    // Key presses are caught at document level so they work wherever focus is.
    use_future(move || async move {
        let mut eval = document::eval(DOCUMENT_KEYDOWN_SCRIPT);
        loop {
            let name = match eval.recv::<String>().await {
                Ok(name) => name,
                Err(err) => {
                    log::warn!("keyboard bridge closed: {:?}", err);
                    break;
                }
            };
            let hotkey_context = HotkeyContext {
                menu_open: menu.peek().open,
            };
            match handle_hotkey(&key_from_name(&name), &hotkey_context) {
                HotkeyResult::Action(HotkeyAction::CloseMenu) => menu.write().close(),
                HotkeyResult::NoMatch => {}
            }
        }
    });

    use_effect(move || {
        let language = language();
        let _ = document::eval(&document_language_script(language));
    });

    let lang = language();
    let render_epoch = epoch();
    let cfg = config.read();
    let t = |key: &str| text(&cfg, lang, key);
    let links = ContactLinks::resolve(&cfg.links);
    let content = cfg.content_for(lang);
    let model_items = cfg.model_items().to_vec();
    let hero_subtitle = if config_failed() {
        t("config_error")
    } else {
        t("hero_subtitle")
    };
    let problem_title = t("problem_title");
    let why_title = t("why_title");
    let cta_request = t("cta_request");
    let copyright = copyright_line(current_year());

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html {{ scroll-behavior: smooth; }}
            html, body {{ margin: 0; padding: 0; background-color: {BG_DEEPEST}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            .cta {{
                display: inline-flex; align-items: center; justify-content: center;
                padding: 12px 22px; border-radius: 999px; font-weight: 600; text-decoration: none;
                background-color: {ACCENT_PRIMARY}; color: {BG_DEEPEST};
                transition: opacity 0.15s ease;
            }}
            .cta:hover {{ opacity: 0.85; }}
            .cta--ghost {{ background-color: transparent; border: 1px solid {BORDER_DEFAULT}; color: {TEXT_PRIMARY}; }}
            .menu-link:hover {{ background-color: {BG_HOVER}; }}
            .pill-btn:hover {{ background-color: {BG_HOVER} !important; }}
            .faqQ:hover {{ background-color: {BG_SURFACE} !important; }}
            "#
        }

        div {
            id: "pageTop",
            style: "
                min-height: 100vh;
                background-color: {BG_DEEPEST}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Tahoma, Roboto, sans-serif;
            ",
            onclick: move |_| {
                if menu.read().open {
                    menu.write().close();
                }
            },

            SiteHeader {
                brand: t("hero_title"),
                nav_models: t("nav_models"),
                nav_faq: t("nav_faq"),
                nav_contact: t("nav_contact"),
                whatsapp_label: t("whatsapp"),
                whatsapp_href: links.whatsapp.clone(),
                facebook_label: t("facebook"),
                facebook_href: links.facebook.clone(),
                language_label: lang.toggle_label().to_string(),
                menu: menu(),
                on_top: move |_| {
                    menu.write().close();
                    let _ = document::eval(SCROLL_TO_TOP_SCRIPT);
                },
                on_toggle_language: move |_| {
                    menu.write().close();
                    language.set(language().toggled());
                    epoch += 1;
                    log::debug!("language switched to {}", language().code());
                },
                on_toggle_menu: move |height: Option<f64>| menu.write().toggle(height),
                on_close_menu: move |_| menu.write().close(),
                on_header_resized: move |height: Option<f64>| {
                    if menu.peek().open {
                        menu.write().resync(height);
                    }
                },
            }

            Hero {
                background: cfg.images.hero_bg.clone().unwrap_or_default(),
                title: t("hero_title"),
                subtitle: hero_subtitle,
                cta_label: cta_request.clone(),
                cta_href: links.request_form.clone(),
            }

            FeatureSection {
                id: "problem".to_string(),
                title: problem_title.clone(),
                image: cfg.images.problem.clone().unwrap_or_default(),
                image_alt: problem_title,
                bullets: content.problem_bullets.clone(),
                intro: content.problem_intro.clone().unwrap_or_default(),
                cta_id: "ctaProblem".to_string(),
                cta_label: cta_request.clone(),
                cta_href: links.request_form.clone(),
            }

            FeatureSection {
                id: "why".to_string(),
                title: why_title.clone(),
                image: cfg.images.why.clone().unwrap_or_default(),
                image_alt: why_title,
                bullets: content.why_bullets.clone(),
                reversed: true,
            }

            ModelsMarquee {
                title: t("models_title"),
                items: model_items,
                epoch: render_epoch,
            }

            FaqList {
                key: "{render_epoch}",
                title: t("faq_title"),
                entries: content.faq.clone(),
            }

            SiteFooter {
                copyright: copyright,
                note: t("footer_note"),
                whatsapp_label: t("whatsapp"),
                whatsapp_href: links.whatsapp.clone(),
                facebook_label: t("facebook"),
                facebook_href: links.facebook.clone(),
                cta_label: cta_request,
                cta_href: links.request_form.clone(),
                report_label: t("cta_report"),
                report_href: links.report_pdf.clone(),
                show_report: links.has_report(),
            }
        }
    }
}
