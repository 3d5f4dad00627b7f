//! State management module
//!
//! Data structures behind the page:
//! - SiteConfig: The parsed `site.json` (links, images, i18n, content, models)
//! - Language: Active page language and fallback strings
//! - ContactLinks: Resolved button hrefs
//! - MenuState / FaqState: Header menu and FAQ accordion state

mod site_config;
mod language;
mod links;
mod menu;
mod faq;

pub use site_config::*;
pub use language::*;
pub use links::*;
pub use menu::*;
pub use faq::*;
