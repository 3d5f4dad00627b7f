//! Page language and built-in fallback strings.

use super::SiteConfig;

/// Supported page languages. Arabic is the default and renders right-to-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    /// Key used in the config's `i18n` and `content` maps.
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Value for the document `dir` attribute.
    pub fn direction(self) -> &'static str {
        match self {
            Language::Arabic => "rtl",
            Language::English => "ltr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }

    /// Label of the toggle button, naming the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Arabic => "EN",
            Language::English => "AR",
        }
    }
}

/// Text for `key`: configured value first, then the built-in fallback.
pub fn text(config: &SiteConfig, language: Language, key: &str) -> String {
    config
        .lookup(language, key)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_text(language, key).to_string())
}

fn fallback_text(language: Language, key: &str) -> &'static str {
    match (language, key) {
        (Language::Arabic, "nav_models") => "الموديلات",
        (Language::English, "nav_models") => "Models",
        (Language::Arabic, "nav_faq") => "الأسئلة الشائعة",
        (Language::English, "nav_faq") => "FAQ",
        (Language::Arabic, "nav_contact") => "تواصل معنا",
        (Language::English, "nav_contact") => "Contact",
        (Language::Arabic, "hero_title") => "سمارت سيليكت",
        (Language::English, "hero_title") => "Smart Select",
        (Language::Arabic, "cta_request") => "اطلب الآن",
        (Language::English, "cta_request") => "Request now",
        (Language::Arabic, "cta_report") => "حمّل التقرير",
        (Language::English, "cta_report") => "Download report",
        (Language::Arabic, "models_title") => "الموديلات",
        (Language::English, "models_title") => "Models",
        (Language::Arabic, "faq_title") => "الأسئلة الشائعة",
        (Language::English, "faq_title") => "Frequently asked questions",
        (_, "problem_title") => "Problem",
        (_, "why_title") => "Why",
        (_, "whatsapp") => "WhatsApp",
        (_, "facebook") => "Facebook",
        (_, "config_error") => {
            "حدث خطأ في تحميل الإعدادات (site.json). تأكد من وجود الملف في config/site.json."
        }
        _ => "",
    }
}
