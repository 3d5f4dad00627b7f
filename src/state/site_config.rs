use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Language;

/// One card in the models marquee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Image URL or path. Older configs call this field `img`. A missing
    /// image still yields a card.
    #[serde(alias = "img", default)]
    pub image: String,
    /// Optional caption; also the image alt text when present.
    #[serde(default)]
    pub caption: Option<String>,
}

impl DisplayItem {
    #[cfg(test)]
    pub fn new(image: impl Into<String>, caption: Option<&str>) -> Self {
        Self {
            image: image.into(),
            caption: caption.map(str::to_string),
        }
    }

    /// Caption text, empty when missing.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}

/// Contact and call-to-action links as they appear in the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkConfig {
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub request_form: Option<String>,
    #[serde(default)]
    pub report_pdf: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    #[serde(default)]
    pub hero_bg: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub why: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

/// Per-language long-form content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedContent {
    #[serde(default)]
    pub problem_intro: Option<String>,
    #[serde(default)]
    pub problem_bullets: Vec<String>,
    #[serde(default)]
    pub why_bullets: Vec<String>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default)]
    pub items: Vec<DisplayItem>,
}

/// Root of `site.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub images: ImageConfig,
    /// `lang -> key -> text`
    #[serde(default)]
    pub i18n: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub content: HashMap<String, LocalizedContent>,
    #[serde(default)]
    pub models: ModelsConfig,
}

impl SiteConfig {
    /// Configured text for `key`, ignoring empty strings.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.i18n
            .get(language.code())
            .and_then(|dict| dict.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn content_for(&self, language: Language) -> LocalizedContent {
        self.content
            .get(language.code())
            .cloned()
            .unwrap_or_default()
    }

    pub fn model_items(&self) -> &[DisplayItem] {
        &self.models.items
    }
}
