use crate::constants::{DEFAULT_FACEBOOK_URL, DEFAULT_REQUEST_FORM_URL, DEFAULT_WHATSAPP_URL};
use crate::utils::normalize_url;

use super::LinkConfig;

/// Resolved hrefs for every contact and call-to-action button on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactLinks {
    /// Header and footer WhatsApp buttons.
    pub whatsapp: String,
    /// Header and footer Facebook buttons.
    pub facebook: String,
    /// Hero, problem and footer call-to-action buttons.
    pub request_form: String,
    /// Report download button. Empty when not configured.
    pub report_pdf: String,
}

impl ContactLinks {
    pub fn resolve(config: &LinkConfig) -> Self {
        Self {
            whatsapp: or_default(config.whatsapp.as_deref(), DEFAULT_WHATSAPP_URL),
            facebook: or_default(config.facebook.as_deref(), DEFAULT_FACEBOOK_URL),
            request_form: or_default(config.request_form.as_deref(), DEFAULT_REQUEST_FORM_URL),
            report_pdf: normalize_url(config.report_pdf.as_deref()),
        }
    }

    pub fn has_report(&self) -> bool {
        !self.report_pdf.is_empty()
    }
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self::resolve(&LinkConfig::default())
    }
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    let url = normalize_url(value);
    if url.is_empty() {
        fallback.to_string()
    } else {
        url
    }
}
