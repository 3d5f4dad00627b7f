//! Page sections.

mod site_header;
mod hero;
mod feature_section;
mod models_marquee;
mod faq_list;
mod site_footer;

pub use site_header::SiteHeader;
pub use hero::Hero;
pub use feature_section::FeatureSection;
pub use models_marquee::ModelsMarquee;
pub use faq_list::FaqList;
pub use site_footer::SiteFooter;
