//! Shared constants: page palette, marquee tuning, contact fallbacks and bridge scripts.

pub const BG_DEEPEST: &str = "#07090d";
pub const BG_BASE: &str = "#0b0f16";
pub const BG_ELEVATED: &str = "#121826";
pub const BG_SURFACE: &str = "#182033";
pub const BG_HOVER: &str = "#222c44";

pub const BORDER_SUBTLE: &str = "#1c2436";
pub const BORDER_DEFAULT: &str = "#28324a";

pub const TEXT_PRIMARY: &str = "#f5f7fb";
pub const TEXT_SECONDARY: &str = "#b6bfd3";
pub const TEXT_MUTED: &str = "#7d879c";

pub const ACCENT_PRIMARY: &str = "#f5b921";
pub const ACCENT_WHATSAPP: &str = "#25d366";
pub const ACCENT_FACEBOOK: &str = "#3b82f6";

pub const HEADER_FALLBACK_HEIGHT_PX: f64 = 88.0;

/// Viewports at or below this width scroll the marquee at the narrow speed.
pub const MARQUEE_NARROW_VIEWPORT_MAX_PX: f64 = 560.0;
pub const MARQUEE_NARROW_SPEED_PX_PER_SEC: f64 = 85.0;
pub const MARQUEE_WIDE_SPEED_PX_PER_SEC: f64 = 120.0;
/// Upper bound on the time a single frame may advance the track.
pub const MARQUEE_MAX_FRAME_STEP_SECONDS: f64 = 0.05;
pub const MARQUEE_CARD_GAP_PX: f64 = 14.0;
pub const MARQUEE_FRAME_INTERVAL_MS: u64 = 16;
/// Used until the page reports its real width.
pub const MARQUEE_DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

pub const DEFAULT_WHATSAPP_URL: &str = "https://wa.me/201271028216";
pub const DEFAULT_FACEBOOK_URL: &str = "https://www.facebook.com/";
pub const DEFAULT_REQUEST_FORM_URL: &str = "https://forms.gle/GsTXZGXXrcypanPd7";

pub const DEFAULT_CONFIG_PATH: &str = "config/site.json";
pub const CONFIG_PATH_ENV: &str = "SITE_CONFIG";

/// Reports viewport width and page visibility to the marquee host.
pub const MARQUEE_PAGE_ENV_SCRIPT: &str = r#"
function report(kind) {
    dioxus.send({
        kind: kind,
        width: window.innerWidth || 0,
        hidden: !!document.hidden
    });
}

window.addEventListener("resize", () => report("resize"), { passive: true });
document.addEventListener("visibilitychange", () => report("visibility"));
report("init");
await new Promise(() => {});
"#;

/// Tells the header to re-measure itself on resize and, after the layout
/// settles, on orientation change.
pub const HEADER_RESIZE_SCRIPT: &str = r#"
window.addEventListener("resize", () => dioxus.send("resize"), { passive: true });
window.addEventListener("orientationchange", () => {
    setTimeout(() => dioxus.send("orientationchange"), 80);
});
await new Promise(() => {});
"#;

/// Forwards every document-level key press to the hotkey dispatcher.
pub const DOCUMENT_KEYDOWN_SCRIPT: &str = r#"
document.addEventListener("keydown", (e) => dioxus.send(e.key));
await new Promise(() => {});
"#;

pub const SCROLL_TO_TOP_SCRIPT: &str = r##"
window.scrollTo({ top: 0, left: 0, behavior: "smooth" });
history.replaceState(null, "", "#pageTop");
"##;
