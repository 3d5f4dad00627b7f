use chrono::{Datelike, Local};

/// Trim a configured URL. Missing values become an empty string.
pub fn normalize_url(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} Smart Select. All rights reserved.", year)
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Escape a value for embedding in a CSS `url("...")`.
pub fn css_url(value: &str) -> String {
    format!("url(\"{}\")", value.replace('\\', "\\\\").replace('"', "\\\""))
}
