//! Smart Select
//!
//! Marketing site for the Smart Select model catalogue, rendered in a
//! desktop webview.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    env_logger::init();

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Smart Select")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    log::info!("starting Smart Select");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
