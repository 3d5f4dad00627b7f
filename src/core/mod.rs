pub mod config_loader;
pub mod marquee;
pub mod paths;
