pub mod config;
pub mod logging;

pub mod navigation;
pub mod render;
pub mod server;
pub mod target;
