//! CLI command handlers, one per file.

mod check;
mod render;
mod serve;

pub use check::run_check;
#[cfg(test)]
pub use check::check_report;
pub use render::run_render;
pub use serve::run_serve;
