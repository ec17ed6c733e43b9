//! `waypoint render` – write the page for static hosting.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use waypoint_core::config::ValidatedConfig;
use waypoint_core::render::render_page;

/// Render to `out`, or to stdout when `None`.
pub fn run_render(cfg: &ValidatedConfig, out: Option<&Path>) -> Result<()> {
    let html = render_page(&cfg.plan, &cfg.page);
    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("rendered page to {}", path.display());
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
