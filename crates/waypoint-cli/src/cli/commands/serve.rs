//! `waypoint serve` – bind and serve the redirect page.

use anyhow::Result;
use waypoint_core::config::ValidatedConfig;
use waypoint_core::server;

pub async fn run_serve(cfg: &ValidatedConfig) -> Result<()> {
    server::serve(cfg).await
}
