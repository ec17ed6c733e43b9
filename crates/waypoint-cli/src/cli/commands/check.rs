//! `waypoint check` – validate configuration and show what will be served.

use anyhow::Result;
use waypoint_core::config::ValidatedConfig;
use waypoint_core::target::TargetKind;

pub fn run_check(cfg: &ValidatedConfig) -> Result<()> {
    print!("{}", check_report(cfg));
    Ok(())
}

pub fn check_report(cfg: &ValidatedConfig) -> String {
    let plan = &cfg.plan;
    let kind = match plan.target().kind() {
        TargetKind::Absolute => "absolute",
        TargetKind::Relative => "relative",
    };
    let mode = match plan.header() {
        Some((status, _)) => format!("header redirect ({}) + page", status.code()),
        None => "static page (200)".to_string(),
    };
    let client = plan.client();
    format!(
        "{:<15}{} ({})\n{:<15}{}\n{:<15}{}\n{:<15}{} ms\n{:<15}{}\n",
        "target:",
        plan.target(),
        kind,
        "mode:",
        mode,
        "listen:",
        cfg.listen,
        "timer:",
        client.delay_ms,
        "first trigger:",
        plan.expected_trigger().describe(),
    )
}
