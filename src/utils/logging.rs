// src/utils/logging.rs

//! Structured console output on top of the `log` facade.
//!
//! Timestamps and level filtering come from whichever logger the binary
//! installs; these helpers only shape the lines.

use crate::models::RunStats;

const RULE_WIDTH: usize = 60;

/// Log a header
pub fn header(title: &str) {
    let border = "═".repeat(RULE_WIDTH);
    log::info!("{}", border);
    log::info!("  {}", title);
    log::info!("{}", border);
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    log::info!("[STEP {}/{}] {}", step_num, total, message);
}

/// Log a separator line
pub fn separator() {
    log::info!("{}", "─".repeat(RULE_WIDTH));
}

/// Log a sub-item (indented)
pub fn sub_item(message: &str) {
    log::info!("    {}", message);
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    log::info!("[SUMMARY] {}", title);
    for (key, value) in items {
        log::info!("    {}: {}", key, value);
    }
}

/// Summary lines for a finished pipeline run.
pub fn run_summary_items(stats: &RunStats) -> Vec<(&'static str, String)> {
    let mut items = vec![
        ("Started", stats.start_time.to_rfc3339()),
        ("Finished", stats.end_time.to_rfc3339()),
        ("Elapsed", format!("{}s", stats.elapsed_secs())),
    ];
    for stage in &stats.stages {
        items.push((
            stage.stage,
            format!(
                "{} in, {} out, {} dropped",
                stage.input, stage.output, stage.dropped
            ),
        ));
    }
    items
}
