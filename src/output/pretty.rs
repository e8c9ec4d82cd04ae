use colored::Colorize;

use super::TimerSnapshot;

/// Format a snapshot as pretty output
pub fn format_snapshot_pretty(snapshot: &TimerSnapshot, title: &str) -> String {
    let state = if snapshot.running {
        "running".red()
    } else {
        "stopped".green()
    };

    let mut output = format!(
        "{}  {}  {}\n  {}",
        title.bold(),
        snapshot.display.cyan().bold(),
        state,
        snapshot.human.dimmed()
    );

    if let Some(warning) = &snapshot.warning {
        output.push_str(&format!("\n{} {}", "warning:".yellow().bold(), warning));
    }

    output
}
