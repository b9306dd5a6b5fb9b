//! Formatting helpers for CLI and export outputs.

/// Render a non-negative minute count as `01h 30m`.
pub fn format_minutes(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}h {:02}m", m / 60, m % 60)
}

/// Goal completion percent, rounded half-up and capped at 100.
pub fn goal_percent(total_minutes: i64, goal_minutes: i64) -> u32 {
    if goal_minutes <= 0 {
        return 100;
    }
    let pct = (total_minutes.max(0) * 100 + goal_minutes / 2) / goal_minutes;
    pct.min(100) as u32
}

/// Fixed-width progress bar, filled proportionally to `percent`.
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    let mut bar = String::new();
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}
