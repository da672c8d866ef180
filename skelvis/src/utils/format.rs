//! Formatting utilities

use glam::Vec3;

/// Format a position with fixed precision
pub fn format_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

/// Format a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Share of `part` in `total`, "N/A" for an empty total
pub fn format_ratio(part: usize, total: usize) -> String {
    if total == 0 {
        "N/A".to_string()
    } else {
        format_percentage(part as f64 / total as f64 * 100.0)
    }
}
