//! Human-readable byte, duration and rounding helpers.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format bytes with base-1024 units: "1023 B", "1.00 KB", "2.50 GB".
/// A value of exactly 1024^k is reported in unit k.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Byte counters arrive as JSON numbers; negative or NaN readings count as 0.
pub fn bytes_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

/// Format elapsed minutes as "H:MM:SS", prefixed with "N day(s), " past 24 hours.
pub fn format_elapsed_minutes(minutes: f64) -> String {
    let total_secs = if minutes.is_finite() && minutes > 0.0 {
        (minutes * 60.0).round() as u64
    } else {
        0
    };
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    match days {
        0 => format!("{hours}:{mins:02}:{secs:02}"),
        1 => format!("1 day, {hours}:{mins:02}:{secs:02}"),
        d => format!("{d} days, {hours}:{mins:02}:{secs:02}"),
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
