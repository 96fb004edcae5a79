/// Compact display form for point totals: millions as `1.2M`, thousands as
/// `500k`, with a trailing `.0` stripped. Anything under a thousand, negatives
/// included, renders as a plain decimal.
#[must_use]
pub fn format_points(points: i64) -> String {
    if points >= 1_000_000 {
        return format!("{}M", scaled(points, 1_000_000.0));
    }
    if points >= 1_000 {
        return format!("{}k", scaled(points, 1_000.0));
    }
    points.to_string()
}

fn scaled(points: i64, divisor: f64) -> String {
    let formatted = format!("{:.1}", points as f64 / divisor);
    formatted
        .strip_suffix(".0")
        .map_or(formatted.clone(), str::to_string)
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
