/// Round to 4 decimal places, half away from zero
pub fn round4(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Normalise -0 so it never prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a coordinate for text output: rounded to 4 decimals, shortest form
pub fn format_number(value: f64) -> String {
    format!("{}", round4(value))
}
