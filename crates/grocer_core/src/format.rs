/// Formats a quantity for display.
///
/// Whole numbers print without decimals, everything else is rounded to exactly
/// two places, with exact halves rounded away from zero (`0.125` reads
/// `"0.13"`). Recipe text and the grocery list both go through this so the
/// same quantity always reads the same way.
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        if value == 0.0 {
            // Avoid "-0".
            return "0".to_string();
        }
        format!("{value:.0}")
    } else if is_cent_tie(value) {
        let cents = (value.abs() * 100.0).ceil() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    } else {
        // Correctly rounded from the stored value; only exact ties differ.
        format!("{value:.2}")
    }
}

/// True when `value` lies exactly halfway between two cents.
///
/// Such a value is `(2n + 1) / 200`, which a binary float can only hold when
/// it is an odd number of eighths.
fn is_cent_tie(value: f64) -> bool {
    const EXACT_LIMIT: f64 = (1u64 << 50) as f64;
    let eighths = value * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 != 0.0 && eighths.abs() < EXACT_LIMIT
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
