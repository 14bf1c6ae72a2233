//! Number formatting for terminal output (en-US grouping).

/// `1234567.891` with 2 decimals -> `1,234,567.89`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = group_thousands(int_part);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }

    // "-0" after rounding reads as noise
    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}

/// Grouped, with at most three fraction digits and trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    let formatted = format_number(value, 3);
    match formatted.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        }
        None => formatted,
    }
}

pub fn format_ghg_intensity(value: f64) -> String {
    format!("{:.4} gCO₂e/MJ", value)
}

/// Always signed, whole grams.
pub fn format_cb(value: f64) -> String {
    let sign = if value >= 0.0 { '+' } else { '-' };
    format!("{}{} gCO₂eq", sign, format_number(value.abs(), 0))
}

pub fn format_percent_diff(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
