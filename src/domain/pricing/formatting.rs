//! Display formatting for the calculator outputs: rates and gram prices get
//! 4 decimals, weights 3, currency amounts 2 with en-US thousands separators,
//! percentages 2 with a trailing `%`.

/// 4-decimal rate/result string, also used for the linked price fields.
pub fn format_rate(value: f64) -> String {
    format!("{:.4}", value)
}

/// 3-decimal gram weight.
pub fn format_weight(value: f64) -> String {
    format!("{:.3}", value)
}

/// 2-decimal percentage with a trailing `%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// 2-decimal currency amount with thousands separators, `0.00` for NaN.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "0.00".to_string();
    }

    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
