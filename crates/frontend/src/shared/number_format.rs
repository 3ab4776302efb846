//! Amount formatting for tables and chart tooltips

/// Formats a number with `,` thousands separators and fixed decimals.
///
/// `NaN` and infinities (unparseable amounts) render as `"-"`.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_amount;
///
/// let formatted = format_amount(1234567.891, 2);
/// assert_eq!(formatted, "1,234,567.89");
/// ```
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Currency amount with the `KES` prefix
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("KES {}", format_amount(value, 2))
}

/// Percentage with one decimal
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{}%", format_amount(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.567, 2), "1,234.57");
        assert_eq!(format_amount(1234567.0, 0), "1,234,567");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(0.0, 2), "0.00");
        assert_eq!(format_amount(-1234.5, 1), "-1,234.5");
        assert_eq!(format_amount(-0.001, 2), "0.00");
    }

    #[test]
    fn test_non_finite_is_blank() {
        assert_eq!(format_amount(f64::NAN, 2), "-");
        assert_eq!(format_money(f64::INFINITY), "-");
        assert_eq!(format_percent(f64::NAN), "-");
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(format_money(2500000.0), "KES 2,500,000.00");
        assert_eq!(format_percent(45.26), "45.3%");
    }
}
