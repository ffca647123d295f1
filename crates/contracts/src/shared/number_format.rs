//! Number formatting for metric values (en-US grouping)

/// Groups the integer part with commas and keeps up to `max_decimals`
/// fraction digits, trimming trailing zeros.
///
/// ```
/// use contracts::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567.5, 3), "1,234,567.5");
/// ```
pub fn format_grouped(value: f64, max_decimals: usize) -> String {
    format_decimal(value, max_decimals, true)
}

/// Same rounding and trimming as [`format_grouped`] without thousands separators
pub fn format_plain(value: f64, max_decimals: usize) -> String {
    format_decimal(value, max_decimals, false)
}

fn format_decimal(value: f64, max_decimals: usize, group: bool) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let formatted = format!("{:.*}", max_decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if group && i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0" after rounding
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && decimal_part.is_empty() {
        ""
    } else {
        sign
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Locale-style number: grouping plus up to three fraction digits
pub fn format_number(value: f64) -> String {
    format_grouped(value, 3)
}

/// "$12,500.5"
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value))
}

/// "245%"; the value is already a percentage and is never grouped
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_plain(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(1234.5678), "1,234.568");
        assert_eq!(format_number(-1234.5), "-1,234.5");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12500.5), "$12,500.5");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(400.02), "400.02%");
        assert_eq!(format_percent(15.0), "15%");
        assert_eq!(format_percent(1234.56), "1234.56%");
        assert_eq!(format_percent(-250.5), "-250.5%");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(1234567.5, 3), "1234567.5");
        assert_eq!(format_plain(-0.0001, 2), "0");
    }

    #[test]
    fn test_negative_zero_and_nan() {
        assert_eq!(format_grouped(-0.0001, 2), "0");
        assert_eq!(format_number(f64::NAN), "0");
    }
}
