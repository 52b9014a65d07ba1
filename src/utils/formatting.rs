//! Formatting utilities used for CLI and export outputs.

/// Render a number the way a browser prints it: `8` rather than `8.0`,
/// `7.5` as is, `NaN` for not-a-number.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0.0 as well
        return "0".to_string();
    }
    format!("{}", value)
}

/// Money with a symbol in front: `$1000`, `$-50`, `$12.5`.
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(-10.0), "-10");
    }

    #[test]
    fn fractions_are_kept() {
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn money_prefixes_symbol() {
        assert_eq!(format_money("$", 1000.0), "$1000");
        assert_eq!(format_money("€", 12.5), "€12.5");
    }
}
