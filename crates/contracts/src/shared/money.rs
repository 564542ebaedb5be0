//! Numeric helpers for monetary form fields.
//!
//! Amounts are plain `f64`; values leave these helpers rounded to two
//! decimals and never as `NaN`/`inf`.

/// Parse a user-typed amount. Thousands separators are ignored; anything
/// that is not a finite number reads as zero.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Values this large carry no fractional digits, and scaling them by 100
/// could overflow to `inf`
const NO_FRACTION_ABOVE: f64 = 1e15;

/// Round to two decimals, half away from zero
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    if value.abs() >= NO_FRACTION_ABOVE {
        return value;
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // drop the sign of -0.0
        0.0
    } else {
        rounded
    }
}

/// Display format used by every monetary input: `1234.5` -> `"1234.50"`
pub fn format2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Normalise a raw amount string into display format
pub fn normalize2(raw: &str) -> String {
    format2(parse_amount(raw))
}

/// Serde helper for amount fields: the backend sends decimals either as JSON
/// numbers or as strings (`"12.50"`); `null` and garbage read as zero.
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => parse_amount(&s),
        _ => 0.0,
    })
}

/// `total / qty`, or zero when the quantity is missing or not positive
pub fn per_unit(total: f64, qty: f64) -> f64 {
    if qty.is_finite() && qty > 0.0 && total.is_finite() {
        total / qty
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 1,234.50 "), 1234.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-3"), -3.0);
    }

    #[test]
    fn test_round2_and_format2() {
        assert_eq!(round2(10.126), 10.13);
        assert_eq!(round2(-0.001), 0.0);
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(format2(1234.5), "1234.50");
        assert_eq!(format2(-0.001), "0.00");
        assert_eq!(format2(f64::INFINITY), "0.00");
    }

    #[test]
    fn test_round2_huge_values_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-1e307), -1e307);
        assert!(!format2(1e307).contains("inf"));
        assert!(!normalize2("1e307").contains("inf"));
        assert_eq!(round2(1e15 + 0.5), 1e15 + 0.5);
    }

    #[test]
    fn test_per_unit() {
        assert_eq!(per_unit(100.0, 4.0), 25.0);
        assert_eq!(per_unit(100.0, 0.0), 0.0);
        assert_eq!(per_unit(100.0, -2.0), 0.0);
        assert_eq!(per_unit(100.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_de_amount() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "de_amount")]
            cost: f64,
        }
        let parse = |json: &str| serde_json::from_str::<Row>(json).unwrap().cost;
        assert_eq!(parse(r#"{"cost": 12.5}"#), 12.5);
        assert_eq!(parse(r#"{"cost": "12.50"}"#), 12.5);
        assert_eq!(parse(r#"{"cost": null}"#), 0.0);
        assert_eq!(parse(r#"{}"#), 0.0);
    }

    #[test]
    fn test_normalize2() {
        assert_eq!(normalize2("7"), "7.00");
        assert_eq!(normalize2(""), "0.00");
    }
}
