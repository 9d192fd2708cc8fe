// src/domain/password/coerce.rs
//! Loose conversions for raw attribute and parameter values.
//!
//! Form attributes and component parameters arrive untyped. None of these
//! helpers fail: unreadable input degrades to zero, `false` or the empty
//! string, the same way the surrounding form system treats it.

use serde_json::Value;

/// Read the leading integer of `raw`, ignoring leading whitespace.
///
/// `"12abc"` reads as 12 and `"abc"` as 0. Values outside `i64` saturate.
pub fn loose_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start_matches([' ', '\t', '\n', '\r', '\x0B', '\x0C']);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut acc: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        acc = acc.saturating_mul(10).saturating_add(digit);
    }

    if negative { acc.saturating_neg() } else { acc }
}

/// Clamp a raw threshold into the non-negative range. Negative means "no minimum".
pub fn clamp_threshold(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Boolean attribute such as `strengthmeter="true"`.
pub fn is_truthy_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes" | "strengthmeter"
    )
}

/// `required` only accepts the two spellings the form markup uses.
pub fn is_required_flag(raw: &str) -> bool {
    raw == "true" || raw == "required"
}

/// Text that counts as "not set": the empty string and `"0"`.
pub fn is_empty_text(raw: &str) -> bool {
    raw.is_empty() || raw == "0"
}

/// Whether a parameter value counts as "not set" for override purposes.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n == 0.0),
        Value::String(text) => is_empty_text(text),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[allow(clippy::cast_possible_truncation)]
pub fn value_to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(flag) => i64::from(*flag),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
            // `as` saturates and maps NaN to zero.
            .unwrap_or_else(|| number.as_f64().map_or(0, |n| n as i64)),
        Value::String(text) => loose_int(text),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

pub fn value_to_flag(value: &Value) -> bool {
    match value {
        Value::String(text) => !is_empty_text(text) && is_truthy_flag(text),
        other => !is_empty_value(other),
    }
}

/// String form of an arbitrary submitted value.
///
/// `null` and `false` become empty, `true` becomes `"1"`, numbers keep their
/// decimal text and composite values are rendered as compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_owned(),
        Value::Bool(false) => String::new(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        composite @ (Value::Array(_) | Value::Object(_)) => composite.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loose_int_reads_leading_digits() {
        assert_eq!(loose_int("12abc"), 12);
        assert_eq!(loose_int("  7"), 7);
        assert_eq!(loose_int("abc"), 0);
        assert_eq!(loose_int(""), 0);
        assert_eq!(loose_int("-3"), -3);
        assert_eq!(loose_int("+5x"), 5);
        assert_eq!(loose_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn negative_thresholds_clamp_to_zero() {
        assert_eq!(clamp_threshold(-3), 0);
        assert_eq!(clamp_threshold(0), 0);
        assert_eq!(clamp_threshold(8), 8);
        assert_eq!(clamp_threshold(i64::MAX), u32::MAX);
    }

    #[test]
    fn required_accepts_only_markup_spellings() {
        assert!(is_required_flag("true"));
        assert!(is_required_flag("required"));
        assert!(!is_required_flag("1"));
        assert!(!is_required_flag("TRUE"));
        assert!(!is_required_flag(""));
    }

    #[test]
    fn empty_values_match_loose_emptiness() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_value(&value), "{value} should be empty");
        }
        for value in [json!(true), json!(1), json!("00"), json!(" "), json!([0])] {
            assert!(!is_empty_value(&value), "{value} should not be empty");
        }
    }

    #[test]
    fn value_to_int_handles_every_json_kind() {
        assert_eq!(value_to_int(&json!(8)), 8);
        assert_eq!(value_to_int(&json!("8")), 8);
        assert_eq!(value_to_int(&json!(7.9)), 7);
        assert_eq!(value_to_int(&json!(true)), 1);
        assert_eq!(value_to_int(&json!(null)), 0);
        assert_eq!(value_to_int(&json!(["x"])), 1);
    }

    #[test]
    fn zero_text_counts_as_empty() {
        assert!(is_empty_text(""));
        assert!(is_empty_text("0"));
        assert!(!is_empty_text("00"));
        assert!(!is_empty_text(" "));
    }

    #[test]
    fn value_to_text_coerces_non_strings() {
        assert_eq!(value_to_text(&json!("Passw0rd!")), "Passw0rd!");
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!(12345)), "12345");
        assert_eq!(value_to_text(&json!(true)), "1");
        assert_eq!(value_to_text(&json!(false)), "");
        assert_eq!(value_to_text(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn meter_flag_accepts_common_spellings() {
        assert!(value_to_flag(&json!("1")));
        assert!(value_to_flag(&json!("true")));
        assert!(value_to_flag(&json!(1)));
        assert!(!value_to_flag(&json!("0")));
        assert!(!value_to_flag(&json!("off")));
        assert!(!value_to_flag(&json!(null)));
    }
}
