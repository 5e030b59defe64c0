//! Display helpers matching how the calculator pages present results.

use serde_json::Value;

/// Whole US dollars with thousands separators, e.g. `-$1,234`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// `"N years, M months"`, or just the months under a year.
pub fn format_months(months: u32) -> String {
    let years = months / 12;
    let remaining = months % 12;
    if years == 0 {
        format!("{remaining} months")
    } else {
        format!("{years} years, {remaining} months")
    }
}

fn format_signed_months(months: i64) -> String {
    let formatted = format_months(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    if months < 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

fn format_field(key: &str, value: f64) -> String {
    let lower = key.to_ascii_lowercase();
    if key == "millRate" {
        format!("{value:.2} mills")
    } else if lower.ends_with("months") || lower.starts_with("months") {
        format_signed_months(value as i64)
    } else if lower.ends_with("year") {
        format!("year {value:.0}")
    } else if lower.ends_with("years") {
        format!("{value:.0} years")
    } else if lower.contains("percent") || lower.ends_with("ratio") {
        format_percent(value, 2)
    } else if lower.ends_with("rate") || lower == "apr" {
        format_percent(value, 3)
    } else {
        format_currency(value)
    }
}

fn collect_summary(prefix: &str, value: &Value, lines: &mut Vec<(String, String)>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, field) in map {
        let label = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let rendered = match field {
            Value::Number(number) => number.as_f64().map(|v| format_field(key, v)),
            Value::Bool(flag) => Some(if *flag { "yes" } else { "no" }.to_string()),
            Value::Null => Some("n/a".to_string()),
            Value::String(text) => Some(text.clone()),
            Value::Object(_) => {
                collect_summary(&label, field, lines);
                None
            }
            // Yearly schedules are left to the JSON output.
            Value::Array(_) => None,
        };
        if let Some(rendered) = rendered {
            lines.push((label, rendered));
        }
    }
}

/// Headline figures of a serialized calculator result as `(label, text)`
/// pairs, formatted by field kind: whole dollars, percents, month spans.
pub fn render_summary(result: &Value) -> Vec<(String, String)> {
    let mut lines = Vec::new();
    collect_summary("", result, &mut lines);
    lines
}
