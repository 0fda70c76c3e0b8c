use crate::models::chart::ValueFormat;
use crate::models::settings::{CurrencyFormat, SymbolPosition};

/// Render `value` as a localised currency string.
///
/// With the default `pl-PL` format, `12345.6` becomes `12 345,60 zł` and
/// `1234.5` becomes `1234,50 zł` (four-digit amounts are not grouped).
/// Infinities render as `∞` and NaN as `NaN`, still with the symbol.
pub fn format_currency(value: f64, fmt: &CurrencyFormat) -> String {
    let number = if value.is_finite() {
        format_number(value.abs(), fmt)
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        "∞".to_string()
    };

    let rounds_to_zero =
        value.is_finite() && number.chars().all(|c| !c.is_ascii_digit() || c == '0');
    let sign = if value < 0.0 && !rounds_to_zero {
        "-"
    } else {
        ""
    };

    match fmt.symbol_position {
        SymbolPosition::Prefix => {
            format!("{sign}{}{}{number}", fmt.symbol, fmt.symbol_separator)
        }
        SymbolPosition::Suffix => {
            format!("{sign}{number}{}{}", fmt.symbol_separator, fmt.symbol)
        }
    }
}

/// Axis tick for percentage scales: the number as-is followed by `%`.
pub fn format_percent_tick(value: f64) -> String {
    format!("{value}%")
}

/// Tooltip line for a percentage series, two decimal places.
pub fn format_percent_tooltip(label: &str, value: f64) -> String {
    format!(" {label}: {value:.2}%")
}

/// Tooltip line for a currency series.
pub fn format_currency_tooltip(value: f64, fmt: &CurrencyFormat) -> String {
    format!(" {}", format_currency(value, fmt))
}

/// Apply a declarative [`ValueFormat`]; `label` is the dataset label.
pub fn format_value(value: f64, format: ValueFormat, label: &str, fmt: &CurrencyFormat) -> String {
    match format {
        ValueFormat::Currency => format_currency(value, fmt),
        ValueFormat::PercentTick => format_percent_tick(value),
        ValueFormat::PercentTooltip => format_percent_tooltip(label, value),
        ValueFormat::Plain => value.to_string(),
    }
}

fn format_number(abs: f64, fmt: &CurrencyFormat) -> String {
    let fixed = format!("{:.*}", usize::from(fmt.decimals), abs);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let grouped = group_thousands(int_part, fmt);
    match frac_part {
        Some(frac) => format!("{grouped}{}{frac}", fmt.decimal_separator),
        None => grouped,
    }
}

fn group_thousands(digits: &str, fmt: &CurrencyFormat) -> String {
    let min_len = 3 + usize::from(fmt.min_grouping_digits.max(1));
    if digits.len() < min_len {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(&fmt.group_separator);
        }
        out.push(ch);
    }
    out
}
