//! Cell formatting shared by the table-rendering commands

/// Placeholder for absent values
pub const ABSENT: &str = "-";

pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// `Yes`/`No`, or `-` when unknown
pub fn optional_yes_no(value: Option<bool>) -> String {
    value.map(yes_no).unwrap_or_else(|| ABSENT.to_string())
}

/// The value, or `-` when absent or blank
pub fn or_absent(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => ABSENT.to_string(),
    }
}

/// Dollar amount with two decimals and thousands separators, e.g. `$1,234.50`
///
/// Negative amounts read `-$1.00`; non-finite ones render as absent.
pub fn dollars(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    if !cents.is_finite() || cents > u64::MAX as f64 {
        return ABSENT.to_string();
    }

    let formatted = format_cents(cents as u64);
    if amount.is_sign_negative() && cents > 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Dollar amount from an integer number of cents
pub fn cents(amount: u64) -> String {
    format_cents(amount)
}

fn format_cents(cents: u64) -> String {
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}
