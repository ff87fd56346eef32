//! Fixed-locale (pt-BR) number formatting used on the statement.
//!
//! Thousands are grouped with `.` and decimals use `,`. Callers pass finite
//! numbers; NaN and infinities are formatted however `{:.N}` renders them.

/// Currency marker printed before every monetary amount.
pub const CURRENCY_MARKER: &str = "R$ ";

/// Format a monetary value: 1234.5 → "R$ 1.234,50"
pub fn currency(value: f64) -> String {
    format!("{}{}", CURRENCY_MARKER, grouped(value, 2))
}

/// Format an energy amount in kWh without unit: 1234.5 → "1.234,50"
pub fn energy(value: f64) -> String {
    grouped(value, 2)
}

/// Format a percentage with fixed decimals and no grouping: 17.5 → "17,5"
pub fn percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value).replace('.', ",")
}

/// Percentage with the default single decimal place.
pub fn percentage_default(value: f64) -> String {
    percentage(value, 1)
}

/// Percentage as embedded in statement labels ("Desconto 20% ...").
/// The value is rounded to one decimal first; a trailing ",0" is dropped.
pub fn discount_label_pct(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        percentage(rounded, 0)
    } else {
        percentage(rounded, 1)
    }
}

/// Render `value` with `decimals` digits, `.` thousands groups and a `,`
/// decimal separator.
fn grouped(value: f64, decimals: usize) -> String {
    let plain = format!("{:.*}", decimals, value);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let groups: Vec<&str> = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect();

    let mut out = String::with_capacity(plain.len() + groups.len());
    out.push_str(sign);
    out.push_str(&groups.join("."));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_small_numbers_have_no_separator() {
        assert_eq!(grouped(0.0, 2), "0,00");
        assert_eq!(grouped(999.999, 2), "1.000,00");
    }

    #[test]
    fn grouped_keeps_sign_outside_groups() {
        assert_eq!(grouped(-1234567.891, 2), "-1.234.567,89");
    }

    #[test]
    fn grouped_without_decimals() {
        assert_eq!(grouped(1234.0, 0), "1.234");
    }
}
