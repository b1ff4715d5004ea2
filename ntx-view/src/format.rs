//! Number formatting shared by the dashboard and the CLI.

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "-";

/// Group an integer's digits in threes: `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dollar amount in its shortest form: `12.5` -> `"$12.5"`.
pub fn currency(amount: f64) -> String {
    format!("${}", amount)
}

/// Dollar amount with cents: `12.5` -> `"$12.50"`.
pub fn currency_cents(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Miles with a unit suffix: `3.2` -> `"3.2 mi"`.
pub fn miles(distance: f64) -> String {
    format!("{} mi", distance)
}

/// Format `value` with `f`, or the placeholder when it is absent.
pub fn or_placeholder<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
    value.map(f).unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_currency_and_miles() {
        assert_eq!(currency(12.5), "$12.5");
        assert_eq!(currency(12.0), "$12");
        assert_eq!(currency_cents(12.5), "$12.50");
        assert_eq!(miles(3.2), "3.2 mi");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(None::<f64>, |v| format!("{:.2}", v)), "-");
        assert_eq!(or_placeholder(Some(0.0), |v| format!("{:.2}", v)), "0.00");
    }
}
