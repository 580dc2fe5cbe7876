//! Number formatting for text output

/// Group the integer digits of `value` (rounded to `decimals`) with commas
pub fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// `$4,255.32`, with the sign ahead of the currency symbol for negatives
pub fn usd(amount: f64) -> String {
    let body = thousands(amount, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", body),
    }
}

/// `45,000 MYR`
pub fn myr(amount: f64) -> String {
    format!("{} MYR", thousands(amount, 0))
}

/// Exchange rates are shown to four decimals
pub fn rate(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0, 2), "0.00");
        assert_eq!(thousands(999.0, 0), "999");
        assert_eq!(thousands(1000.0, 0), "1,000");
        assert_eq!(thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn test_currency() {
        assert_eq!(usd(4255.3191), "$4,255.32");
        assert_eq!(usd(-92.5069), "-$92.51");
        assert_eq!(myr(45000.0), "45,000 MYR");
        assert_eq!(rate(4.7), "4.7000");
    }
}
