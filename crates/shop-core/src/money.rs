//! BRL currency formatting.
//!
//! Amounts are carried in minor units (centavos) to avoid floating-point
//! rounding, and only turned into a string at the display boundary.

/// Format an amount in centavos for the pt-BR locale.
///
/// ```
/// use shop_core::money::format_brl;
/// assert_eq!(format_brl(79900), "R$ 799,00");
/// ```
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = group_thousands(abs / 100);
    let centavos = abs % 100;
    format!("{sign}R$ {reais},{centavos:02}")
}

/// Insert `.` separators every three digits, pt-BR style.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_amount() {
        assert_eq!(format_brl(79900), "R$ 799,00");
    }

    #[test]
    fn test_format_single_real() {
        assert_eq!(format_brl(100), "R$ 1,00");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_brl(0), "R$ 0,00");
    }

    #[test]
    fn test_format_centavos_only() {
        assert_eq!(format_brl(9), "R$ 0,09");
        assert_eq!(format_brl(90), "R$ 0,90");
    }

    #[test]
    fn test_format_thousands_grouping() {
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(1_234_567), "R$ 12.345,67");
        assert_eq!(format_brl(123_456_789), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_brl(-500), "-R$ 5,00");
        assert_eq!(format_brl(-123_456), "-R$ 1.234,56");
    }
}
