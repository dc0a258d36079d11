const NBSP: char = '\u{a0}';

fn format_with_dots(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Brazilian Real, pt-BR style: `R$ 1.234,56` (non-breaking space after the symbol).
/// Non-finite amounts are shown as zero.
pub fn format_brl(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R${}{},{:02}",
        sign,
        NBSP,
        format_with_dots(cents / 100),
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_with_dots(0), "0");
        assert_eq!(format_with_dots(999), "999");
        assert_eq!(format_with_dots(1000), "1.000");
        assert_eq!(format_with_dots(1234567), "1.234.567");
    }

    #[test]
    fn formats_real_amounts() {
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(1234.5), "R$\u{a0}1.234,50");
        assert_eq!(format_brl(0.016), "R$\u{a0}0,02");
        assert_eq!(format_brl(-50.0), "-R$\u{a0}50,00");
    }

    #[test]
    fn non_finite_amounts_render_as_zero() {
        assert_eq!(format_brl(f64::NAN), "R$\u{a0}0,00");
        assert_eq!(format_brl(-0.001), "R$\u{a0}0,00");
    }
}
