/// Format a float as Rupiah with thousands separators: Rp 1,234,567
/// Sen are shown only when present: Rp 1,234.50
pub fn money(val: f64) -> String {
    let negative = val < 0.0 && val.abs() >= 0.005;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();
    let amount = if dec_part == "00" {
        with_commas
    } else {
        format!("{with_commas}.{dec_part}")
    };

    if negative {
        format!("-Rp {amount}")
    } else {
        format!("Rp {amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1_000_000.0), "Rp 1,000,000");
        assert_eq!(money(-200_000.0), "-Rp 200,000");
        assert_eq!(money(0.0), "Rp 0");
        assert_eq!(money(1234.5), "Rp 1,234.50");
        assert_eq!(money(42.0), "Rp 42");
        assert_eq!(money(-0.001), "Rp 0");
    }
}
