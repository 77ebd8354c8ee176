//! Currency and percentage display helpers.
//!
//! Amounts are annual figures in Indian Rupees; the en-IN digit grouping puts
//! the last three digits together and then groups by two (₹12,34,567). The
//! USD equivalent uses a fixed indicative rate.

pub const INR_PER_USD: f64 = 83.0;

/// Rounded rupee amount with en-IN grouping. Zero or non-finite input
/// renders as "₹0".
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "₹0".to_string();
    }
    format!("₹{}", group_indian(value.round() as i64))
}

pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value / INR_PER_USD)
}

/// "₹12,34,567 ($14,874.30-style)" dual display used by the metric cards.
pub fn format_inr_with_usd(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "₹0".to_string();
    }
    format!("{} ({})", format_inr(value), format_usd(value))
}

/// A 0..1 rate as a whole percentage, e.g. "68%".
pub fn format_rate_pct(rate: f64) -> String {
    format!("{:.0}%", (rate * 100.0).round())
}

/// An already-scaled percentage with one decimal, e.g. "68.7%".
pub fn format_pct_fixed1(pct: f64) -> String {
    format!("{pct:.1}%")
}

fn group_indian(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping_breaks_after_the_last_three_digits() {
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(1234567.0), "₹12,34,567");
        assert_eq!(format_inr(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn zero_and_non_finite_render_as_zero_rupees() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(f64::NAN), "₹0");
        assert_eq!(format_inr_with_usd(0.0), "₹0");
    }

    #[test]
    fn usd_uses_the_fixed_rate() {
        assert_eq!(format_usd(83.0), "$1.00");
        assert_eq!(format_usd(8300.0), "$100.00");
    }

    #[test]
    fn dual_display_shows_both_currencies() {
        assert_eq!(format_inr_with_usd(8300.0), "₹8,300 ($100.00)");
    }

    #[test]
    fn rate_formatting_rounds_to_whole_percent() {
        assert_eq!(format_rate_pct(0.666), "67%");
        assert_eq!(format_rate_pct(1.0), "100%");
        assert_eq!(format_pct_fixed1(68.66), "68.7%");
    }
}
