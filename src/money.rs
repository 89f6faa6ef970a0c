/// Price formatting in Indian rupees

/// Format an amount as `₹1,23,456.78`.
///
/// Uses the Indian grouping convention: the last three integer digits form
/// one group, every group before that has two digits. Always renders two
/// decimal places.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    format!("₹{}{}.{}", sign, group_indian(int_part), frac_part)
}

/// Insert commas into a run of integer digits using Indian grouping.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);

    let mut grouped = String::with_capacity(digits.len() + groups.len());
    for group in groups.iter().rev() {
        grouped.push_str(group);
        grouped.push(',');
    }
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(9.5), "₹9.50");
        assert_eq!(format_inr(999.99), "₹999.99");
    }

    #[test]
    fn test_thousands_group() {
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(52499.0), "₹52,499.00");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(format_inr(179900.0), "₹1,79,900.00");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_inr(100000000.0), "₹10,00,00,000.00");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(format_inr(499.999), "₹500.00");
        assert_eq!(format_inr(0.005), "₹0.01");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_inr(-1250.5), "₹-1,250.50");
    }
}
