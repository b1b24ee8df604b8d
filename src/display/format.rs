//! Number formatting helpers
//!
//! Provides the display conventions used across reports: thousands grouping,
//! currency amounts, and growth percentages.

/// Group a non-negative integer with comma thousands separators
///
/// # Examples
/// ```
/// use admetrics::display::group_thousands;
/// assert_eq!(group_thousands(12500), "12,500");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Format a whole currency amount with symbol and thousands grouping
pub fn format_currency(n: u64) -> String {
    format!("${}", group_thousands(n))
}

/// Format a growth value as a whole percent (negative values keep their sign)
pub fn format_growth(n: i64) -> String {
    format!("{}%", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2400), "$2,400");
        assert_eq!(format_currency(89000), "$89,000");
        assert_eq!(format_currency(5), "$5");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(12), "12%");
        assert_eq!(format_growth(-8), "-8%");
        assert_eq!(format_growth(0), "0%");
    }
}
