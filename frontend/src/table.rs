//! Paging and cell formatting shared by the dashboard tables.

use std::ops::Range;

/// Number of pages needed for `total` rows; an empty table still has one page.
pub fn page_count(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(u64::from(page_size)).max(1)
}

/// Pulls `page` back onto the last page once `total` no longer reaches it.
pub fn clamp_page(page: u32, total: u64, page_size: u32) -> u32 {
    let last = page_count(total, page_size) - 1;
    u32::try_from(last).map_or(page, |last| page.min(last))
}

/// Row indices shown on `page`, clamped to `len`.
pub fn page_window(len: usize, page: u32, page_size: u32) -> Range<usize> {
    let size = page_size as usize;
    let start = (page as usize).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_counts() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(1_296_675, 20), 64_834);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn windows_clamp_to_length() {
        assert_eq!(page_window(25, 0, 10), 0..10);
        assert_eq!(page_window(25, 2, 10), 20..25);
        assert_eq!(page_window(25, 3, 10), 25..25);
        assert_eq!(page_window(0, 0, 20), 0..0);
    }

    #[test]
    fn page_falls_back_when_listing_shrinks() {
        // Page 41 of a large listing, then a 5-row upload replaces it.
        assert_eq!(clamp_page(40, 5, 10), 0);
        assert_eq!(clamp_page(3, 25, 10), 2);
        assert_eq!(clamp_page(1, 25, 10), 1);
        assert_eq!(clamp_page(7, 0, 20), 0);
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(4.97), "$4.97");
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_amount(-12.5), "-$12.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }
}
