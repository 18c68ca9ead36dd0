use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};

/// Parses a CLI-facing `YYYY-MM` argument into (year, 0-based month).
pub fn parse_year_month(input: &str) -> Result<(i32, u32)> {
    let (year_str, month_str) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", input))?;
    let year: i32 = year_str
        .parse()
        .map_err(|_| anyhow!("Invalid year in '{}'", input))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| anyhow!("Invalid month in '{}'", input))?;
    if !(1..=9999).contains(&year) {
        return Err(anyhow!("Year must be 1-9999, got {}", year));
    }
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be 1-12, got {}", month));
    }
    Ok((year, month - 1))
}

/// Today's (year, 0-based month) in the local calendar.
pub fn current_year_month() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month0())
}

pub fn month_long_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES.get(month as usize).copied().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2025-09").unwrap(), (2025, 8));
        assert_eq!(parse_year_month("2025-01").unwrap(), (2025, 0));
        assert_eq!(parse_year_month("2025-12").unwrap(), (2025, 11));
        assert!(parse_year_month("2025-13").is_err());
        assert!(parse_year_month("300000-01").is_err());
        assert!(parse_year_month("0-01").is_err());
        assert!(parse_year_month("2025-00").is_err());
        assert!(parse_year_month("2025").is_err());
        assert!(parse_year_month("sept-2025").is_err());
    }

    #[test]
    fn test_month_long_name() {
        assert_eq!(month_long_name(0), "January");
        assert_eq!(month_long_name(8), "September");
        assert_eq!(month_long_name(11), "December");
        assert_eq!(month_long_name(12), "?");
    }
}
