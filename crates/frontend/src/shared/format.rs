use chrono::NaiveDate;

/// Сумма с разделителями тысяч: `1234567.5` → `1,234,567.50`
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Значение для input[type=date]; пустая строка, если даты нет
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Пустое поле формы → None, дата в формате input[type=date]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Число из поля формы; мусор и пустое поле дают 0
pub fn parse_i64(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

pub fn parse_f64(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Пустая строка → None
pub fn opt_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234567.5), "1,234,567.50");
        assert_eq!(format_amount(-950.0), "-950.00");
    }

    #[test]
    fn test_form_parsing() {
        assert_eq!(parse_date("2025-03-01"), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_i64(" 42 "), 42);
        assert_eq!(parse_i64("abc"), 0);
        assert_eq!(parse_f64("12.5"), 12.5);
        assert_eq!(opt_text("  ".into()), None);
        assert_eq!(opt_text(" x ".into()), Some("x".into()));
    }
}
